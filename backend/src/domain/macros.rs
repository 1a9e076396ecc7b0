//! Helper macro for declaring domain error enums.
//!
//! Each variant carries its display template and gets a snake-case
//! constructor, so call sites read `LookupError::user_not_found(name)` rather
//! than spelling out struct-variant syntax.

macro_rules! define_domain_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_domain_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_domain_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($(#[$field_meta:meta])* $field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($(#[$field_meta])* $field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_domain_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_domain_error;

#[cfg(test)]
mod tests {
    //! Constructor generation checks.
    define_domain_error! {
        pub enum SampleError {
            Missing { subject: String } => "missing: {subject}",
            Exhausted => "exhausted",
            Limited { subject: String, limit: u32 } => "{subject} over {limit}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SampleError::missing("alice");
        assert_eq!(err, SampleError::Missing { subject: "alice".to_owned() });
        assert_eq!(err.to_string(), "missing: alice");
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SampleError::exhausted().to_string(), "exhausted");
    }

    #[test]
    fn constructors_keep_non_string_field_types() {
        let err = SampleError::limited("requests", 3_u32);
        assert_eq!(err.to_string(), "requests over 3");
    }
}
