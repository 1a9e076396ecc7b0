//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters depend on these traits rather than on concrete stores so
//! handlers can be exercised against doubles.

mod user_lookup;

#[cfg(test)]
pub use user_lookup::MockUserLookup;
pub use user_lookup::UserLookup;
