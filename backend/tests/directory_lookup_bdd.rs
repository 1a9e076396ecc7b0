//! Behaviour tests for directory lookups.
//!
//! These scenarios exercise name lookups, city filters with aliases, and the
//! not-found messages clients see.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use user_directory::domain::{LookupError, RecordStore, UserRecord};

enum Outcome {
    User(UserRecord),
    Users(Vec<UserRecord>),
    Failed(LookupError),
}

struct DirectoryWorld {
    store: RecordStore,
    outcome: RefCell<Option<Outcome>>,
}

impl DirectoryWorld {
    fn new() -> Self {
        Self {
            store: RecordStore::seeded(),
            outcome: RefCell::new(None),
        }
    }

    fn record(&self, outcome: Outcome) {
        *self.outcome.borrow_mut() = Some(outcome);
    }

    fn with_outcome<F>(&self, f: F)
    where
        F: FnOnce(&Outcome),
    {
        let outcome = self.outcome.borrow();
        f(outcome.as_ref().expect("a lookup should have run"));
    }
}

#[fixture]
fn world() -> DirectoryWorld {
    DirectoryWorld::new()
}

#[given("the seeded directory")]
fn the_seeded_directory(world: &DirectoryWorld) {
    assert_eq!(world.store.len(), 3);
}

#[when("I look up the user \"{name}\"")]
fn i_look_up_the_user(world: &DirectoryWorld, name: String) {
    let outcome = match world.store.find_by_name(&name) {
        Ok((_, user)) => Outcome::User(user.clone()),
        Err(err) => Outcome::Failed(err),
    };
    world.record(outcome);
}

#[when("I list users in the city \"{city}\"")]
fn i_list_users_in_the_city(world: &DirectoryWorld, city: String) {
    let outcome = match world.store.find_by_city(&city) {
        Ok(users) => Outcome::Users(users.into_iter().cloned().collect()),
        Err(err) => Outcome::Failed(err),
    };
    world.record(outcome);
}

#[then("the matched user's last name is \"{last_name}\"")]
fn the_matched_users_last_name_is(world: &DirectoryWorld, last_name: String) {
    world.with_outcome(|outcome| match outcome {
        Outcome::User(user) => assert_eq!(user.last_name(), last_name),
        _ => panic!("expected a single matched user"),
    });
}

#[then("the matched user's first name is \"{first_name}\"")]
fn the_matched_users_first_name_is(world: &DirectoryWorld, first_name: String) {
    world.with_outcome(|outcome| match outcome {
        Outcome::User(user) => assert_eq!(user.first_name(), first_name),
        _ => panic!("expected a single matched user"),
    });
}

#[then("the listed first names are \"{names}\"")]
fn the_listed_first_names_are(world: &DirectoryWorld, names: String) {
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();
    world.with_outcome(|outcome| match outcome {
        Outcome::Users(users) => {
            let actual: Vec<&str> = users.iter().map(UserRecord::first_name).collect();
            assert_eq!(actual, expected);
        }
        _ => panic!("expected a list of users"),
    });
}

#[then("the lookup fails with \"{message}\"")]
fn the_lookup_fails_with(world: &DirectoryWorld, message: String) {
    world.with_outcome(|outcome| match outcome {
        Outcome::Failed(err) => assert_eq!(err.to_string(), message),
        _ => panic!("expected the lookup to fail"),
    });
}

#[scenario(
    path = "tests/features/directory_lookup.feature",
    name = "Looking up a user by first name ignores case"
)]
fn looking_up_a_user_by_first_name_ignores_case(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory_lookup.feature",
    name = "Looking up a user by last name"
)]
fn looking_up_a_user_by_last_name(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory_lookup.feature",
    name = "Looking up an unknown user"
)]
fn looking_up_an_unknown_user(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory_lookup.feature",
    name = "Filtering by a city alias"
)]
fn filtering_by_a_city_alias(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory_lookup.feature",
    name = "Filtering by a city code keeps directory order"
)]
fn filtering_by_a_city_code_keeps_directory_order(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory_lookup.feature",
    name = "Filtering by an unknown city"
)]
fn filtering_by_an_unknown_city(world: DirectoryWorld) {
    drop(world);
}
