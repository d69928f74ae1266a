//! Fixture payload builders. Logins and screen names are marker-prefixed and
//! randomized so concurrent runs against the shared backend never collide.

#![allow(dead_code)]

use playercheck_harness::unique_name;
use playercheck_model::{Gender, NewPlayer, Role};

/// A valid user-role payload with a fresh login and screen name.
pub fn valid_user(marker: &str) -> NewPlayer {
    NewPlayer {
        login: unique_name(&format!("{marker}_user")),
        password: "Qwerty12345".to_string(),
        screen_name: unique_name(&format!("{marker}_User")),
        gender: Gender::Male,
        age: 25,
        role: Role::User,
    }
}

/// A valid admin-role payload with a fresh login and screen name.
pub fn valid_admin(marker: &str) -> NewPlayer {
    NewPlayer {
        login: unique_name(&format!("{marker}_admin")),
        password: "Qwerty12345".to_string(),
        screen_name: unique_name(&format!("{marker}_Admin")),
        gender: Gender::Female,
        age: 32,
        role: Role::Admin,
    }
}

/// A payload carrying the given role, valid in every other respect.
pub fn valid_with_role(marker: &str, role: Role) -> NewPlayer {
    let mut payload = valid_user(marker);
    payload.role = role;
    payload
}

/// A user payload whose age is below the accepted range.
pub fn too_young(marker: &str) -> NewPlayer {
    let mut payload = valid_user(marker);
    payload.age = 12;
    payload
}

/// A user payload whose age is above the accepted range.
pub fn too_old(marker: &str) -> NewPlayer {
    let mut payload = valid_user(marker);
    payload.age = 71;
    payload
}
