//! Player record types: the full entity, the restricted list view, and the
//! creation/update payloads.

use serde::{Deserialize, Serialize};

use crate::roles::{Gender, Role};

/// Backend-assigned player identifier. Opaque: never chosen by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full player record as returned by get-by-id, create and update.
///
/// `password` is write-only: the backend may replace or omit it on read, so it
/// is excluded from readable-field comparison (`readable_eq` / `diff_readable`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub login: String,
    pub screen_name: String,
    pub gender: Gender,
    pub age: i32,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Player {
    /// Field-by-field equality over the fields the backend lets us read back
    /// reliably. The write-only password is ignored.
    pub fn readable_eq(&self, other: &Player) -> bool {
        self.id == other.id
            && self.login == other.login
            && self.screen_name == other.screen_name
            && self.gender == other.gender
            && self.age == other.age
            && self.role == other.role
    }

    /// Partial update that would bring `current` back to `self`, carrying only
    /// the readable fields that differ. Returns an empty patch when nothing
    /// drifted.
    pub fn diff_readable(&self, current: &Player) -> PlayerUpdate {
        PlayerUpdate {
            login: (self.login != current.login).then(|| self.login.clone()),
            screen_name: (self.screen_name != current.screen_name)
                .then(|| self.screen_name.clone()),
            gender: (self.gender != current.gender).then_some(self.gender),
            age: (self.age != current.age).then_some(self.age),
            role: (self.role != current.role).then_some(self.role),
            password: None,
        }
    }
}

/// Restricted projection returned by the listing endpoint.
///
/// `role` sometimes appears on the wire but is not part of the view's
/// contract; it is excluded from equality, and any policy decision must
/// re-fetch the full `Player` by id.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    pub id: PlayerId,
    pub screen_name: String,
    pub gender: Gender,
    pub age: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl PartialEq for PlayerItem {
    fn eq(&self, other: &Self) -> bool {
        // role deliberately excluded
        self.id == other.id
            && self.screen_name == other.screen_name
            && self.gender == other.gender
            && self.age == other.age
    }
}

impl Eq for PlayerItem {}

/// Wire wrapper around the listing response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayersList {
    pub players: Vec<PlayerItem>,
}

/// Creation payload. The backend assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub login: String,
    pub password: String,
    pub screen_name: String,
    pub gender: Gender,
    pub age: i32,
    pub role: Role,
}

/// Partial update payload: only provided fields change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl PlayerUpdate {
    /// True when no field is set, i.e. nothing would change.
    pub fn is_empty(&self) -> bool {
        self.login.is_none()
            && self.screen_name.is_none()
            && self.gender.is_none()
            && self.age.is_none()
            && self.role.is_none()
            && self.password.is_none()
    }

    /// Apply this patch on top of an existing player record.
    pub fn apply_to(&self, player: &Player) -> Player {
        Player {
            id: player.id,
            login: self.login.clone().unwrap_or_else(|| player.login.clone()),
            screen_name: self
                .screen_name
                .clone()
                .unwrap_or_else(|| player.screen_name.clone()),
            gender: self.gender.unwrap_or(player.gender),
            age: self.age.unwrap_or(player.age),
            role: self.role.unwrap_or(player.role),
            password: self.password.clone().or_else(|| player.password.clone()),
        }
    }
}
