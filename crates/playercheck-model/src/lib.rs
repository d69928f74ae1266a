//! Entity value types shared by the player-service client and the harness.
//!
//! The wire format is camelCase JSON; the full `Player` record and the
//! restricted `PlayerItem` list view are deliberately separate types so that
//! code which needs `role` or `login` is forced to re-fetch the full entity.

mod player;
mod roles;

pub use player::{NewPlayer, Player, PlayerId, PlayerItem, PlayerUpdate, PlayersList};
pub use roles::{Gender, ParseGenderError, ParseRoleError, Role};
