//! Role and gender enums for the player entity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player role. Not inheritance: a total order used only for rank comparisons
/// in permission lookups. There is exactly one supervisor per environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Supervisor,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "supervisor" => Ok(Role::Supervisor),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Supervisor => "supervisor",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Role::User => 0,
            Role::Admin => 1,
            Role::Supervisor => 2,
        }
    }

    /// Strict rank comparison: supervisor outranks admin outranks user.
    pub fn outranks(&self, other: &Role) -> bool {
        self.rank() > other.rank()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player gender as the backend accepts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid gender: {0}")]
pub struct ParseGenderError(pub String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_outranks() {
        assert!(Role::Supervisor.outranks(&Role::Admin));
        assert!(Role::Supervisor.outranks(&Role::User));
        assert!(Role::Admin.outranks(&Role::User));

        assert!(!Role::Admin.outranks(&Role::Supervisor));
        assert!(!Role::User.outranks(&Role::Admin));
        assert!(!Role::User.outranks(&Role::Supervisor));
    }

    #[test]
    fn test_role_never_outranks_itself() {
        for role in [Role::User, Role::Admin, Role::Supervisor] {
            assert!(!role.outranks(&role));
        }
    }

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Admin, Role::Supervisor] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_parse_invalid() {
        assert!("invalid".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err()); // Case sensitive
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_gender_roundtrip() {
        for gender in [Gender::Male, Gender::Female] {
            let parsed: Gender = gender.as_str().parse().unwrap();
            assert_eq!(gender, parsed);
        }
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_parse_role_error_display() {
        let err = ParseRoleError("boss".to_string());
        assert!(err.to_string().contains("boss"));
    }
}
