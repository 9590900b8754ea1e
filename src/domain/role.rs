//! Role - Signed-in User Roles

use serde::{Deserialize, Serialize};

/// The role a user acts in; decides which pages the shell offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    #[default]
    Admin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    /// Get the translation key for the role badge
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "role-super-admin",
            Role::Admin => "role-admin",
            Role::Teacher => "role-teacher",
            Role::Student => "role-student",
            Role::Parent => "role-parent",
        }
    }

    pub fn all() -> &'static [Role] {
        &[
            Role::SuperAdmin,
            Role::Admin,
            Role::Teacher,
            Role::Student,
            Role::Parent,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        role: Role,
    }

    #[test]
    fn role_parses_from_snake_case() {
        let parsed: Wrapper = toml::from_str("role = \"super_admin\"").expect("parse role");
        assert_eq!(parsed.role, Role::SuperAdmin);

        let parsed: Wrapper = toml::from_str("role = \"parent\"").expect("parse role");
        assert_eq!(parsed.role, Role::Parent);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(toml::from_str::<Wrapper>("role = \"janitor\"").is_err());
    }
}
