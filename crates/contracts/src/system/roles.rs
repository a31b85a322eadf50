use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse permission tag. Gates menu visibility and page access.
///
/// Serialized as the upper-case tag (`"ADMIN"`, `"CMS"`, ...). Tags this build
/// does not know are kept verbatim in [`Role::Other`] so a snapshot containing
/// a newer role still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    Admin,
    Cms,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Cms => "CMS",
            Role::User => "USER",
            Role::Other(tag) => tag.as_str(),
        }
    }

    /// Human readable label for headers and badges
    pub fn label(&self) -> &str {
        match self {
            Role::SuperAdmin => "Super admin",
            Role::Admin => "Admin",
            Role::Cms => "CMS",
            Role::User => "User",
            Role::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" => Role::SuperAdmin,
            "ADMIN" => Role::Admin,
            "CMS" => Role::Cms,
            "USER" => Role::User,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"SUPER_ADMIN\"");
        let role: Role = serde_json::from_str("\"cms\"").unwrap();
        assert_eq!(role, Role::Cms);
    }

    #[test]
    fn test_unknown_role_is_kept() {
        let role: Role = serde_json::from_str("\"AUDITOR\"").unwrap();
        assert_eq!(role, Role::Other("AUDITOR".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"AUDITOR\"");
    }
}
