// Internal types shared between the API layer and the stores

use std::fmt;

/// Role assigned to an account. Exactly three roles exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Ngo,
    Donor,
}

impl UserRole {
    /// Parse a role from its wire representation (case-insensitive).
    ///
    /// Returns `None` for anything outside the three allowed values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "ngo" => Some(UserRole::Ngo),
            "donor" => Some(UserRole::Donor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Ngo => "ngo",
            UserRole::Donor => "donor",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Ngo
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated registration data handed to the user store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub cis: Option<String>,
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_all_three_roles() {
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("ngo"), Some(UserRole::Ngo));
        assert_eq!(UserRole::parse("donor"), Some(UserRole::Donor));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(UserRole::parse("NGO"), Some(UserRole::Ngo));
        assert_eq!(UserRole::parse("Donor"), Some(UserRole::Donor));
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert_eq!(UserRole::parse("superuser"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn test_default_role_is_ngo() {
        assert_eq!(UserRole::default(), UserRole::Ngo);
    }
}
