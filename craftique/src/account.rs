use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    Artisan,
    #[default]
    Buyer,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Buyer, Role::Artisan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artisan => "Artisan",
            Self::Buyer => "Buyer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record of the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub handle: String,
    pub display_name: String,
    pub address: String,
    pub secret: String,
    pub role: Role,
}

impl Account {
    pub fn new(
        handle: impl Into<String>,
        display_name: impl Into<String>,
        address: impl Into<String>,
        secret: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            handle: handle.into(),
            display_name: display_name.into(),
            address: address.into(),
            secret: secret.into(),
            role,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            handle: self.handle.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

/// What an open session knows about its user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub handle: String,
    pub display_name: String,
    pub role: Role,
}

impl Identity {
    /// Name used to greet the user, falling back to the handle and then to "User".
    pub fn greeting_name(&self) -> &str {
        if !self.display_name.is_empty() {
            &self.display_name
        } else if !self.handle.is_empty() {
            &self.handle
        } else {
            "User"
        }
    }

    /// Uppercased first letter of the display name, shown as the avatar.
    pub fn initial(&self) -> String {
        self.greeting_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_name_falls_back() {
        let mut identity = Account::new("artisan", "Amara Sinha", "a@b.co", "pass", Role::Artisan)
            .identity();
        assert_eq!(identity.greeting_name(), "Amara Sinha");
        assert_eq!(identity.initial(), "A");

        identity.display_name.clear();
        assert_eq!(identity.greeting_name(), "artisan");

        identity.handle.clear();
        assert_eq!(identity.greeting_name(), "User");
        assert_eq!(identity.initial(), "U");
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::Artisan.to_string(), "Artisan");
        assert_eq!(Role::default(), Role::Buyer);
    }
}
