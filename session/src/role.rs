//! Closed set of platform roles.
//!
//! DESIGN
//! ======
//! The server sends role tags as strings. They are parsed once into [`Role`]
//! so menu and dashboard selection are exhaustive matches; adding a role is a
//! compile error everywhere a mapping is missing.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::{Deserialize, Serialize};

/// Role carried by a signed-in identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Role {
    Admin,
    Mentor,
    #[default]
    Member,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Mentor, Role::Member];

    /// Parse a role tag case-insensitively.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "mentor" => Some(Self::Mentor),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Canonical wire tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Mentor => "Mentor",
            Self::Member => "Member",
        }
    }

    /// REST endpoint serving this role's dashboard summary.
    #[must_use]
    pub fn dashboard_endpoint(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard/metrics",
            Self::Mentor => "/dashboard/mentor",
            Self::Member => "/dashboard/member",
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Self::parse(&tag).unwrap_or_else(|| {
            tracing::warn!(role = %tag, "unknown role tag; falling back to Member");
            Self::Member
        })
    }
}

/// A null or absent tag means the default role.
impl From<Option<String>> for Role {
    fn from(tag: Option<String>) -> Self {
        tag.map_or_else(Self::default, Self::from)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown role `{s}` (expected Admin, Mentor or Member)"))
    }
}
