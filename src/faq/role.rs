use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::faq::models::Audience;

/// The viewer role used to gate FAQ visibility.
///
/// Built through [`ViewerRole::normalize`]: anything that is not a student or
/// staff role (missing, empty, `"admin"`, typos) becomes `Unrestricted`.
/// This is a display filter, not an authorization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Student,
    Staff,
    #[default]
    Unrestricted,
}

impl ViewerRole {
    /// Trim and lowercase the raw role; only `student` and `staff` restrict.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ViewerRole::Unrestricted;
        };

        match raw.trim().to_lowercase().as_str() {
            "student" => ViewerRole::Student,
            "staff" => ViewerRole::Staff,
            _ => ViewerRole::Unrestricted,
        }
    }

    /// The audience this role is restricted to, if any.
    pub fn audience(&self) -> Option<Audience> {
        match self {
            ViewerRole::Student => Some(Audience::Student),
            ViewerRole::Staff => Some(Audience::Staff),
            ViewerRole::Unrestricted => None,
        }
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerRole::Student => write!(f, "student"),
            ViewerRole::Staff => write!(f, "staff"),
            ViewerRole::Unrestricted => write!(f, "unrestricted"),
        }
    }
}

impl<'de> Deserialize<'de> for ViewerRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(ViewerRole::normalize(raw.as_deref()))
    }
}
