use serde::{Deserialize, Serialize};
use std::fmt;

/// The category sentinel that matches every entry.
pub const ALL_CATEGORY: &str = "All";

/// The viewer-role restriction attached to an FAQ entry.
///
/// Parsed exactly: an unexpected value is preserved as `Other` instead of
/// being widened to `All`, so a typo in the dataset never makes an entry
/// globally visible to restricted viewers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Audience {
    /// Visible to every viewer.
    All,
    /// Visible to students (and unrestricted viewers).
    Student,
    /// Visible to staff (and unrestricted viewers).
    Staff,
    /// Any other raw value found in the dataset.
    Other(String),
}

impl Audience {
    pub fn as_str(&self) -> &str {
        match self {
            Audience::All => "all",
            Audience::Student => "student",
            Audience::Staff => "staff",
            Audience::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Audience::Other(_))
    }
}

impl From<String> for Audience {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "all" => Audience::All,
            "student" => Audience::Student,
            "staff" => Audience::Staff,
            _ => Audience::Other(raw),
        }
    }
}

impl From<Audience> for String {
    fn from(audience: Audience) -> Self {
        match audience {
            Audience::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category selection: either the `"All"` sentinel or one named category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a raw category string. Only the exact string `"All"` is the sentinel.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Returns `true` if the entry belongs to this selection.
    pub fn matches(&self, entry: &FaqEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => entry.category == *name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(raw: String) -> Self {
        if raw == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(raw)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        CategoryFilter::parse(raw)
    }
}

impl From<CategoryFilter> for String {
    fn from(category: CategoryFilter) -> Self {
        match category {
            CategoryFilter::All => ALL_CATEGORY.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One question/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Stable unique identifier.
    pub id: String,
    pub question: String,
    /// Blank-line separated paragraphs; see [`crate::faq::answer::parse_answer`].
    pub answer: String,
    /// Must name a category from the catalog's enumeration.
    pub category: String,
    pub audience: Audience,
    /// Lowercase keywords used only for search matching.
    #[serde(default)]
    pub tags: Vec<String>,
}
