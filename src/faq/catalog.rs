use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::AppError;
use crate::faq::counts::{count_by_category, CategoryCounts};
use crate::faq::filter::{filter_faqs, FaqQuery};
use crate::faq::models::{CategoryFilter, FaqEntry};
use crate::faq::role::ViewerRole;
use crate::faq::visibility::is_visible;

/// The FAQ content compiled into the binary.
const BUILTIN_FAQS_YAML: &str = include_str!("../../faq_data/faqs.yaml");

/// Read-only FAQ dataset plus its ordered category enumeration.
///
/// Constructed once at startup and shared (usually behind an `Arc`); there is
/// no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqCatalog {
    categories: Vec<CategoryFilter>,
    entries: Vec<FaqEntry>,
}

impl FaqCatalog {
    /// Build a catalog, rejecting entries without an id or question and
    /// duplicate ids.
    pub fn new(categories: Vec<CategoryFilter>, entries: Vec<FaqEntry>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(AppError::Catalog("FAQ entry with an empty id".into()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(AppError::Catalog(format!("Duplicate FAQ id '{}'", entry.id)));
            }
            if entry.question.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "FAQ '{}' has an empty question",
                    entry.id
                )));
            }
            if !entry.audience.is_recognized() {
                tracing::warn!(
                    id = %entry.id,
                    audience = %entry.audience,
                    "FAQ has an unrecognized audience; it will only be shown to unrestricted viewers"
                );
            }
            let listed = categories
                .iter()
                .any(|c| matches!(c, CategoryFilter::Named(name) if *name == entry.category));
            if !listed {
                tracing::warn!(
                    id = %entry.id,
                    category = %entry.category,
                    "FAQ category is not in the category list; it only counts toward All"
                );
            }
        }

        Ok(Self { categories, entries })
    }

    /// A catalog with only the `All` category and no entries.
    pub fn empty() -> Self {
        Self {
            categories: vec![CategoryFilter::All],
            entries: Vec::new(),
        }
    }

    /// Parse a catalog from YAML with top-level `categories` and `entries`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, AppError> {
        #[derive(Deserialize)]
        struct RawCatalog {
            categories: Vec<CategoryFilter>,
            #[serde(default)]
            entries: Vec<FaqEntry>,
        }

        let raw: RawCatalog = serde_yaml::from_str(yaml)
            .map_err(|e| AppError::Catalog(format!("Invalid FAQ YAML: {e}")))?;

        Self::new(raw.categories, raw.entries)
    }

    /// Load a catalog from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {e}", path.display()))
        })?;

        let catalog = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.entries.len(),
            "Loaded FAQ catalog"
        );
        Ok(catalog)
    }

    /// The built-in dataset shipped with the application.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_yaml_str(BUILTIN_FAQS_YAML)
    }

    /// The built-in dataset, parsed on first use and shared afterwards.
    ///
    /// Falls back to [`FaqCatalog::empty`] if the embedded YAML is invalid.
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<FaqCatalog>> = OnceLock::new();

        SHARED
            .get_or_init(|| {
                let catalog = Self::builtin().unwrap_or_else(|e| {
                    tracing::error!("Failed to load built-in FAQs: {e}");
                    Self::empty()
                });
                Arc::new(catalog)
            })
            .clone()
    }

    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Look up an entry by id, regardless of visibility.
    pub fn get(&self, id: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look up an entry by id, only if the role may see it.
    pub fn get_visible(&self, id: &str, role: ViewerRole) -> Option<&FaqEntry> {
        self.get(id).filter(|e| is_visible(e, role))
    }

    pub fn filter(&self, query: &FaqQuery) -> Vec<&FaqEntry> {
        filter_faqs(&self.entries, query)
    }

    pub fn counts(&self, role: ViewerRole) -> CategoryCounts {
        count_by_category(&self.entries, &self.categories, role)
    }
}
