//! Supply categories and per-category quantities.
//!
//! The same six categories appear on par levels, delivery runs, and
//! container counts.

use super::ParseSupplyCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supply category tracked per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyCategory {
    /// Gaylord sleeves.
    Sleeves,
    /// Gaylord caps.
    Caps,
    /// Canvas carts.
    Canvases,
    /// Totes.
    Totes,
    /// Unprocessed hardline goods.
    HardlinesRaw,
    /// Unprocessed softline goods.
    SoftlinesRaw,
}

impl SupplyCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Sleeves,
        Self::Caps,
        Self::Canvases,
        Self::Totes,
        Self::HardlinesRaw,
        Self::SoftlinesRaw,
    ];

    /// Returns the storage column name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sleeves => "sleeves",
            Self::Caps => "caps",
            Self::Canvases => "canvases",
            Self::Totes => "totes",
            Self::HardlinesRaw => "hardlines_raw",
            Self::SoftlinesRaw => "softlines_raw",
        }
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sleeves => "Sleeves",
            Self::Caps => "Caps",
            Self::Canvases => "Canvases",
            Self::Totes => "Totes",
            Self::HardlinesRaw => "Hardlines Raw",
            Self::SoftlinesRaw => "Softlines Raw",
        }
    }
}

impl fmt::Display for SupplyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SupplyCategory {
    type Error = ParseSupplyCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseSupplyCategoryError(value.to_owned()))
    }
}

/// One count per supply category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplyQuantities {
    /// Sleeves count.
    pub sleeves: u32,
    /// Caps count.
    pub caps: u32,
    /// Canvases count.
    pub canvases: u32,
    /// Totes count.
    pub totes: u32,
    /// Hardlines raw count.
    pub hardlines_raw: u32,
    /// Softlines raw count.
    pub softlines_raw: u32,
}

impl SupplyQuantities {
    /// Returns the count for `category`.
    #[must_use]
    pub const fn get(&self, category: SupplyCategory) -> u32 {
        match category {
            SupplyCategory::Sleeves => self.sleeves,
            SupplyCategory::Caps => self.caps,
            SupplyCategory::Canvases => self.canvases,
            SupplyCategory::Totes => self.totes,
            SupplyCategory::HardlinesRaw => self.hardlines_raw,
            SupplyCategory::SoftlinesRaw => self.softlines_raw,
        }
    }

    /// Sets the count for `category`.
    pub const fn set(&mut self, category: SupplyCategory, value: u32) {
        match category {
            SupplyCategory::Sleeves => self.sleeves = value,
            SupplyCategory::Caps => self.caps = value,
            SupplyCategory::Canvases => self.canvases = value,
            SupplyCategory::Totes => self.totes = value,
            SupplyCategory::HardlinesRaw => self.hardlines_raw = value,
            SupplyCategory::SoftlinesRaw => self.softlines_raw = value,
        }
    }

    /// Returns a copy with `category` set to `value`.
    #[must_use]
    pub const fn with(mut self, category: SupplyCategory, value: u32) -> Self {
        self.set(category, value);
        self
    }

    /// Iterates `(category, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SupplyCategory, u32)> + '_ {
        SupplyCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }
}
