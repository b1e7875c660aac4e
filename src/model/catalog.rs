//! Fixed browse catalog: image categories and filter dimensions.
//!
//! The API accepts a closed set of categories and a handful of filter
//! dimensions, each with a closed set of values. These are the only
//! selections the UI offers; the encoder itself never validates them.

use std::fmt;
use std::str::FromStr;

// ===== Category =====

/// Image category accepted by the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `backgrounds`
    Backgrounds,
    /// `fashion`
    Fashion,
    /// `nature`
    Nature,
    /// `science`
    Science,
    /// `education`
    Education,
    /// `feelings`
    Feelings,
    /// `health`
    Health,
    /// `people`
    People,
    /// `religion`
    Religion,
    /// `places`
    Places,
    /// `animals`
    Animals,
    /// `industry`
    Industry,
    /// `computer`
    Computer,
    /// `food`
    Food,
    /// `sports`
    Sports,
    /// `transportation`
    Transportation,
    /// `travel`
    Travel,
    /// `buildings`
    Buildings,
    /// `business`
    Business,
    /// `music`
    Music,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 20] = [
        Category::Backgrounds,
        Category::Fashion,
        Category::Nature,
        Category::Science,
        Category::Education,
        Category::Feelings,
        Category::Health,
        Category::People,
        Category::Religion,
        Category::Places,
        Category::Animals,
        Category::Industry,
        Category::Computer,
        Category::Food,
        Category::Sports,
        Category::Transportation,
        Category::Travel,
        Category::Buildings,
        Category::Business,
        Category::Music,
    ];

    /// Wire value sent as the `category` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Backgrounds => "backgrounds",
            Category::Fashion => "fashion",
            Category::Nature => "nature",
            Category::Science => "science",
            Category::Education => "education",
            Category::Feelings => "feelings",
            Category::Health => "health",
            Category::People => "people",
            Category::Religion => "religion",
            Category::Places => "places",
            Category::Animals => "animals",
            Category::Industry => "industry",
            Category::Computer => "computer",
            Category::Food => "food",
            Category::Sports => "sports",
            Category::Transportation => "transportation",
            Category::Travel => "travel",
            Category::Buildings => "buildings",
            Category::Business => "business",
            Category::Music => "music",
        }
    }

    /// Position of this category within [`Category::ALL`].
    pub fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ===== FilterKey =====

/// Filter dimension offered by the filter sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// Sort order.
    Order,
    /// Image orientation.
    Orientation,
    /// Image type.
    Type,
    /// Dominant color.
    Colors,
}

impl FilterKey {
    /// All filter dimensions in sheet order.
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Order,
        FilterKey::Orientation,
        FilterKey::Type,
        FilterKey::Colors,
    ];

    /// Wire name of the parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Order => "order",
            FilterKey::Orientation => "orientation",
            FilterKey::Type => "type",
            FilterKey::Colors => "colors",
        }
    }

    /// Values selectable for this dimension.
    ///
    /// `ilustration` is spelled exactly as it goes over the wire.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterKey::Order => &["popular", "latest"],
            FilterKey::Orientation => &["horizontal", "vertical"],
            FilterKey::Type => &["photo", "ilustration", "vector"],
            FilterKey::Colors => &[
                "red",
                "orange",
                "yellow",
                "green",
                "turquoise",
                "blue",
                "pink",
                "gray",
                "black",
                "brown",
                "white",
            ],
        }
    }

    /// Section title shown in the filter sheet.
    pub fn title(self) -> &'static str {
        match self {
            FilterKey::Order => "Order",
            FilterKey::Orientation => "Orientation",
            FilterKey::Type => "Type",
            FilterKey::Colors => "Colors",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== FilterSet =====

/// Active filter selection: at most one value per dimension.
///
/// Insertion order is preserved so that the encoded request lists
/// filters in the order the user picked them. Re-selecting a dimension
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(FilterKey, String)>,
}

impl FilterSet {
    /// Empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, keeping the key's original position if present.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`FilterSet::set`].
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Remove `key`. Returns the removed value, if any.
    pub fn remove(&mut self, key: FilterKey) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Value selected for `key`.
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of active filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove every filter.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate `(key, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
