//! OptionCatalog - ordered, read-only collection of option profiles.

use serde::{Deserialize, Serialize};

use super::OptionProfile;

/// Ordered mapping from option name to profile.
///
/// Declaration order is preserved because every downstream output (evaluation
/// lists, scenario projections, report sections) renders options in catalog
/// order. The catalog is loaded once and never mutated at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionCatalog {
    options: Vec<OptionProfile>,
}

impl OptionCatalog {
    /// Creates a catalog from profiles in declaration order.
    pub fn new(options: Vec<OptionProfile>) -> Self {
        Self { options }
    }

    /// Looks up a profile by option name.
    pub fn get(&self, name: &str) -> Option<&OptionProfile> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Iterates profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionProfile> {
        self.options.iter()
    }

    /// Iterates option names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.name.as_str())
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the catalog holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
