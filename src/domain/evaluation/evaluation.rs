//! Evaluation Result - categorized observations for one option.

use serde::{Deserialize, Serialize};

/// Target category for a fired rule's observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength,
    Limitation,
    HiddenCost,
    AvoidWhen,
}

impl Category {
    /// Returns all categories in report order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Strength,
            Category::Limitation,
            Category::HiddenCost,
            Category::AvoidWhen,
        ]
    }

    /// Returns the display heading for this category.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Strength => "Strengths",
            Category::Limitation => "Limitations",
            Category::HiddenCost => "Hidden Costs",
            Category::AvoidWhen => "When NOT to Choose",
        }
    }
}

/// Per-option evaluation: four ordered observation lists.
///
/// Order within each list is rule-firing order, not significance order, and
/// no deduplication happens - two rules producing the same text both appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub strengths: Vec<String>,
    pub limitations: Vec<String>,
    pub hidden_costs: Vec<String>,
    pub avoid_when: Vec<String>,
}

impl Evaluation {
    /// Appends an observation to the given category.
    pub fn push(&mut self, category: Category, text: impl Into<String>) {
        self.list_mut(category).push(text.into());
    }

    /// Returns the observations recorded under a category.
    pub fn category(&self, category: Category) -> &[String] {
        match category {
            Category::Strength => &self.strengths,
            Category::Limitation => &self.limitations,
            Category::HiddenCost => &self.hidden_costs,
            Category::AvoidWhen => &self.avoid_when,
        }
    }

    /// Returns the total number of observations across all categories.
    pub fn total_observations(&self) -> usize {
        Category::all().iter().map(|c| self.category(*c).len()).sum()
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Strength => &mut self.strengths,
            Category::Limitation => &mut self.limitations,
            Category::HiddenCost => &mut self.hidden_costs,
            Category::AvoidWhen => &mut self.avoid_when,
        }
    }
}
