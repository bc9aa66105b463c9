//! Impact tier value object for sensitivity analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly a single constraint dimension shapes the decision landscape.
///
/// Declaration order doubles as ranking order: `High` sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Returns the uppercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "HIGH",
            Impact::Medium => "MEDIUM",
            Impact::Low => "LOW",
        }
    }

    /// Returns the rank used for impact-ordered views (HIGH first).
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
