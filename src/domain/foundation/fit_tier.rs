//! FitTier value object - coarse suitability classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall suitability of one option under the current constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    StrongFit,
    ModerateFit,
    RiskyFit,
}

impl FitTier {
    /// Returns the snake_case key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            FitTier::StrongFit => "strong_fit",
            FitTier::ModerateFit => "moderate_fit",
            FitTier::RiskyFit => "risky_fit",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            FitTier::StrongFit => "Strong Fit",
            FitTier::ModerateFit => "Moderate Fit",
            FitTier::RiskyFit => "Risky Fit",
        }
    }
}

impl fmt::Display for FitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
