//! Insight narrative: tension detection, situational profiles, and the
//! synthesized referee statement.

mod profiles;
mod synthesizer;
mod tensions;

pub use profiles::SituationalProfile;
pub use synthesizer::InsightSynthesizer;
pub use tensions::TensionInsight;
