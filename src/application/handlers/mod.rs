//! Application handlers.

mod run_analysis;

pub use run_analysis::{
    AnalysisReport, AnalysisRequest, OptionAnalysis, RunAnalysisHandler, ScenarioProjection,
    ANALYSIS_ASSUMPTIONS,
};
