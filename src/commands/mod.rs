//! Command implementations

pub mod analyze;
pub mod simple;
pub mod survey;

pub use analyze::{AnalysisResult, ScoredWord, analyze_letters};
pub use simple::run_simple;
pub use survey::{SurveyResult, run_survey};
