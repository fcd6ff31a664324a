//! Terminal output formatting
//!
//! Display utilities for game feedback, reports and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_survey_result, write_feedback, write_hive, write_report,
    write_rules,
};
