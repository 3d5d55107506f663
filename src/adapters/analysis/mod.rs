//! Strategy analyzer adapters.

mod sample_analyzer;

pub use sample_analyzer::{sample_analysis, SampleStrategyAnalyzer};
