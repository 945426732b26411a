//! Website analyzer handlers.

mod analyze_website;

pub use analyze_website::{AnalyzeWebsiteHandler, AnalyzerSettings};
