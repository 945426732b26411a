//! Headless browser adapters.

mod chromium;

pub use chromium::{CaptureSettings, ChromiumCapturer};
