// Library interface for the diaryrs modules
// This allows integration tests to drive generation without the CLI

pub mod diary;
pub mod error;
pub mod export;
pub mod generator;
pub mod labels;
pub mod logging;
pub mod models;

// Re-export commonly used types for convenience
pub use diary::{bad_day, generate, regular_day};
pub use error::{DiaryError, Result, ValidationError};
pub use export::csv::write_diary;
pub use generator::{daily_sleep, is_bad_day, DailySleep};
pub use logging::{init_logging, LogLevel};
pub use models::{BloodPressure, DayRow, DiaryParams, PersonParams, SleepWindow};
