//! Parse human-written clock times ("6:37 PM", "0", "13:37") into normalized
//! 24-hour [`ClockTime`] values.

pub mod app;
pub mod cli;
pub mod clock_time;
pub mod config;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use clock_time::ClockTime;
pub use config::Config;
pub use error::TimeParseError;
pub use parser::{parse, Meridiem};
