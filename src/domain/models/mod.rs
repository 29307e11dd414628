//! Domain models for the logging facade

pub mod fields;
pub mod format;
pub mod level;

pub use fields::{Field, Fields, Value};
pub use format::LogFormat;
pub use level::{Level, ParseLevelError};
