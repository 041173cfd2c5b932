pub mod driver;
pub mod generator;
pub mod patch;

pub use crate::domain::model::{GeneratorReport, HeavyBinding, PinAssignment};
pub use crate::domain::ports::{DriverConfig, ToolRunner};
pub use crate::utils::error::Result;
