pub mod analysis;
pub mod calculator;
pub mod report;

pub use crate::domain::model::{BearingGeometry, FaultFrequency, FaultKind, FrequencyResult};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
