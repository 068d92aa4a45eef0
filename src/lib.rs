pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::{local::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    analysis::{AnalysisOutcome, FaultAnalysisEngine},
    calculator::{compute, compute_checked, compute_frequencies, compute_with_policy},
    report::{round2, ExportRecord, FormattedReport, ReportFormatter},
};
pub use domain::model::{
    BearingGeometry, FaultFrequency, FaultKind, FrequencyResult, ValidationPolicy,
};
pub use utils::error::{BearingError, Result};
