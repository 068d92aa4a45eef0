use crate::core::calculator::compute_with_policy;
use crate::core::report::{FormattedReport, ReportFormatter};
use crate::core::{ConfigProvider, FrequencyResult, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_path;

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub result: FrequencyResult,
    pub report: FormattedReport,
    /// Where the JSON export was written, if one was requested.
    pub export_path: Option<String>,
}

pub struct FaultAnalysisEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FaultAnalysisEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<AnalysisOutcome> {
        let geometry = self.config.geometry()?;
        let policy = self.config.validation_policy();
        tracing::debug!("Bearing geometry: {:?} (validation: {:?})", geometry, policy);

        let result = compute_with_policy(&geometry, policy)?;
        tracing::info!(
            "Computed fault frequencies at {} RPM ({:.2} Hz shaft)",
            geometry.rpm,
            result.rotation_frequency_hz
        );
        for freq in result.iter() {
            tracing::debug!("{} = {:.4} Hz (order {:.4})", freq.kind, freq.hz, freq.order);
        }
        if result.iter().any(|freq| !freq.hz.is_finite()) {
            tracing::warn!("Result contains non-finite frequencies; check the bearing geometry");
        }

        let mut formatter = ReportFormatter::new().with_notes(self.config.include_notes());
        if let Some(designation) = self.config.designation() {
            formatter = formatter.with_designation(designation);
        }
        let report = formatter.format(&result);

        let export_path = match self.config.export_file() {
            Some(path) => {
                validate_path("export_file", path)?;
                report.record.write_to(&self.storage, path)?;
                tracing::info!("Export saved to: {}", path);
                Some(path.to_string())
            }
            None => None,
        };

        Ok(AnalysisOutcome {
            result,
            report,
            export_path,
        })
    }
}
