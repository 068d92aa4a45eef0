use crate::core::{BearingGeometry, ConfigProvider};
use crate::domain::model::ValidationPolicy;
use crate::utils::error::{BearingError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bearing description loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bearing: BearingConfig,
    pub operation: OperationConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearingConfig {
    pub designation: Option<String>,
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub element_count: u32,
    pub element_diameter_mm: f64,
    pub contact_angle_deg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationConfig {
    pub rpm: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub export_file: Option<String>,
    pub validation: Option<ValidationPolicy>,
    pub notes: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            BearingError::config(format!(
                "cannot read '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| BearingError::config(format!("TOML parsing error: {}", e)))
    }

    pub fn bearing_geometry(&self) -> BearingGeometry {
        BearingGeometry::new(
            self.bearing.inner_diameter_mm,
            self.bearing.outer_diameter_mm,
            self.bearing.element_count,
            self.bearing.element_diameter_mm,
            self.bearing.contact_angle_deg,
            self.operation.rpm,
        )
    }

    fn output(&self) -> Option<&OutputConfig> {
        self.output.as_ref()
    }
}

impl ConfigProvider for TomlConfig {
    fn geometry(&self) -> Result<BearingGeometry> {
        Ok(self.bearing_geometry())
    }

    fn validation_policy(&self) -> ValidationPolicy {
        self.output()
            .and_then(|output| output.validation)
            .unwrap_or_default()
    }

    fn designation(&self) -> Option<&str> {
        self.bearing.designation.as_deref()
    }

    fn include_notes(&self) -> bool {
        self.output()
            .and_then(|output| output.notes)
            .unwrap_or(false)
    }

    fn export_file(&self) -> Option<&str> {
        self.output().and_then(|output| output.export_file.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(designation) = &self.bearing.designation {
            if designation.trim().is_empty() {
                return Err(BearingError::config("bearing.designation cannot be blank"));
            }
        }
        if let Some(path) = self.export_file() {
            validate_path("output.export_file", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMKEN_30302: &str = r#"
[bearing]
designation = "Timken 30302"
inner_diameter_mm = 15.0
outer_diameter_mm = 42.0
element_count = 14
element_diameter_mm = 6.5
contact_angle_deg = 15.0

[operation]
rpm = 1500

[output]
export_file = "fault_frequencies.json"
validation = "permissive"
notes = true
"#;

    #[test]
    fn test_parse_full_file() {
        let config = TomlConfig::from_toml_str(TIMKEN_30302).unwrap();
        assert!(config.validate().is_ok());

        let geometry = config.geometry().unwrap();
        assert_eq!(geometry, BearingGeometry::new(15.0, 42.0, 14, 6.5, 15.0, 1500.0));
        assert_eq!(config.designation(), Some("Timken 30302"));
        assert_eq!(config.validation_policy(), ValidationPolicy::Permissive);
        assert!(config.include_notes());
        assert_eq!(config.export_file(), Some("fault_frequencies.json"));
    }

    #[test]
    fn test_output_section_is_optional() {
        let content = r#"
[bearing]
inner_diameter_mm = 25.0
outer_diameter_mm = 52.0
element_count = 9
element_diameter_mm = 7.9
contact_angle_deg = 0.0

[operation]
rpm = 1800.0
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.validation_policy(), ValidationPolicy::Strict);
        assert!(!config.include_notes());
        assert_eq!(config.export_file(), None);
        assert_eq!(config.designation(), None);
    }

    #[test]
    fn test_missing_field_is_config_error() {
        let content = r#"
[bearing]
inner_diameter_mm = 25.0

[operation]
rpm = 1800.0
"#;
        let err = TomlConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, BearingError::ConfigError { .. }));
    }

    #[test]
    fn test_demo_bearing_file_loads() {
        let config = TomlConfig::from_file(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/demos/timken_30302.toml"
        ))
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.validation_policy(), ValidationPolicy::Strict);
        assert_eq!(config.geometry().unwrap().element_count, 14);
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/bearing.toml").unwrap_err();
        assert!(matches!(err, BearingError::ConfigError { .. }));
    }

    #[test]
    fn test_blank_designation_rejected() {
        let content = TIMKEN_30302.replace("Timken 30302", "  ");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }
}
