pub mod local;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::{CliConfig, OutputFormat};

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::TomlConfig;
    use crate::core::{BearingGeometry, ConfigProvider};
    use crate::domain::model::ValidationPolicy;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_required_field, Validate};
    use clap::{Parser, ValueEnum};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
    pub enum OutputFormat {
        #[default]
        Text,
        Json,
        Both,
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "bearing-faults")]
    #[command(about = "Characteristic fault frequencies (BPFO, BPFI, FTF, BSF) of rolling-element bearings")]
    pub struct CliConfig {
        /// TOML bearing file; flags below override its values
        #[arg(short, long)]
        pub config: Option<String>,

        /// Inner diameter in mm
        #[arg(long, allow_negative_numbers = true)]
        pub inner_diameter: Option<f64>,

        /// Outer diameter in mm
        #[arg(long, allow_negative_numbers = true)]
        pub outer_diameter: Option<f64>,

        /// Number of rolling elements
        #[arg(short = 'n', long)]
        pub elements: Option<u32>,

        /// Rolling element diameter in mm
        #[arg(long, allow_negative_numbers = true)]
        pub element_diameter: Option<f64>,

        /// Contact angle in degrees
        #[arg(long, allow_negative_numbers = true)]
        pub contact_angle: Option<f64>,

        /// Shaft speed in RPM
        #[arg(short, long, allow_negative_numbers = true)]
        pub rpm: Option<f64>,

        /// Bearing model shown in the report header
        #[arg(long)]
        pub designation: Option<String>,

        /// Write the JSON export to this file
        #[arg(short, long)]
        pub export: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Append diagnostic interpretation notes to the text report
        #[arg(long)]
        pub notes: bool,

        /// Skip geometry and speed validation
        #[arg(long)]
        pub permissive: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(skip)]
        pub base: Option<TomlConfig>,
    }

    impl CliConfig {
        /// Loads the `--config` file, if any, as the base for the flags.
        pub fn load_base(&mut self) -> Result<()> {
            if let Some(path) = &self.config {
                tracing::info!("Loading bearing file: {}", path);
                self.base = Some(TomlConfig::from_file(path)?);
            }
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn geometry(&self) -> Result<BearingGeometry> {
            let base = self.base.as_ref().map(TomlConfig::bearing_geometry);
            Ok(BearingGeometry::new(
                validate_required_field(
                    "inner_diameter_mm",
                    self.inner_diameter.or(base.map(|b| b.inner_diameter_mm)),
                )?,
                validate_required_field(
                    "outer_diameter_mm",
                    self.outer_diameter.or(base.map(|b| b.outer_diameter_mm)),
                )?,
                validate_required_field(
                    "element_count",
                    self.elements.or(base.map(|b| b.element_count)),
                )?,
                validate_required_field(
                    "element_diameter_mm",
                    self.element_diameter.or(base.map(|b| b.element_diameter_mm)),
                )?,
                validate_required_field(
                    "contact_angle_deg",
                    self.contact_angle.or(base.map(|b| b.contact_angle_deg)),
                )?,
                validate_required_field("rpm", self.rpm.or(base.map(|b| b.rpm)))?,
            ))
        }

        fn validation_policy(&self) -> ValidationPolicy {
            if self.permissive {
                return ValidationPolicy::Permissive;
            }
            self.base
                .as_ref()
                .map(ConfigProvider::validation_policy)
                .unwrap_or_default()
        }

        fn designation(&self) -> Option<&str> {
            self.designation
                .as_deref()
                .or_else(|| self.base.as_ref().and_then(ConfigProvider::designation))
        }

        fn include_notes(&self) -> bool {
            self.notes || self.base.as_ref().is_some_and(ConfigProvider::include_notes)
        }

        fn export_file(&self) -> Option<&str> {
            self.export
                .as_deref()
                .or_else(|| self.base.as_ref().and_then(ConfigProvider::export_file))
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            if let Some(base) = &self.base {
                base.validate()?;
            }
            if let Some(path) = self.export_file() {
                validate_path("export", path)?;
            }
            Ok(())
        }
    }

}
