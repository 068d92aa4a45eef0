//! Text report and structured export of a [`FrequencyResult`].
//!
//! Every derived number is rounded to two decimals with [`round2`]
//! (half away from zero). The six bearing inputs are echoed as given.

use crate::domain::model::{FaultFrequency, FaultKind, FrequencyResult};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 70;

const DIAGNOSTIC_NOTES: &[&str] = &[
    "1. Exact results need the manufacturer's geometry (element count,",
    "   element diameter, contact angle) from the catalog or a measurement.",
    "2. Frequencies assume ideal rolling. Measured peaks drift slightly with",
    "   element slip, applied load, operating temperature and lubrication.",
    "3. Where to look in the vibration spectrum:",
    "   - BPFO and its harmonics: outer race defects",
    "   - BPFI and its harmonics: inner race defects",
    "   - FTF: cage damage or lubrication problems",
    "   - BSF: rolling element defects",
    "4. Sidebands around BPFO/BPFI spaced at FTF point to distributed race damage.",
];

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportRecord {
    pub parameters: ExportParameters,
    pub frequencies: ExportFrequencies,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportParameters {
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub pitch_diameter_mm: f64,
    pub element_count: u32,
    pub element_diameter_mm: f64,
    pub contact_angle_deg: f64,
    pub rpm: f64,
    pub rotation_frequency_hz: f64,
}

/// Field order fixes the key order in the exported JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportFrequencies {
    #[serde(rename = "BPFO")]
    pub bpfo: ExportFrequency,
    #[serde(rename = "BPFI")]
    pub bpfi: ExportFrequency,
    #[serde(rename = "FTF")]
    pub ftf: ExportFrequency,
    #[serde(rename = "BSF")]
    pub bsf: ExportFrequency,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportFrequency {
    pub hz: f64,
    pub order: f64,
    pub description: String,
    pub harmonics: ExportHarmonics,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportHarmonics {
    #[serde(rename = "2x")]
    pub second: f64,
    #[serde(rename = "3x")]
    pub third: f64,
}

impl ExportFrequencies {
    pub fn get(&self, kind: FaultKind) -> &ExportFrequency {
        match kind {
            FaultKind::Bpfo => &self.bpfo,
            FaultKind::Bpfi => &self.bpfi,
            FaultKind::Ftf => &self.ftf,
            FaultKind::Bsf => &self.bsf,
        }
    }
}

impl From<&FaultFrequency> for ExportFrequency {
    fn from(freq: &FaultFrequency) -> Self {
        Self {
            hz: round2(freq.hz),
            order: round2(freq.order),
            description: freq.label().to_string(),
            harmonics: ExportHarmonics {
                second: round2(freq.harmonic_2x),
                third: round2(freq.harmonic_3x),
            },
        }
    }
}

impl From<&FrequencyResult> for ExportRecord {
    fn from(result: &FrequencyResult) -> Self {
        let geometry = &result.geometry;
        Self {
            parameters: ExportParameters {
                inner_diameter_mm: geometry.inner_diameter_mm,
                outer_diameter_mm: geometry.outer_diameter_mm,
                pitch_diameter_mm: round2(result.pitch_diameter_mm),
                element_count: geometry.element_count,
                element_diameter_mm: geometry.element_diameter_mm,
                contact_angle_deg: geometry.contact_angle_deg,
                rpm: geometry.rpm,
                rotation_frequency_hz: round2(result.rotation_frequency_hz),
            },
            frequencies: ExportFrequencies {
                bpfo: (&result.bpfo).into(),
                bpfi: (&result.bpfi).into(),
                ftf: (&result.ftf).into(),
                bsf: (&result.bsf).into(),
            },
        }
    }
}

impl ExportRecord {
    /// Pretty-printed JSON with two-space indentation.
    ///
    /// Non-finite values (permissive mode only) are written as `null` and
    /// cannot be read back by [`ExportRecord::from_json`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_to<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        let json = self.to_json()?;
        storage.write_file(path, json.as_bytes())
    }

    pub fn read_from<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let data = storage.read_file(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

#[derive(Debug, Clone)]
pub struct FormattedReport {
    pub text: String,
    pub record: ExportRecord,
}

#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    designation: Option<String>,
    include_notes: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bearing model name printed under the title, e.g. "Timken 30302".
    #[must_use]
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    #[must_use]
    pub fn with_notes(mut self, include_notes: bool) -> Self {
        self.include_notes = include_notes;
        self
    }

    pub fn format(&self, result: &FrequencyResult) -> FormattedReport {
        FormattedReport {
            text: self.render_text(result),
            record: self.to_record(result),
        }
    }

    pub fn to_record(&self, result: &FrequencyResult) -> ExportRecord {
        ExportRecord::from(result)
    }

    pub fn render_text(&self, result: &FrequencyResult) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let geometry = &result.geometry;

        let mut lines = vec![
            rule.clone(),
            "BEARING FAULT FREQUENCIES".to_string(),
            rule.clone(),
        ];
        if let Some(designation) = &self.designation {
            lines.push(format!("Bearing: {}", designation));
        }

        lines.push(String::new());
        lines.push("BEARING PARAMETERS:".to_string());
        lines.push(format!(
            "   Inner diameter (d):        {:.3} mm",
            geometry.inner_diameter_mm
        ));
        lines.push(format!(
            "   Outer diameter (D):        {:.3} mm",
            geometry.outer_diameter_mm
        ));
        lines.push(format!(
            "   Pitch diameter (Pd):       {:.3} mm",
            result.pitch_diameter_mm
        ));
        lines.push(format!(
            "   Number of elements:        {}",
            geometry.element_count
        ));
        lines.push(format!(
            "   Element diameter (Bd):     {:.3} mm",
            geometry.element_diameter_mm
        ));
        lines.push(format!(
            "   Contact angle (β):         {:.1}°",
            geometry.contact_angle_deg
        ));
        lines.push(format!(
            "   Rotation speed:            {} RPM ({:.2} Hz)",
            geometry.rpm,
            round2(result.rotation_frequency_hz)
        ));

        lines.push(String::new());
        lines.push("CHARACTERISTIC FREQUENCIES:".to_string());
        lines.push(String::new());
        for freq in result.iter() {
            lines.extend(frequency_block(freq));
            lines.push(String::new());
        }
        lines.push(rule.clone());

        if self.include_notes {
            lines.push(String::new());
            lines.push("DIAGNOSTIC NOTES:".to_string());
            lines.push(rule);
            lines.extend(DIAGNOSTIC_NOTES.iter().map(|note| format!("   {}", note)));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

fn frequency_block(freq: &FaultFrequency) -> [String; 4] {
    [
        format!("   {} - {}", freq.kind.acronym(), freq.label()),
        format!("   ├─ Frequency: {:.2} Hz", round2(freq.hz)),
        format!("   ├─ Order: {:.2}x RPM", round2(freq.order)),
        format!(
            "   └─ Harmonics: 2x={:.2} Hz, 3x={:.2} Hz",
            round2(freq.harmonic_2x),
            round2(freq.harmonic_3x)
        ),
    ]
}
