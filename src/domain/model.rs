use serde::{Deserialize, Serialize};

/// Geometry and operating speed of a single rolling-element bearing.
///
/// Diameters are in millimeters, the contact angle in degrees and the
/// rotation speed in revolutions per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingGeometry {
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub element_count: u32,
    pub element_diameter_mm: f64,
    pub contact_angle_deg: f64,
    pub rpm: f64,
}

impl BearingGeometry {
    pub fn new(
        inner_diameter_mm: f64,
        outer_diameter_mm: f64,
        element_count: u32,
        element_diameter_mm: f64,
        contact_angle_deg: f64,
        rpm: f64,
    ) -> Self {
        Self {
            inner_diameter_mm,
            outer_diameter_mm,
            element_count,
            element_diameter_mm,
            contact_angle_deg,
            rpm,
        }
    }

    /// Same bearing running at a different speed.
    #[must_use]
    pub const fn with_rpm(mut self, rpm: f64) -> Self {
        self.rpm = rpm;
        self
    }
}

/// The four characteristic bearing defect frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultKind {
    /// Ball pass frequency, outer race.
    Bpfo,
    /// Ball pass frequency, inner race.
    Bpfi,
    /// Fundamental train (cage) frequency.
    Ftf,
    /// Ball spin frequency.
    Bsf,
}

impl FaultKind {
    /// Canonical report order.
    pub const ALL: [FaultKind; 4] = [FaultKind::Bpfo, FaultKind::Bpfi, FaultKind::Ftf, FaultKind::Bsf];

    pub const fn acronym(self) -> &'static str {
        match self {
            FaultKind::Bpfo => "BPFO",
            FaultKind::Bpfi => "BPFI",
            FaultKind::Ftf => "FTF",
            FaultKind::Bsf => "BSF",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FaultKind::Bpfo => "Outer Race",
            FaultKind::Bpfi => "Inner Race",
            FaultKind::Ftf => "Cage",
            FaultKind::Bsf => "Rolling Element",
        }
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.acronym())
    }
}

/// One characteristic frequency with its order and harmonics, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultFrequency {
    pub kind: FaultKind,
    pub hz: f64,
    /// Multiple of the shaft rotation frequency.
    pub order: f64,
    pub harmonic_2x: f64,
    pub harmonic_3x: f64,
}

impl FaultFrequency {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Arbitrary harmonic of the base frequency (`1` is the base itself).
    pub fn harmonic(&self, multiple: u32) -> f64 {
        self.hz * f64::from(multiple)
    }
}

/// Characteristic frequencies derived from exactly one [`BearingGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyResult {
    pub geometry: BearingGeometry,
    pub pitch_diameter_mm: f64,
    pub rotation_frequency_hz: f64,
    pub bpfo: FaultFrequency,
    pub bpfi: FaultFrequency,
    pub ftf: FaultFrequency,
    pub bsf: FaultFrequency,
}

impl FrequencyResult {
    pub fn get(&self, kind: FaultKind) -> &FaultFrequency {
        match kind {
            FaultKind::Bpfo => &self.bpfo,
            FaultKind::Bpfi => &self.bpfi,
            FaultKind::Ftf => &self.ftf,
            FaultKind::Bsf => &self.bsf,
        }
    }

    /// Frequencies in canonical order: BPFO, BPFI, FTF, BSF.
    pub fn iter(&self) -> impl Iterator<Item = &FaultFrequency> {
        FaultKind::ALL.into_iter().map(move |kind| self.get(kind))
    }
}

/// How strictly bearing inputs are checked before computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject non-physical geometry and non-positive speed.
    #[default]
    Strict,
    /// Evaluate the formulas on whatever is given; IEEE 754 semantics apply.
    Permissive,
}
