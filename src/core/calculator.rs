//! Closed-form bearing defect frequencies.
//!
//! All functions here are pure: no I/O, no logging, no rounding. Rounding
//! happens only when a result is formatted or exported.

use crate::domain::model::{
    BearingGeometry, FaultFrequency, FaultKind, FrequencyResult, ValidationPolicy,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Computes the characteristic frequencies without checking the inputs.
///
/// Non-physical geometry propagates through the arithmetic: `rpm = 0` yields
/// zero frequencies and NaN orders, a zero pitch diameter yields infinities.
pub fn compute(geometry: &BearingGeometry) -> FrequencyResult {
    let pitch_diameter = (geometry.inner_diameter_mm + geometry.outer_diameter_mm) / 2.0;
    let beta = geometry.contact_angle_deg.to_radians();
    let ratio = geometry.element_diameter_mm / pitch_diameter;
    let cos_beta = beta.cos();
    let f_rot = geometry.rpm / 60.0;

    let half_count = f64::from(geometry.element_count) / 2.0;
    let projected = ratio * cos_beta;

    let bpfo = half_count * (1.0 - projected) * f_rot;
    let bpfi = half_count * (1.0 + projected) * f_rot;
    let ftf = 0.5 * (1.0 - projected) * f_rot;
    let bsf = (pitch_diameter / (2.0 * geometry.element_diameter_mm))
        * (1.0 - projected.powi(2))
        * f_rot;

    FrequencyResult {
        geometry: *geometry,
        pitch_diameter_mm: pitch_diameter,
        rotation_frequency_hz: f_rot,
        bpfo: fault_frequency(FaultKind::Bpfo, bpfo, f_rot),
        bpfi: fault_frequency(FaultKind::Bpfi, bpfi, f_rot),
        ftf: fault_frequency(FaultKind::Ftf, ftf, f_rot),
        bsf: fault_frequency(FaultKind::Bsf, bsf, f_rot),
    }
}

/// Six-argument form of [`compute`].
pub fn compute_frequencies(
    inner_diameter_mm: f64,
    outer_diameter_mm: f64,
    element_count: u32,
    element_diameter_mm: f64,
    contact_angle_deg: f64,
    rpm: f64,
) -> FrequencyResult {
    compute(&BearingGeometry::new(
        inner_diameter_mm,
        outer_diameter_mm,
        element_count,
        element_diameter_mm,
        contact_angle_deg,
        rpm,
    ))
}

/// Validates the geometry and speed, then computes.
///
/// # Errors
///
/// `InvalidGeometry` for non-physical dimensions or contact angle,
/// `InvalidSpeed` for a non-positive or non-finite speed.
pub fn compute_checked(geometry: &BearingGeometry) -> Result<FrequencyResult> {
    geometry.validate()?;
    Ok(compute(geometry))
}

pub fn compute_with_policy(
    geometry: &BearingGeometry,
    policy: ValidationPolicy,
) -> Result<FrequencyResult> {
    match policy {
        ValidationPolicy::Strict => compute_checked(geometry),
        ValidationPolicy::Permissive => Ok(compute(geometry)),
    }
}

fn fault_frequency(kind: FaultKind, hz: f64, f_rot: f64) -> FaultFrequency {
    FaultFrequency {
        kind,
        hz,
        order: hz / f_rot,
        harmonic_2x: hz * 2.0,
        harmonic_3x: hz * 3.0,
    }
}
