use crate::domain::model::BearingGeometry;
use crate::utils::error::{BearingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BearingError::invalid_geometry(
            field_name,
            value,
            "value must be a finite number",
        ));
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(BearingError::invalid_geometry(
            field_name,
            value,
            "value must be greater than zero",
        ));
    }
    Ok(())
}

/// Checks `min <= value < max`.
pub fn validate_half_open_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < min || value >= max {
        return Err(BearingError::invalid_geometry(
            field_name,
            value,
            format!("value must be in [{}, {})", min, max),
        ));
    }
    Ok(())
}

pub fn validate_speed(rpm: f64) -> Result<()> {
    if !rpm.is_finite() {
        return Err(BearingError::invalid_speed(rpm, "speed must be a finite number"));
    }
    if rpm <= 0.0 {
        return Err(BearingError::invalid_speed(rpm, "speed must be greater than zero"));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BearingError::config(format!("{} cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(BearingError::config(format!(
            "{} contains null bytes",
            field_name
        )));
    }

    Ok(())
}

pub fn validate_required_field<T: Copy>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| BearingError::MissingConfig {
        field: field_name.to_string(),
    })
}

impl Validate for BearingGeometry {
    fn validate(&self) -> Result<()> {
        validate_positive("inner_diameter_mm", self.inner_diameter_mm)?;
        validate_positive("outer_diameter_mm", self.outer_diameter_mm)?;
        if self.outer_diameter_mm <= self.inner_diameter_mm {
            return Err(BearingError::invalid_geometry(
                "outer_diameter_mm",
                self.outer_diameter_mm,
                format!(
                    "must be larger than the inner diameter {}",
                    self.inner_diameter_mm
                ),
            ));
        }

        if self.element_count == 0 {
            return Err(BearingError::invalid_geometry(
                "element_count",
                self.element_count,
                "at least one rolling element is required",
            ));
        }

        validate_positive("element_diameter_mm", self.element_diameter_mm)?;
        let race_gap = (self.outer_diameter_mm - self.inner_diameter_mm) / 2.0;
        if self.element_diameter_mm >= race_gap {
            return Err(BearingError::invalid_geometry(
                "element_diameter_mm",
                self.element_diameter_mm,
                format!("must be smaller than the radial race gap {}", race_gap),
            ));
        }

        validate_half_open_range("contact_angle_deg", self.contact_angle_deg, 0.0, 90.0)?;
        validate_speed(self.rpm)
    }
}
