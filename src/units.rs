//! Unit conversions for DrawingML measurements.
//!
//! Lengths are stored in EMUs (914400 per inch), angles in 60000ths of a
//! degree and most percentages in 1000ths of a percent.

use crate::error::{Error, Result};

/// EMUs per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// CSS pixels per inch.
pub const PX_PER_INCH: f64 = 96.0;

/// EMUs per typographic point.
pub const EMU_PER_PT: f64 = 12_700.0;

/// Angle units per degree.
pub const ANGLE_PER_DEGREE: f64 = 60_000.0;

/// Parse a numeric attribute value.
///
/// Absent or empty values are `Ok(None)`; anything that is present but not a
/// number is a [`Error::UnitConversion`].
pub fn parse_number(value: Option<&str>) -> Result<Option<f64>> {
    let raw = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| Error::UnitConversion(raw.to_string()))
}

/// Convert an EMU attribute to pixels. Absent values convert to 0.
pub fn emu_to_px(value: Option<&str>) -> Result<f64> {
    Ok(parse_number(value)?.map_or(0.0, emu_value_to_px))
}

/// Convert a raw EMU quantity to pixels.
pub fn emu_value_to_px(emu: f64) -> f64 {
    emu * PX_PER_INCH / EMU_PER_INCH
}

/// Convert pixels back to EMUs.
pub fn px_to_emu(px: f64) -> f64 {
    px * EMU_PER_INCH / PX_PER_INCH
}

/// Convert an EMU attribute to points. Absent values convert to 0.
pub fn emu_to_pt(value: Option<&str>) -> Result<f64> {
    Ok(parse_number(value)?.map_or(0.0, |emu| emu / EMU_PER_PT))
}

/// Convert an `ST_Angle` attribute to degrees. Absent values convert to 0.
pub fn angle_to_deg(value: Option<&str>) -> Result<f64> {
    Ok(parse_number(value)?.map_or(0.0, |a| a / ANGLE_PER_DEGREE))
}

/// Convert a `ST_PositivePercentage`-style value (100000 = 100%) to a fraction.
pub fn percent_to_fraction(value: Option<&str>) -> Result<Option<f64>> {
    Ok(parse_number(value)?.map(|v| v / 100_000.0))
}

/// Format a float for markup: integers without a fractional part, others
/// trimmed of trailing zeros.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.4}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
