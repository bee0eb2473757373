//! Unit conversion helpers
//!
//! All biometric data is held in SI units (kg, cm). Conversions here are
//! for display only.

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Convert centimeters to total inches
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Format a height in centimeters as feet and inches, e.g. `5'6.9"`
///
/// Whole feet, then the remaining inches rounded to one decimal. A
/// remainder that rounds up to 12.0 is printed as-is (`5'12.0"`) rather
/// than carried into the feet.
pub fn cm_to_feet_inches(cm: f64) -> String {
    let total_inches = cm_to_inches(cm);
    let feet = (total_inches / INCHES_PER_FOOT).floor();
    let inches = total_inches - feet * INCHES_PER_FOOT;
    format!("{}'{:.1}\"", feet as i64, inches)
}
