use super::Angle;
use crate::{CoreError, CoreResult};

/// Validates a right ascension.
///
/// Accepts finite angles in [0°, 360°); anything else is rejected rather
/// than wrapped, so a caller that meant 360.5° finds out instead of
/// silently matching against 0.5°.
pub fn validate_right_ascension(angle: Angle) -> CoreResult<Angle> {
    if !angle.is_finite() {
        return Err(CoreError::not_finite("right ascension"));
    }

    let deg = angle.degrees();
    if (0.0..360.0).contains(&deg) {
        return Ok(angle);
    }

    Err(CoreError::out_of_range(
        "right ascension",
        deg,
        "[0\u{b0}, 360\u{b0})",
    ))
}

/// Validates a declination: finite and within [-90°, +90°].
pub fn validate_declination(angle: Angle) -> CoreResult<Angle> {
    if !angle.is_finite() {
        return Err(CoreError::not_finite("declination"));
    }

    let deg = angle.degrees();
    if (-90.0..=90.0).contains(&deg) {
        return Ok(angle);
    }

    Err(CoreError::out_of_range(
        "declination",
        deg,
        "[-90\u{b0}, +90\u{b0}]",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_right_ascension_valid() {
        assert!(validate_right_ascension(Angle::from_degrees(0.0)).is_ok());
        assert!(validate_right_ascension(Angle::from_degrees(359.999)).is_ok());
    }

    #[test]
    fn test_validate_right_ascension_rejects_360() {
        let result = validate_right_ascension(Angle::from_degrees(360.0));
        assert!(matches!(result, Err(CoreError::OutOfRange { .. })));
    }

    #[test]
    fn test_validate_right_ascension_rejects_negative() {
        let result = validate_right_ascension(Angle::from_degrees(-0.001));
        assert!(matches!(result, Err(CoreError::OutOfRange { .. })));
    }

    #[test]
    fn test_validate_right_ascension_not_finite() {
        let result = validate_right_ascension(Angle::from_radians(f64::NAN));
        assert!(matches!(result, Err(CoreError::NotFinite { .. })));

        let result = validate_right_ascension(Angle::from_radians(f64::INFINITY));
        assert!(matches!(result, Err(CoreError::NotFinite { .. })));
    }

    #[test]
    fn test_validate_declination_valid() {
        assert!(validate_declination(Angle::from_degrees(45.0)).is_ok());
        assert!(validate_declination(Angle::from_degrees(-90.0)).is_ok());
        assert!(validate_declination(Angle::from_degrees(90.0)).is_ok());
    }

    #[test]
    fn test_validate_declination_out_of_range() {
        let result = validate_declination(Angle::from_degrees(90.001));
        assert!(matches!(result, Err(CoreError::OutOfRange { .. })));

        let result = validate_declination(Angle::from_degrees(-95.0));
        assert!(matches!(result, Err(CoreError::OutOfRange { .. })));
    }

    #[test]
    fn test_validate_declination_not_finite() {
        let result = validate_declination(Angle::from_radians(f64::NAN));
        assert!(matches!(result, Err(CoreError::NotFinite { .. })));
    }
}
