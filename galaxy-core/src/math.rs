use crate::Angle;

#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

/// Great-circle separation between two sky positions given in degrees.
///
/// Uses the Vincenty formula, which stays accurate at all separations
/// including antipodal points and the poles.
pub fn angular_separation(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> Angle {
    let dec1 = Angle::from_degrees(dec1_deg);
    let dec2 = Angle::from_degrees(dec2_deg);
    let delta_lon = Angle::from_degrees(ra2_deg - ra1_deg).radians();

    let (d1_sin, d1_cos) = dec1.sin_cos();
    let (d2_sin, d2_cos) = dec2.sin_cos();

    Angle::from_radians(vincenty_angular_separation(
        d1_sin, d1_cos, d2_sin, d2_cos, delta_lon,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_same_point() {
        let sep = angular_separation(10.0, 10.0, 10.0, 10.0);
        assert!(sep.degrees().abs() < 1e-12);
    }

    #[test]
    fn test_separation_90_degrees() {
        let sep = angular_separation(0.0, 0.0, 90.0, 0.0);
        assert!((sep.degrees() - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_separation_pole_to_equator() {
        let sep = angular_separation(0.0, 90.0, 0.0, 0.0);
        assert!((sep.degrees() - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_separation_antipodes() {
        let sep = angular_separation(0.0, 0.0, 180.0, 0.0);
        assert!((sep.degrees() - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_separation_ra_wraparound() {
        // 359.5 and 0.5 are one degree apart on the equator
        let sep = angular_separation(359.5, 0.0, 0.5, 0.0);
        assert!((sep.degrees() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_separation_small_angle() {
        // 10 arcsec along a meridian
        let sep = angular_separation(50.0, 20.0, 50.0, 20.0 + 10.0 / 3600.0);
        assert!((sep.arcseconds() - 10.0).abs() < 1e-6);
    }
}
