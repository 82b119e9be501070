//! IAU 1976 equatorial precession of 3-vectors.
//!
//! The rotation is built from the accumulated angles (zeta_A, z_A,
//! theta_A) of Lieske et al. 1977. The ayanamsa computation precesses the
//! vernal-point unit vector between its reference epoch and J2000 with
//! these rotations.

const J2000_JD: f64 = 2_451_545.0;
const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / 648_000.0;

/// Accumulated precession angles (zeta_A, z_A, theta_A) in radians for an
/// epoch `t` Julian centuries TT from J2000.0.
fn precession_angles_rad(t: f64) -> (f64, f64, f64) {
    let zeta = ((0.017_998 * t + 0.301_88) * t + 2306.2181) * t * ARCSEC_TO_RAD;
    let z = ((0.018_203 * t + 1.094_68) * t + 2306.2181) * t * ARCSEC_TO_RAD;
    let theta = ((-0.041_833 * t - 0.426_65) * t + 2004.3109) * t * ARCSEC_TO_RAD;
    (zeta, z, theta)
}

/// Precess an equatorial 3-vector from the equator/equinox of `jd_tt`
/// to J2000.
pub fn precess_equatorial_to_j2000(v: &[f64; 3], jd_tt: f64) -> [f64; 3] {
    if jd_tt == J2000_JD {
        return *v;
    }

    let t = (jd_tt - J2000_JD) / 36_525.0;
    let (zeta, z, theta) = precession_angles_rad(t);

    let (sin_th, cos_th) = theta.sin_cos();
    let (sin_zeta, cos_zeta) = zeta.sin_cos();
    let (sin_z, cos_z) = z.sin_cos();
    let a = cos_zeta * cos_th;
    let b = sin_zeta * cos_th;

    [
        (a * cos_z - sin_zeta * sin_z) * v[0]
            + (a * sin_z + sin_zeta * cos_z) * v[1]
            + cos_zeta * sin_th * v[2],
        -(b * cos_z + cos_zeta * sin_z) * v[0] - (b * sin_z - cos_zeta * cos_z) * v[1]
            - sin_zeta * sin_th * v[2],
        -sin_th * cos_z * v[0] - sin_th * sin_z * v[1] + cos_th * v[2],
    ]
}

/// Precess an equatorial 3-vector from J2000 to the equator/equinox of
/// `jd_tt`. Transpose of [`precess_equatorial_to_j2000`].
pub fn precess_equatorial_from_j2000(v: &[f64; 3], jd_tt: f64) -> [f64; 3] {
    if jd_tt == J2000_JD {
        return *v;
    }

    let t = (jd_tt - J2000_JD) / 36_525.0;
    let (zeta, z, theta) = precession_angles_rad(t);

    let (sin_th, cos_th) = theta.sin_cos();
    let (sin_zeta, cos_zeta) = zeta.sin_cos();
    let (sin_z, cos_z) = z.sin_cos();
    let a = cos_zeta * cos_th;
    let b = sin_zeta * cos_th;

    [
        (a * cos_z - sin_zeta * sin_z) * v[0]
            - (b * cos_z + cos_zeta * sin_z) * v[1]
            - sin_th * cos_z * v[2],
        (a * sin_z + sin_zeta * cos_z) * v[0] - (b * sin_z - cos_zeta * cos_z) * v[1]
            - sin_th * sin_z * v[2],
        cos_zeta * sin_th * v[0] - sin_zeta * sin_th * v[1] + cos_th * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_j2000() {
        let v = [0.3, -0.8, 0.5];
        assert_eq!(precess_equatorial_to_j2000(&v, J2000_JD), v);
        assert_eq!(precess_equatorial_from_j2000(&v, J2000_JD), v);
    }

    #[test]
    fn roundtrip() {
        let v = [0.6, 0.64, 0.48];
        for &jd in &[2_435_553.5, 2_415_020.5, 2_469_807.5] {
            let fwd = precess_equatorial_from_j2000(&v, jd);
            let back = precess_equatorial_to_j2000(&fwd, jd);
            for i in 0..3 {
                assert!(
                    (back[i] - v[i]).abs() < 1e-12,
                    "jd={jd} component {i}: {} vs {}",
                    back[i],
                    v[i]
                );
            }
        }
    }

    #[test]
    fn length_preserved() {
        let v = [1.0, 0.0, 0.0];
        let out = precess_equatorial_from_j2000(&v, 2_435_553.5);
        let len = (out[0] * out[0] + out[1] * out[1] + out[2] * out[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-13, "|Pv| = {len}");
    }

    #[test]
    fn equinox_drift_magnitude() {
        // Over one century the equinox moves about 1.39 degrees along the
        // ecliptic; in equatorial x-y that projects to roughly the same
        // order of magnitude.
        let v = [1.0, 0.0, 0.0];
        let out = precess_equatorial_from_j2000(&v, J2000_JD + 36_525.0);
        let lon_deg = out[1].atan2(out[0]).to_degrees();
        assert!((lon_deg - 1.28).abs() < 0.1, "lon drift = {lon_deg} deg");
    }
}
