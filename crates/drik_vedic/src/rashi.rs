//! Rashi (sidereal zodiac sign) types and the Sun's rashi at a moment.

use drik_eph::Engine;

/// The 12 rashis, numbered 1 (Mesha) through 12 (Meena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karkata,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (index 0 = Mesha).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karkata,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karkata => "Karkata",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 1-based rashi number (Mesha = 1 .. Meena = 12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi from a 1-based number; numbers wrap modulo 12.
    pub fn from_number(n: i32) -> Rashi {
        ALL_RASHIS[(n - 1).rem_euclid(12) as usize]
    }
}

/// Rashi containing a sidereal longitude: `ceil(lon/30)` with 0 deg and
/// 360 deg both mapping to Meena (12), never 0 or 13.
pub fn rashi_from_sidereal(lon_deg: f64) -> u8 {
    let mut rashi = (lon_deg / 30.0).ceil() as i32;
    if rashi <= 0 {
        rashi = 12;
    }
    if rashi > 12 {
        rashi %= 12;
        if rashi == 0 {
            rashi = 12;
        }
    }
    rashi as u8
}

/// Sidereal rashi of the Sun at a JD in UT, as a 1-based number.
pub fn solar_rashi(engine: &Engine, jd_ut: f64) -> u8 {
    rashi_from_sidereal(engine.solar_longitude_sidereal(jd_ut))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.number() as usize, i + 1);
            assert_eq!(Rashi::from_number(i as i32 + 1), *r);
        }
    }

    #[test]
    fn from_number_wraps() {
        assert_eq!(Rashi::from_number(13), Rashi::Mesha);
        assert_eq!(Rashi::from_number(0), Rashi::Meena);
    }

    #[test]
    fn boundaries_map_without_zero_or_thirteen() {
        assert_eq!(rashi_from_sidereal(0.0), 12);
        assert_eq!(rashi_from_sidereal(360.0), 12);
        assert_eq!(rashi_from_sidereal(0.0001), 1);
        assert_eq!(rashi_from_sidereal(30.0), 1);
        assert_eq!(rashi_from_sidereal(30.0001), 2);
        assert_eq!(rashi_from_sidereal(359.9999), 12);
    }

    #[test]
    fn every_sector_hits_its_rashi() {
        for r in 1..=12u8 {
            let mid = (r as f64 - 0.5) * 30.0;
            assert_eq!(rashi_from_sidereal(mid), r);
        }
    }
}
