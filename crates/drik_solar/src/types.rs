//! Solar calendar types: the four regional calendars, their eras, and
//! month-name tables.

/// The four regional solar calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarCalendar {
    Tamil,
    Bengali,
    Odia,
    Malayalam,
}

/// All four calendars, in CLI option order.
pub const ALL_CALENDARS: [SolarCalendar; 4] = [
    SolarCalendar::Tamil,
    SolarCalendar::Bengali,
    SolarCalendar::Odia,
    SolarCalendar::Malayalam,
];

/// A resolved regional solar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDate {
    /// Era year (Saka, Bangabda, or Kollam depending on the calendar).
    pub year: i32,
    /// Regional month, 1-12.
    pub month: u32,
    /// Day within the regional month, 1-32.
    pub day: u32,
    /// Rashi of the month, 1-12.
    pub rashi: u8,
    /// JD of the sankranti that opened the month.
    pub jd_sankranti: f64,
}

pub(crate) struct CalendarConfig {
    /// Rashi whose sankranti begins regional month 1.
    pub first_rashi: u8,
    /// Gregorian-year minus era-year on or after the year-start day.
    pub on_offset: i32,
    /// Gregorian-year minus era-year before the year-start day.
    pub before_offset: i32,
    /// Month names in regional order (1-indexed; slot 0 empty).
    pub months: &'static [&'static str; 13],
    pub era_name: &'static str,
}

const TAMIL_MONTHS: [&str; 13] = [
    "", "Chithirai", "Vaikaasi", "Aani", "Aadi", "Aavani", "Purattaasi",
    "Aippasi", "Karthikai", "Maargazhi", "Thai", "Maasi", "Panguni",
];

const BENGALI_MONTHS: [&str; 13] = [
    "", "Boishakh", "Joishtho", "Asharh", "Srabon", "Bhadro", "Ashshin",
    "Kartik", "Ogrohaeon", "Poush", "Magh", "Falgun", "Choitro",
];

const ODIA_MONTHS: [&str; 13] = [
    "", "Baisakha", "Jyeshtha", "Ashadha", "Shravana", "Bhadrapada", "Ashvina",
    "Kartika", "Margashirsha", "Pausha", "Magha", "Phalguna", "Chaitra",
];

// Rotated by four relative to rashi order: month 1 (Chingam) is Simha.
const MALAYALAM_MONTHS: [&str; 13] = [
    "", "Chingam", "Kanni", "Thulam", "Vrishchikam", "Dhanu", "Makaram",
    "Kumbham", "Meenam", "Medam", "Edavam", "Mithunam", "Karkadakam",
];

static TAMIL_CONFIG: CalendarConfig = CalendarConfig {
    first_rashi: 1,
    on_offset: 78,
    before_offset: 79,
    months: &TAMIL_MONTHS,
    era_name: "Saka",
};

static BENGALI_CONFIG: CalendarConfig = CalendarConfig {
    first_rashi: 1,
    on_offset: 593,
    before_offset: 594,
    months: &BENGALI_MONTHS,
    era_name: "Bangabda",
};

static ODIA_CONFIG: CalendarConfig = CalendarConfig {
    first_rashi: 1,
    on_offset: 78,
    before_offset: 79,
    months: &ODIA_MONTHS,
    era_name: "Saka",
};

static MALAYALAM_CONFIG: CalendarConfig = CalendarConfig {
    first_rashi: 5,
    on_offset: 824,
    before_offset: 825,
    months: &MALAYALAM_MONTHS,
    era_name: "Kollam",
};

impl SolarCalendar {
    pub(crate) fn config(self) -> &'static CalendarConfig {
        match self {
            Self::Tamil => &TAMIL_CONFIG,
            Self::Bengali => &BENGALI_CONFIG,
            Self::Odia => &ODIA_CONFIG,
            Self::Malayalam => &MALAYALAM_CONFIG,
        }
    }

    /// Calendar name for display.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tamil => "Tamil",
            Self::Bengali => "Bengali",
            Self::Odia => "Odia",
            Self::Malayalam => "Malayalam",
        }
    }

    /// Era name (Saka, Bangabda, Kollam).
    pub fn era_name(self) -> &'static str {
        self.config().era_name
    }

    /// Regional name of month `m` (1-12).
    pub fn month_name(self, m: u32) -> &'static str {
        if (1..=12).contains(&m) {
            self.config().months[m as usize]
        } else {
            "?"
        }
    }

    /// Parse a CLI calendar name.
    pub fn from_cli_name(s: &str) -> Option<SolarCalendar> {
        match s {
            "tamil" => Some(Self::Tamil),
            "bengali" => Some(Self::Bengali),
            "odia" => Some(Self::Odia),
            "malayalam" => Some(Self::Malayalam),
            _ => None,
        }
    }

    /// Regional month (1-12) for a rashi (1-12).
    pub fn month_of_rashi(self, rashi: u8) -> u32 {
        let first = self.config().first_rashi;
        ((rashi as i32 - first as i32).rem_euclid(12) + 1) as u32
    }

    /// Rashi (1-12) for a regional month (1-12).
    pub fn rashi_of_month(self, month: u32) -> u8 {
        let first = self.config().first_rashi;
        ((first as i32 - 1 + month as i32 - 1).rem_euclid(12) + 1) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_name_tables_complete() {
        for cal in ALL_CALENDARS {
            for m in 1..=12 {
                assert!(!cal.month_name(m).is_empty(), "{cal:?} month {m}");
            }
            assert_eq!(cal.month_name(0), "?");
            assert_eq!(cal.month_name(13), "?");
        }
    }

    #[test]
    fn malayalam_rotation() {
        assert_eq!(SolarCalendar::Malayalam.month_of_rashi(5), 1); // Simha -> Chingam
        assert_eq!(SolarCalendar::Malayalam.month_of_rashi(4), 12); // Karkata -> Karkadakam
        assert_eq!(SolarCalendar::Malayalam.month_name(1), "Chingam");
        assert_eq!(SolarCalendar::Malayalam.rashi_of_month(1), 5);
        assert_eq!(SolarCalendar::Malayalam.rashi_of_month(6), 10); // Makaram
    }

    #[test]
    fn mesha_calendars_identity() {
        for cal in [SolarCalendar::Tamil, SolarCalendar::Bengali, SolarCalendar::Odia] {
            for r in 1..=12u8 {
                assert_eq!(cal.month_of_rashi(r), r as u32);
                assert_eq!(cal.rashi_of_month(r as u32), r);
            }
        }
    }

    #[test]
    fn month_rashi_roundtrip() {
        for cal in ALL_CALENDARS {
            for m in 1..=12u32 {
                assert_eq!(cal.month_of_rashi(cal.rashi_of_month(m)), m);
            }
        }
    }

    #[test]
    fn cli_names() {
        assert_eq!(SolarCalendar::from_cli_name("tamil"), Some(SolarCalendar::Tamil));
        assert_eq!(SolarCalendar::from_cli_name("odia"), Some(SolarCalendar::Odia));
        assert_eq!(SolarCalendar::from_cli_name("gujarati"), None);
    }
}
