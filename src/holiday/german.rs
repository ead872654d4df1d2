//! German public holidays by federal state.

use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PublicHoliday;

use super::{HolidayOracle, easter_sunday};

/// A German federal state, identified by its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GermanState {
    /// Baden-Württemberg
    BW,
    /// Bayern
    BY,
    /// Berlin
    BE,
    /// Brandenburg
    BB,
    /// Bremen
    HB,
    /// Hamburg
    HH,
    /// Hessen
    HE,
    /// Mecklenburg-Vorpommern
    MV,
    /// Niedersachsen
    NI,
    /// Nordrhein-Westfalen
    NW,
    /// Rheinland-Pfalz
    RP,
    /// Saarland
    SL,
    /// Sachsen
    SN,
    /// Sachsen-Anhalt
    ST,
    /// Schleswig-Holstein
    SH,
    /// Thüringen
    TH,
}

impl GermanState {
    /// Returns the two-letter state code.
    pub fn code(self) -> &'static str {
        match self {
            GermanState::BW => "BW",
            GermanState::BY => "BY",
            GermanState::BE => "BE",
            GermanState::BB => "BB",
            GermanState::HB => "HB",
            GermanState::HH => "HH",
            GermanState::HE => "HE",
            GermanState::MV => "MV",
            GermanState::NI => "NI",
            GermanState::NW => "NW",
            GermanState::RP => "RP",
            GermanState::SL => "SL",
            GermanState::SN => "SN",
            GermanState::ST => "ST",
            GermanState::SH => "SH",
            GermanState::TH => "TH",
        }
    }

    fn is_one_of(self, states: &[GermanState]) -> bool {
        states.contains(&self)
    }
}

impl FromStr for GermanState {
    type Err = EngineError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        use GermanState::*;

        match code.trim().to_ascii_uppercase().as_str() {
            "BW" => Ok(BW),
            "BY" => Ok(BY),
            "BE" => Ok(BE),
            "BB" => Ok(BB),
            "HB" => Ok(HB),
            "HH" => Ok(HH),
            "HE" => Ok(HE),
            "MV" => Ok(MV),
            "NI" => Ok(NI),
            "NW" => Ok(NW),
            "RP" => Ok(RP),
            "SL" => Ok(SL),
            "SN" => Ok(SN),
            "ST" => Ok(ST),
            "SH" => Ok(SH),
            "TH" => Ok(TH),
            _ => Err(EngineError::UnknownRegion {
                code: code.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for GermanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Statutory public holidays of the German federal states.
///
/// Holidays that only apply to parts of a state (e.g. Assumption Day in
/// Catholic communities of Bavaria, Augsburg Peace Festival) are not listed.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::holiday::{GermanHolidayCalendar, HolidayOracle};
/// use chrono::NaiveDate;
///
/// let calendar = GermanHolidayCalendar;
/// let corpus_christi = NaiveDate::from_ymd_opt(2026, 6, 4).unwrap();
///
/// assert!(calendar.is_holiday(corpus_christi, "BW").unwrap());
/// assert!(!calendar.is_holiday(corpus_christi, "HH").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanHolidayCalendar;

impl GermanHolidayCalendar {
    /// Lists the public holidays of a year in a state, in date order.
    pub fn holidays_in_year(&self, year: i32, region: &str) -> EngineResult<Vec<PublicHoliday>> {
        let state: GermanState = region.parse()?;

        let mut holidays: Vec<PublicHoliday> = state_holidays(year, state)
            .into_iter()
            .map(|(date, name)| PublicHoliday {
                date,
                name: name.to_string(),
                region: state.code().to_string(),
            })
            .collect();
        holidays.sort_by_key(|holiday| holiday.date);

        Ok(holidays)
    }
}

impl HolidayOracle for GermanHolidayCalendar {
    fn holiday_name(&self, date: NaiveDate, region: &str) -> EngineResult<Option<String>> {
        let state: GermanState = region.parse()?;

        Ok(state_holidays(date.year(), state)
            .into_iter()
            .find(|(holiday, _)| *holiday == date)
            .map(|(_, name)| name.to_string()))
    }
}

/// Returns the Wednesday before 23 November.
fn day_of_repentance(year: i32) -> Option<NaiveDate> {
    let nov_22 = NaiveDate::from_ymd_opt(year, 11, 22)?;
    let days_since_wednesday = (nov_22.weekday().num_days_from_monday() + 7
        - Weekday::Wed.num_days_from_monday())
        % 7;
    nov_22.checked_sub_days(Days::new(u64::from(days_since_wednesday)))
}

fn state_holidays(year: i32, state: GermanState) -> Vec<(NaiveDate, &'static str)> {
    use GermanState::*;

    let fixed = |month: u32, day: u32| NaiveDate::from_ymd_opt(year, month, day);
    let easter = easter_sunday(year);
    let from_easter = |offset: i64| {
        easter.and_then(|sunday| {
            if offset < 0 {
                sunday.checked_sub_days(Days::new(offset.unsigned_abs()))
            } else {
                sunday.checked_add_days(Days::new(offset.unsigned_abs()))
            }
        })
    };

    let reformation_day = year == 2017
        || state.is_one_of(&[BB, MV, SN, ST, TH])
        || (year >= 2018 && state.is_one_of(&[HB, HH, NI, SH]));
    let womens_day = (state == BE && year >= 2019) || (state == MV && year >= 2023);

    let candidates: [(bool, Option<NaiveDate>, &'static str); 20] = [
        (true, fixed(1, 1), "New Year's Day"),
        (state.is_one_of(&[BW, BY, ST]), fixed(1, 6), "Epiphany"),
        (womens_day, fixed(3, 8), "International Women's Day"),
        (true, from_easter(-2), "Good Friday"),
        (state == BB, easter, "Easter Sunday"),
        (true, from_easter(1), "Easter Monday"),
        (true, fixed(5, 1), "Labour Day"),
        (
            state == BE && (year == 2020 || year == 2025),
            fixed(5, 8),
            "Liberation Day",
        ),
        (true, from_easter(39), "Ascension Day"),
        (state == BB, from_easter(49), "Whit Sunday"),
        (true, from_easter(50), "Whit Monday"),
        (
            state.is_one_of(&[BW, BY, HE, NW, RP, SL]),
            from_easter(60),
            "Corpus Christi",
        ),
        (state == SL, fixed(8, 15), "Assumption Day"),
        (state == TH && year >= 2019, fixed(9, 20), "World Children's Day"),
        (true, fixed(10, 3), "German Unity Day"),
        (reformation_day, fixed(10, 31), "Reformation Day"),
        (state.is_one_of(&[BW, BY, NW, RP, SL]), fixed(11, 1), "All Saints' Day"),
        (state == SN, day_of_repentance(year), "Day of Repentance and Prayer"),
        (true, fixed(12, 25), "Christmas Day"),
        (true, fixed(12, 26), "Second Day of Christmas"),
    ];

    candidates
        .into_iter()
        .filter(|(applies, _, _)| *applies)
        .filter_map(|(_, date, name)| date.map(|date| (date, name)))
        .collect()
}
