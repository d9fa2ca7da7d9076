use crate::models::{DayForecast, LocationForecast};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Number of day columns in the comparison table.
pub const DAY_COLUMNS: usize = 5;

const WEEKDAYS_SHORT: [&str; 7] = ["Sen", "Sel", "Rab", "Kam", "Jum", "Sab", "Min"];
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];
const WEEKDAYS_LONG: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];
const MONTHS_LONG: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    pub dates: Vec<String>,
    pub today_index: usize,
}

/// Header dates and today column, both taken from the first location that
/// is ok and has days. Rows are not checked against these dates.
pub fn table_header(locations: &[LocationForecast]) -> TableHeader {
    let first = locations.iter().find(|l| l.ok && !l.days().is_empty());
    match first {
        Some(location) => TableHeader {
            dates: location
                .days()
                .iter()
                .take(DAY_COLUMNS)
                .map(|d| d.date_iso.clone())
                .collect(),
            today_index: location
                .days()
                .iter()
                .position(|d| d.is_today)
                .unwrap_or(0),
        },
        None => TableHeader {
            dates: Vec::new(),
            today_index: 0,
        },
    }
}

/// Identifies one day of one location within a cached response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayId {
    pub location: usize,
    pub day: usize,
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.location, self.day)
    }
}

impl FromStr for DayId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (location, day) = s
            .split_once('-')
            .ok_or_else(|| format!("malformed day id '{s}'"))?;
        Ok(Self {
            location: location.parse().map_err(|_| format!("malformed day id '{s}'"))?,
            day: day.parse().map_err(|_| format!("malformed day id '{s}'"))?,
        })
    }
}

/// Detail record for a day, looked up by id when the modal opens.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub location: String,
    pub day: DayForecast,
}

#[derive(Debug, Clone, Default)]
pub struct DayIndex {
    entries: HashMap<DayId, DayEntry>,
}

impl DayIndex {
    /// Indexes the rendered days (first five) of every successful location.
    pub fn build(locations: &[LocationForecast]) -> Self {
        let mut entries = HashMap::new();
        for (li, location) in locations.iter().enumerate().filter(|(_, l)| l.ok) {
            for (di, day) in location.days().iter().take(DAY_COLUMNS).enumerate() {
                entries.insert(
                    DayId { location: li, day: di },
                    DayEntry {
                        location: location.beach.clone(),
                        day: day.clone(),
                    },
                );
            }
        }
        Self { entries }
    }

    pub fn get(&self, id: DayId) -> Option<&DayEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// "Sen, 6 Okt"; the raw string when it is not an ISO date.
pub fn short_date_label(iso: &str) -> String {
    match parse_iso(iso) {
        Some(date) => format!(
            "{}, {} {}",
            WEEKDAYS_SHORT[date.weekday().num_days_from_monday() as usize],
            date.day(),
            MONTHS_SHORT[date.month0() as usize]
        ),
        None => iso.to_string(),
    }
}

/// "Senin, 06 Oktober 2026".
pub fn long_date_label(date: NaiveDate) -> String {
    format!(
        "{}, {:02} {} {}",
        WEEKDAYS_LONG[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

fn parse_iso(iso: &str) -> Option<NaiveDate> {
    let date_part = iso.get(..10).unwrap_or(iso);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(dates: &[(&str, bool)]) -> Vec<DayForecast> {
        dates
            .iter()
            .map(|(date, today)| DayForecast {
                date_iso: date.to_string(),
                is_today: *today,
                ..Default::default()
            })
            .collect()
    }

    fn ok_location(name: &str, days: Vec<DayForecast>) -> LocationForecast {
        LocationForecast {
            beach: name.into(),
            ok: true,
            days: Some(days),
            ..Default::default()
        }
    }

    fn failed(name: &str) -> LocationForecast {
        LocationForecast {
            beach: name.into(),
            ok: false,
            error: Some("boom".into()),
            ..Default::default()
        }
    }

    #[test]
    fn header_skips_failed_and_empty_locations() {
        let locations = vec![
            failed("A"),
            ok_location("B", vec![]),
            ok_location(
                "C",
                days(&[
                    ("2026-10-16", false),
                    ("2026-10-17", true),
                    ("2026-10-18", false),
                    ("2026-10-19", false),
                    ("2026-10-20", false),
                    ("2026-10-21", false),
                ]),
            ),
            ok_location("D", days(&[("2026-10-17", false)])),
        ];
        let header = table_header(&locations);
        assert_eq!(header.dates.len(), DAY_COLUMNS);
        assert_eq!(header.dates[0], "2026-10-16");
        assert_eq!(header.today_index, 1);
    }

    #[test]
    fn today_defaults_to_first_column() {
        let header = table_header(&[ok_location("A", days(&[("2026-10-17", false)]))]);
        assert_eq!(header.today_index, 0);

        let header = table_header(&[failed("A")]);
        assert!(header.dates.is_empty());
        assert_eq!(header.today_index, 0);
    }

    #[test]
    fn day_index_covers_successful_locations_only() {
        let locations = vec![
            failed("A"),
            ok_location("B", days(&[("2026-10-17", true), ("2026-10-18", false)])),
        ];
        let index = DayIndex::build(&locations);
        assert_eq!(index.len(), 2);
        let entry = index.get(DayId { location: 1, day: 1 }).unwrap();
        assert_eq!(entry.location, "B");
        assert_eq!(entry.day.date_iso, "2026-10-18");
        assert!(index.get(DayId { location: 0, day: 0 }).is_none());
    }

    #[test]
    fn day_id_parses_its_display_form() {
        let id = DayId { location: 3, day: 4 };
        assert_eq!(id.to_string().parse::<DayId>().unwrap(), id);
        assert!("3".parse::<DayId>().is_err());
        assert!("a-1".parse::<DayId>().is_err());
    }

    #[test]
    fn date_labels_are_indonesian() {
        assert_eq!(short_date_label("2026-10-17"), "Sab, 17 Okt");
        assert_eq!(short_date_label("soon"), "soon");
        let date = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        assert_eq!(long_date_label(date), "Senin, 05 Oktober 2026");
    }
}
