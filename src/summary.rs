use crate::models::{DayForecast, LocationForecast, LocationSummary, Summary};
use std::str::FromStr;

/// Circumference of the summary ring (r = 54).
pub const TOTAL_STROKE: f64 = 339.3;

/// Days shown per location in cards and table.
pub const DEFAULT_DAY_SPAN: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryMode {
    /// Qualifying days over total days, e.g. "3/5".
    #[default]
    Days,
    /// Average probability, e.g. "62%".
    Probability,
}

impl FromStr for SummaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" => Ok(SummaryMode::Days),
            "prob" | "probability" => Ok(SummaryMode::Probability),
            other => Err(format!("summary mode must be 'days' or 'prob', got '{other}'")),
        }
    }
}

/// Where a location's aggregate comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SummarySource<'a> {
    Provided { summary: &'a Summary, day_count: usize },
    Derived(&'a [DayForecast]),
}

impl<'a> SummarySource<'a> {
    /// Backend summary when present at all, otherwise the raw days.
    pub fn of(location: &'a LocationForecast) -> Self {
        match &location.summary {
            Some(summary) => SummarySource::Provided {
                summary,
                day_count: location.days().len(),
            },
            None => SummarySource::Derived(location.days()),
        }
    }

    pub fn resolve(&self, activity: &str) -> Aggregate {
        match self {
            SummarySource::Provided { summary, day_count } => Aggregate {
                days_total: summary.days_total.unwrap_or(*day_count as u32),
                days_ok: summary.days_ok.unwrap_or(0),
                avg_proba: summary.avg_proba.unwrap_or(0.0),
            },
            SummarySource::Derived(days) => derive(activity, days),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub days_total: u32,
    pub days_ok: u32,
    pub avg_proba: f64,
}

impl Aggregate {
    pub fn headline(&self, mode: SummaryMode) -> String {
        match mode {
            SummaryMode::Days => format!("{}/{}", self.days_ok, self.days_total),
            SummaryMode::Probability => format!("{}%", percent(self.avg_proba)),
        }
    }
}

pub fn headline_label(mode: SummaryMode) -> &'static str {
    match mode {
        SummaryMode::Days => "Hari Layak",
        SummaryMode::Probability => "Rata-rata ML",
    }
}

fn derive(activity: &str, days: &[DayForecast]) -> Aggregate {
    let mut days_ok = 0u32;
    let mut sum = 0.0;
    let mut matched = 0u32;
    for prediction in days.iter().filter_map(|d| d.prediction_for(activity)) {
        sum += prediction.probability();
        matched += 1;
        if prediction.qualifies() {
            days_ok += 1;
        }
    }

    Aggregate {
        days_total: days.len() as u32,
        days_ok,
        avg_proba: if matched == 0 { 0.0 } else { sum / f64::from(matched) },
    }
}

/// Aggregate for a successful location, `None` for a failed one.
pub fn aggregate(location: &LocationForecast, activity: &str) -> Option<Aggregate> {
    if !location.ok {
        return None;
    }
    Some(SummarySource::of(location).resolve(activity))
}

/// Probability in [0, 1] as a whole percentage.
pub fn percent(proba: f64) -> i64 {
    (proba * 100.0).round() as i64
}

/// Ring fill percentage read back from a rendered headline ("62%" or "3/5").
pub fn fill_percent(headline: &str) -> i64 {
    let text = headline.trim();
    if text.contains('%') {
        leading_int(text).unwrap_or(0)
    } else if let Some((num, den)) = text.split_once('/') {
        let num: f64 = num.trim().parse().unwrap_or(f64::NAN);
        let den: f64 = den.trim().parse().unwrap_or(f64::NAN);
        if den == 0.0 || den.is_nan() || num.is_nan() {
            0
        } else {
            (num / den * 100.0).round() as i64
        }
    } else {
        0
    }
}

/// Stroke length drawn on the ring for a fill percentage.
pub fn ring_stroke(pct: i64) -> f64 {
    (pct as f64 * 3.393).min(TOTAL_STROKE)
}

fn leading_int(text: &str) -> Option<i64> {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Value of the "forecast days" counter shown above the cards.
pub fn forecast_days_stat(locations: &[LocationForecast]) -> u32 {
    let first = locations.iter().find(|l| {
        l.summary.as_ref().and_then(|s| s.days_total).unwrap_or(0) > 0 || !l.days().is_empty()
    });
    first
        .and_then(|l| l.summary.as_ref())
        .and_then(|s| s.days_total)
        .unwrap_or(DEFAULT_DAY_SPAN)
}

pub fn summarize(locations: &[LocationForecast], activity: &str, mode: SummaryMode) -> Vec<LocationSummary> {
    locations
        .iter()
        .map(|location| match aggregate(location, activity) {
            Some(agg) => LocationSummary {
                location: location.beach.clone(),
                ok: true,
                days_total: Some(agg.days_total),
                days_ok: Some(agg.days_ok),
                avg_proba: Some(agg.avg_proba),
                headline: Some(agg.headline(mode)),
                derived: Some(location.summary.is_none()),
                error: None,
            },
            None => LocationSummary {
                location: location.beach.clone(),
                ok: false,
                days_total: None,
                days_ok: None,
                avg_proba: None,
                headline: None,
                derived: None,
                error: Some(location_error(location)),
            },
        })
        .collect()
}

pub fn location_error(location: &LocationForecast) -> String {
    location
        .error
        .clone()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "Data tidak tersedia".to_string())
}
