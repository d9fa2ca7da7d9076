use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastResponse {
    pub ok: bool,
    #[serde(default)]
    pub locations: Vec<LocationForecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationForecast {
    pub beach: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayForecast>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LocationForecast {
    pub fn days(&self) -> &[DayForecast] {
        self.days.as_deref().unwrap_or_default()
    }
}

/// One forecast day. Metrics are `None` when the backend had no samples for them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DayForecast {
    pub date_iso: String,
    #[serde(default)]
    pub is_today: bool,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_avg: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub rain_mm: Option<f64>,
    #[serde(default)]
    pub sunshine_h: Option<f64>,
    #[serde(default)]
    pub humidity_avg: Option<f64>,
    #[serde(default)]
    pub wind_kmh_avg: Option<f64>,
    #[serde(default)]
    pub ml_predictions: Vec<Prediction>,
}

impl DayForecast {
    /// Prediction whose label matches `activity`, ignoring case.
    pub fn prediction_for(&self, activity: &str) -> Option<&Prediction> {
        self.ml_predictions
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(activity))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Prediction {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub pred: Option<u8>,
    #[serde(default)]
    pub proba_1: Option<f64>,
}

impl Prediction {
    pub fn qualifies(&self) -> bool {
        self.pred == Some(1)
    }

    pub fn probability(&self) -> f64 {
        self.proba_1.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Summary {
    #[serde(default)]
    pub days_total: Option<u32>,
    #[serde(default)]
    pub days_ok: Option<u32>,
    #[serde(default)]
    pub avg_proba: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub activity: Option<String>,
}

/// Resolved per-location summary served by `/api/summary`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LocationSummary {
    pub location: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_ok: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_proba: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub activity: String,
    pub locations: Vec<LocationSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_location_parses_without_days() {
        let raw = r#"{"beach":"Pantai Kuta","ok":false,"error":"HTTP 401"}"#;
        let loc: LocationForecast = serde_json::from_str(raw).unwrap();
        assert!(!loc.ok);
        assert!(loc.days().is_empty());
        assert!(loc.summary.is_none());
        assert_eq!(loc.error.as_deref(), Some("HTTP 401"));
    }

    #[test]
    fn null_summary_and_metrics_are_accepted() {
        let raw = r#"{
            "beach": "Pantai Sanur", "ok": true, "summary": null,
            "days": [{"date_iso": "2026-10-17", "is_today": true, "temp_min": null,
                      "ml_predictions": [{"label": "Pantai", "pred": null, "proba_1": 0.4}]}]
        }"#;
        let loc: LocationForecast = serde_json::from_str(raw).unwrap();
        assert!(loc.summary.is_none());
        let day = &loc.days()[0];
        assert_eq!(day.temp_min, None);
        let pred = day.prediction_for("pantai").unwrap();
        assert!(!pred.qualifies());
        assert_eq!(pred.probability(), 0.4);
    }

    #[test]
    fn prediction_lookup_ignores_case() {
        let day = DayForecast {
            ml_predictions: vec![
                Prediction { label: "HIKING".into(), pred: Some(1), proba_1: Some(0.9) },
                Prediction { label: "pantai".into(), pred: Some(0), proba_1: Some(0.1) },
            ],
            ..Default::default()
        };
        assert!(day.prediction_for("hiking").unwrap().qualifies());
        assert!(day.prediction_for("rafting").is_none());
    }
}
