use crate::activity::Activity;
use crate::models::ForecastResponse;
use crate::table::DayIndex;
use std::collections::HashMap;
use std::sync::Arc;

/// A successful response together with the day index built from it.
#[derive(Debug)]
pub struct CachedForecast {
    pub response: ForecastResponse,
    pub days: DayIndex,
}

impl CachedForecast {
    pub fn new(response: ForecastResponse) -> Self {
        let days = DayIndex::build(&response.locations);
        Self { response, days }
    }
}

/// Last successful response per activity. Entries are only ever added or
/// replaced, never removed.
#[derive(Debug, Default)]
pub struct ForecastCache {
    entries: HashMap<Activity, Arc<CachedForecast>>,
}

impl ForecastCache {
    pub fn get(&self, activity: Activity) -> Option<Arc<CachedForecast>> {
        self.entries.get(&activity).cloned()
    }

    pub fn store(&mut self, activity: Activity, response: ForecastResponse) -> Arc<CachedForecast> {
        let entry = Arc::new(CachedForecast::new(response));
        self.entries.insert(activity, Arc::clone(&entry));
        entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayForecast, LocationForecast};
    use crate::table::DayId;

    fn response(name: &str) -> ForecastResponse {
        ForecastResponse {
            ok: true,
            locations: vec![LocationForecast {
                beach: name.into(),
                ok: true,
                days: Some(vec![DayForecast {
                    date_iso: "2026-10-17".into(),
                    ..Default::default()
                }]),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn entries_are_kept_per_activity() {
        let mut cache = ForecastCache::default();
        assert!(cache.get(Activity::Pantai).is_none());

        cache.store(Activity::Pantai, response("Pantai Kuta"));
        cache.store(Activity::Hiking, response("Gunung Batur"));

        assert_eq!(cache.len(), 2);
        let pantai = cache.get(Activity::Pantai).unwrap();
        assert_eq!(pantai.response.locations[0].beach, "Pantai Kuta");
        assert!(pantai.days.get(DayId { location: 0, day: 0 }).is_some());
    }

    #[test]
    fn later_store_replaces_entry() {
        let mut cache = ForecastCache::default();
        cache.store(Activity::Rafting, response("Sungai Ayung"));
        cache.store(Activity::Rafting, response("Sungai Unda"));
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get(Activity::Rafting).unwrap().response.locations[0].beach,
            "Sungai Unda"
        );
    }
}
