use crate::cache::{CachedForecast, ForecastCache};
use crate::activity::Activity;
use crate::config::RenderOptions;
use crate::errors::LoadError;
use crate::loader::ForecastSource;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ForecastSource>,
    pub cache: Arc<Mutex<ForecastCache>>,
    pub render: RenderOptions,
}

impl AppState {
    pub fn new(source: Arc<dyn ForecastSource>, render: RenderOptions) -> Self {
        Self {
            source,
            cache: Arc::new(Mutex::new(ForecastCache::default())),
            render,
        }
    }

    /// Cached forecast for `activity`, loading it on a miss. The cache lock
    /// is not held while the backend is queried.
    pub async fn forecast(&self, activity: Activity) -> Result<Arc<CachedForecast>, LoadError> {
        if let Some(hit) = self.cache.lock().await.get(activity) {
            return Ok(hit);
        }

        match self.source.load(activity).await {
            Ok(response) => {
                info!(%activity, locations = response.locations.len(), "forecast cached");
                Ok(self.cache.lock().await.store(activity, response))
            }
            Err(err) => {
                error!(%activity, "forecast load failed: {err}");
                Err(err)
            }
        }
    }

    pub async fn cached(&self, activity: Activity) -> Option<Arc<CachedForecast>> {
        self.cache.lock().await.get(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ForecastSource for CountingSource {
        async fn load(&self, activity: Activity) -> Result<ForecastResponse, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LoadError::Backend(Some("timeout".into())));
            }
            Ok(ForecastResponse {
                ok: true,
                activity: Some(activity.to_string()),
                ..Default::default()
            })
        }
    }

    fn state(fail: bool) -> (AppState, Arc<CountingSource>) {
        let source = Arc::new(CountingSource { calls: AtomicUsize::new(0), fail });
        (AppState::new(source.clone(), RenderOptions::default()), source)
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let (state, source) = state(false);
        state.forecast(Activity::Hiking).await.unwrap();
        let again = state.forecast(Activity::Hiking).await.unwrap();
        assert_eq!(again.response.activity.as_deref(), Some("hiking"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        state.forecast(Activity::Pantai).await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let (state, source) = state(true);
        assert!(state.forecast(Activity::Pantai).await.is_err());
        assert!(state.forecast(Activity::Pantai).await.is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert!(state.cached(Activity::Pantai).await.is_none());
    }
}
