use crate::activity::Activity;
use crate::errors::AppError;
use crate::models::{ActivityQuery, ForecastResponse, SummaryResponse};
use crate::state::AppState;
use crate::summary::summarize;
use crate::table::{long_date_label, DayId};
use crate::ui::{render_day_detail, render_index, DashboardPage, PageContent};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::debug;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Response, AppError> {
    let activity = parse_activity(query.activity.as_deref())?;
    let now = Local::now();
    let today = long_date_label(now.date_naive());
    let time = now.format("%H.%M.%S").to_string();

    let response = match state.forecast(activity).await {
        Ok(cached) => {
            let page = DashboardPage {
                activity,
                today: &today,
                now: &time,
                options: state.render,
                content: PageContent::Loaded(&cached.response.locations),
            };
            Html(render_index(&page)).into_response()
        }
        Err(err) => {
            let message = err.user_message();
            let page = DashboardPage {
                activity,
                today: &today,
                now: &time,
                options: state.render,
                content: PageContent::Failed(&message),
            };
            (StatusCode::BAD_GATEWAY, Html(render_index(&page))).into_response()
        }
    };
    Ok(response)
}

pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ForecastResponse>, AppError> {
    let activity = parse_activity(query.activity.as_deref())?;
    let cached = state.forecast(activity).await?;
    Ok(Json(cached.response.clone()))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let activity = parse_activity(query.activity.as_deref())?;
    let cached = state.forecast(activity).await?;
    Ok(Json(SummaryResponse {
        activity: activity.to_string(),
        locations: summarize(
            &cached.response.locations,
            activity.label(),
            state.render.summary_mode,
        ),
    }))
}

/// Modal body for a day of a cached response. Ids only resolve against
/// responses already in the cache.
pub async fn day_detail(
    State(state): State<AppState>,
    Path((activity, day_id)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let activity: Activity = activity.parse()?;
    let id: DayId = day_id.parse().map_err(AppError::bad_request)?;

    let cached = state
        .cached(activity)
        .await
        .ok_or_else(|| AppError::not_found(format!("no forecast loaded for {activity}")))?;
    let entry = cached
        .days
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("unknown day {id}")))?;

    debug!(%activity, %id, "rendering day detail");
    Ok(Html(render_day_detail(entry, activity)))
}

fn parse_activity(raw: Option<&str>) -> Result<Activity, AppError> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(value.parse()?),
        _ => Ok(Activity::default()),
    }
}
