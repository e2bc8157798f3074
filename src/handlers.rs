use crate::chart::build_chart;
use crate::errors::AppError;
use crate::export::export_document;
use crate::models::{ChartResponse, LogEntry, LogsResponse, NewLogEntry, ReminderResponse};
use crate::reminder;
use crate::repo;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = Local::now().date_naive().to_string();
    let data = state.data.lock().await;
    Html(render_index(&date, data.logs.len()))
}

/// List view order: newest entry first.
pub async fn list_logs(State(state): State<AppState>) -> Result<Json<LogsResponse>, AppError> {
    let data = state.data.lock().await;
    let mut entries = data.logs.clone();
    repo::sort_newest_first(&mut entries);
    Ok(Json(LogsResponse { entries }))
}

pub async fn create_log(
    State(state): State<AppState>,
    Json(payload): Json<NewLogEntry>,
) -> Result<(StatusCode, Json<LogEntry>), AppError> {
    let mut data = state.data.lock().await;
    let entry = repo::create(&mut data, payload)?;
    persist_data(&state.data_path, &data).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(entry): Json<LogEntry>,
) -> Result<Json<LogEntry>, AppError> {
    if entry.id() != id {
        return Err(AppError::bad_request("entry id does not match the path"));
    }

    let mut data = state.data.lock().await;
    repo::update(&mut data, entry.clone())?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(entry))
}

pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    repo::delete(&mut data, &id);
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Chart order: oldest day first. The UI treats fewer than two distinct
/// days as not enough data to draw a line.
pub async fn get_chart(State(state): State<AppState>) -> Result<Json<ChartResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ChartResponse {
        points: build_chart(&data.logs),
    }))
}

pub async fn export_logs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let doc = export_document(&data.logs)?
        .ok_or_else(|| AppError::bad_request("nothing to export yet"))?;

    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", doc.filename),
        ),
    ];
    Ok((headers, doc.json))
}

/// Polled by the UI every five minutes. Marks today as reminded the
/// moment it answers `remind: true`, so the reminder fires once per day.
pub async fn get_reminder(
    State(state): State<AppState>,
) -> Result<Json<ReminderResponse>, AppError> {
    let now = Local::now();
    let mut data = state.data.lock().await;
    let check = reminder::evaluate(&data, now);
    if check.remind {
        reminder::mark_sent(&mut data, now);
        persist_data(&state.data_path, &data).await?;
        tracing::info!("daily stress reminder issued");
    }

    Ok(Json(ReminderResponse {
        remind: check.remind,
        stress_logged_today: check.stress_logged_today,
    }))
}
