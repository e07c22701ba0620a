use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};

use summit::data::{ConnectionStatus, StatusSnapshot, UptimeInfo};
use summit::log;

use crate::config::Settings;
use crate::services::StoreStatus;

/// Longest store error kept in the snapshot text.
const MAX_ERROR_CHARS: usize = 50;

fn uptime_seconds(started_at: DateTime<Utc>) -> i64 {
    (Utc::now() - started_at).num_seconds()
}

fn human_readable_uptime(started_at: DateTime<Utc>) -> String {
    let uptime_duration: chrono::TimeDelta = Utc::now().signed_duration_since(started_at);

    let uptime_seconds = uptime_duration.num_seconds();
    let days = uptime_duration.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_CHARS).collect()
}

fn presence(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn database_text(status: &StoreStatus) -> String {
    match (&status.error, status.connected) {
        (_, false) => "⚠️  Available but not initialized".to_string(),
        (Some(error), true) => format!("⚠️  Connected but Error: {}", truncate(error)),
        (None, true) => "✅ Connected & Working".to_string(),
    }
}

/// Builds the diagnostics snapshot from a store status and the process settings.
pub fn snapshot(
    status: StoreStatus,
    settings: &Settings,
    started_at: DateTime<Utc>,
) -> StatusSnapshot {
    StatusSnapshot {
        backend: "✅ Running".to_string(),
        database: database_text(&status),
        database_url: presence(settings.database_url_set()),
        database_name: presence(settings.database_name_set()),
        connection_status: if status.connected {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::NotConnected
        },
        collections: status.collections,
        started_at: started_at.to_rfc3339(),
        uptime: UptimeInfo {
            seconds: uptime_seconds(started_at),
            human: human_readable_uptime(started_at),
        },
    }
}

/// Handler for the `/test` diagnostics route. Always answers 200.
pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<StatusSnapshot> {
    let status = state.store.describe().await;
    let snapshot = snapshot(status, &state.settings, state.started_at);

    log::info!("Health check: {:?}", snapshot);

    Json(snapshot)
}
