use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

/// Case-insensitive exact match of `wanted` against any of `tags`.
pub fn matches_tag<'a, I>(tags: I, wanted: &str) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let wanted = wanted.trim().to_lowercase();
    tags.into_iter().any(|t| t.to_lowercase() == wanted)
}

pub fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: u64 = values.iter().map(|v| *v as u64).sum();
    Some(total as f64 / values.len() as f64)
}

pub fn parse_view_count(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// Joins the first `limit` tags for table output.
pub fn format_tags<'a, I>(tags: I, limit: usize) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .take(limit)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pulls a readable message out of an API error body.
///
/// Handles the `{"error": {"message": ..}}` shape of the data APIs and the
/// `{"error": .., "error_description": ..}` shape of the token endpoint.
/// Anything else is returned as-is, trimmed.
pub fn error_message_from_body(body: &str) -> String {
    let fallback = || body.trim().chars().take(200).collect::<String>();
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    if let Some(msg) = json["error"]["message"].as_str() {
        return msg.to_string();
    }
    if let Some(desc) = json["error_description"].as_str() {
        return desc.to_string();
    }
    if let Some(err) = json["error"].as_str() {
        return err.to_string();
    }
    fallback()
}

pub fn now_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
