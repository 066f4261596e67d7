//! Status texts shown under the form. The page is German.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use super::types::SubmissionResult;

pub const WORKING_MESSAGE: &str = "Arbeite ...";
pub const ERROR_PREFIX: &str = "Fehler:\n";

pub fn success_message(result: &SubmissionResult) -> String {
    let mut msg = format!(
        "OK\nTracks hinzugefügt: {}\nPlaylist ID: {}",
        result.tracks_added, result.playlist_id
    );
    if let Some(url) = result.playlist_url.as_deref().filter(|url| !url.is_empty()) {
        msg.push_str(&format!("\nLink: {url}"));
    }
    msg
}

/// Error prefix followed by the payload as 2-space indented JSON.
pub fn failure_message(payload: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    format!("{ERROR_PREFIX}{pretty}")
}
