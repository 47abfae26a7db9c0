//! Response parser: model free-text to candidate influencer profiles
//!
//! Parsing contract: the model is asked for a JSON array of profile
//! objects, but responses arrive wrapped in markdown fences or prose often
//! enough that the parser has to dig the array out itself. Individual
//! entries that are not objects or lack a usable username are skipped;
//! the batch only fails when nothing at all can be extracted.

use iscout_common::{Error, Result};
use serde_json::Value;
use tracing::warn;

/// One influencer candidate extracted from the model response.
///
/// Field defaults mirror the store's column defaults so a sparse entry
/// still produces a complete record.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProfile {
    pub username: String,
    pub display_name: String,
    pub followers: i64,
    pub summary: String,
    pub content_focus: String,
    pub profile_link: String,
    /// Comma-joined, without '#'
    pub hashtags: String,
    pub open_to_collab: bool,
}

/// Parse raw model text into candidate profiles.
///
/// Returns `Error::Parse` only when zero valid entries can be extracted
/// from the response.
pub fn parse_profiles(text: &str) -> Result<Vec<CandidateProfile>> {
    if text.trim().is_empty() {
        return Err(Error::Parse("model returned an empty response".to_string()));
    }

    let items = extract_array(text).ok_or_else(|| {
        Error::Parse("model response does not contain a JSON array".to_string())
    })?;

    let mut profiles = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match extract_candidate(item) {
            Some(profile) => profiles.push(profile),
            None => warn!("Skipping malformed profile entry at index {}", index),
        }
    }

    if profiles.is_empty() {
        return Err(Error::Parse(
            "no usable influencer entries in model response".to_string(),
        ));
    }

    Ok(profiles)
}

/// Locate and parse the JSON array in the response text.
///
/// Markdown code fences are stripped first; if the remainder still is not
/// valid JSON, the substring from the first '[' to the last ']' is tried.
fn extract_array(text: &str) -> Option<Vec<Value>> {
    let stripped = strip_fences(text);

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(stripped.trim()) {
        return Some(items);
    }

    let start = stripped.find('[')?;
    let end = stripped.rfind(']')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str::<Value>(&stripped[start..=end]) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Drop markdown code-fence lines (``` and ```json markers)
fn strip_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract one candidate from a JSON value, or None if unusable.
///
/// Only the username is required; everything else falls back to defaults.
fn extract_candidate(value: &Value) -> Option<CandidateProfile> {
    let obj = value.as_object()?;

    let username = obj
        .get("username")
        .and_then(Value::as_str)
        .map(|s| s.trim().trim_start_matches('@').to_string())
        .filter(|s| !s.is_empty())?;

    Some(CandidateProfile {
        username,
        display_name: string_field(obj, "display_name"),
        followers: follower_count(obj.get("estimated_followers")),
        summary: string_field(obj, "profile_description"),
        content_focus: string_field(obj, "content_focus"),
        profile_link: string_field(obj, "profile_link"),
        hashtags: hashtag_list(obj.get("suggested_hashtags")),
        open_to_collab: collab_flag(obj.get("open_to_collaborations")),
    })
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Follower estimates arrive as JSON numbers or digit strings ("12,500")
fn follower_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Some(Value::String(s)) => s.replace(',', "").trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Hashtags arrive as an array of strings or a pre-joined string
fn hashtag_list(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim_start_matches('#'))
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// Collaboration flag arrives as a bool or "Yes"/"No"
fn collab_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true")
        }
        _ => false,
    }
}
