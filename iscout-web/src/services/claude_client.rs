//! Anthropic Messages API client
//!
//! The discovery step is delegated entirely to the external model: the
//! client builds a deterministic natural-language instruction from the
//! search parameters and returns the raw text of the first content block.
//! Failures are surfaced to the caller as-is; there is no retry policy.

use iscout_common::db::FollowerBand;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-sonnet-4-5-20250929";
const MAX_TOKENS: u32 = 4096;

/// Claude client errors
#[derive(Debug, Error)]
pub enum ClaudeError {
    /// Network communication error (connection, timeout, malformed body)
    #[error("Network error: {0}")]
    Network(String),

    /// Anthropic API returned a non-success response
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Response contained no text content
    #[error("Empty response from model")]
    EmptyResponse,
}

impl From<ClaudeError> for iscout_common::Error {
    fn from(err: ClaudeError) -> Self {
        iscout_common::Error::Provider(err.to_string())
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Anthropic Messages API client
#[derive(Clone)]
pub struct ClaudeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ClaudeClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: ANTHROPIC_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for tests and proxies)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Request `count` influencer profiles matching the criteria and return
    /// the raw model text.
    pub async fn generate_profiles(
        &self,
        niche: &str,
        country: &str,
        band: FollowerBand,
        count: u32,
    ) -> Result<String, ClaudeError> {
        let prompt = build_prompt(niche, country, band, count);
        self.complete(&prompt, MAX_TOKENS).await
    }

    /// Minimal one-shot request used at startup to check the credential
    pub async fn probe(&self) -> Result<(), ClaudeError> {
        self.complete("Hi", 10).await.map(|_| ())
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ClaudeError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClaudeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClaudeError::Api(status.as_u16(), body));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ClaudeError::Network(e.to_string()))?;

        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text" && !block.text.is_empty())
            .map(|block| block.text)
            .ok_or(ClaudeError::EmptyResponse)
    }
}

/// Build the discovery instruction.
///
/// A pure function of the search parameters; the JSON field names here are
/// the contract the response parser extracts against.
pub fn build_prompt(niche: &str, country: &str, band: FollowerBand, count: u32) -> String {
    let (min_followers, max_followers) = band.bounds();

    format!(
        r#"You are an Instagram influencer discovery assistant specializing in finding real, active creators.

SEARCH PARAMETERS:
- Target Niche/Keyword: {niche}
- Follower Range: {min_followers} - {max_followers}
- Location/Country: {country}
- Quantity: {count} influencers

YOUR TASK:
Generate a list of {count} REALISTIC Instagram influencer profiles in the "{niche}" niche from {country}.

For each influencer, provide:
1. username (without @ - should be a realistic Instagram-style username)
2. display_name (the creator's human-readable name)
3. estimated_followers (number within the specified range, vary across the range)
4. profile_description (brief, realistic bio - 1-2 sentences)
5. content_focus (specific sub-niche or content type they focus on)
6. profile_link (format: https://instagram.com/username)
7. suggested_hashtags (array of 3-5 relevant hashtags they likely use, without #)
8. open_to_collaborations (boolean - true if they seem open to brand deals based on profile)

CRITICAL REQUIREMENTS:
- All profiles must be UNIQUE - no duplicate usernames
- Usernames should look realistic (mix of names, underscores, numbers)
- Vary follower counts across the entire specified range
- Include diverse content creators within the niche
- Profile descriptions should feel authentic

OUTPUT: Return ONLY a valid JSON array with no additional text or markdown. Example format:
[
  {{
    "username": "example_creator",
    "display_name": "Example Creator",
    "estimated_followers": 50000,
    "profile_description": "Fashion & lifestyle | NYC based",
    "content_focus": "Street style fashion",
    "profile_link": "https://instagram.com/example_creator",
    "suggested_hashtags": ["streetstyle", "nycfashion", "ootd"],
    "open_to_collaborations": true
  }}
]"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_deterministic() {
        let a = build_prompt("fitness", "USA", FollowerBand::Micro, 5);
        let b = build_prompt("fitness", "USA", FollowerBand::Micro, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn prompt_carries_all_parameters() {
        let prompt = build_prompt("vegan cooking", "Germany", FollowerBand::Macro, 7);

        assert!(prompt.contains("vegan cooking"));
        assert!(prompt.contains("Germany"));
        assert!(prompt.contains("7 influencers"));
        assert!(prompt.contains("100000 - 500000"));
    }

    #[test]
    fn prompt_names_every_contract_field() {
        let prompt = build_prompt("travel", "Japan", FollowerBand::Nano, 3);

        for field in [
            "username",
            "display_name",
            "estimated_followers",
            "profile_description",
            "content_focus",
            "profile_link",
            "suggested_hashtags",
            "open_to_collaborations",
        ] {
            assert!(prompt.contains(field), "prompt missing field {}", field);
        }
    }

    #[test]
    fn messages_response_extracts_first_text_block() {
        let json = r#"{
            "content": [
                {"type": "thinking", "text": ""},
                {"type": "text", "text": "[{\"username\": \"abc\"}]"}
            ]
        }"#;

        let parsed: MessagesResponse = serde_json::from_str(json).unwrap();
        let text = parsed
            .content
            .into_iter()
            .find(|b| b.kind == "text" && !b.text.is_empty())
            .map(|b| b.text);
        assert_eq!(text.as_deref(), Some("[{\"username\": \"abc\"}]"));
    }
}
