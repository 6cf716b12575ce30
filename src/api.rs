use crate::widget::PlaylistItem;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Appended to the configured base URL.
pub const ENDPOINT_PATH: &str = "generate_song_list/";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {status}")]
    Status { status: u16 },

    #[error("unexpected response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Remote playlist generation.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    async fn generate_song_list(&self, genre: &str) -> Result<Vec<PlaylistItem>, ApiError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    genre: &'a str,
}

// Unknown fields are ignored; a missing or null `playlist` is not.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    playlist: Vec<PlaylistItem>,
}

/// JSON-over-HTTP client for `POST {base}/generate_song_list/`.
pub struct HttpPlaylistClient {
    client: Client,
    endpoint: String,
}

impl HttpPlaylistClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // No request timeout is set.
        let client = Client::builder()
            .user_agent(concat!("vibelist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint_for(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Builds the generation endpoint from a base URL, tolerating a trailing `/`.
pub fn endpoint_for(base_url: &str) -> Result<String, ApiError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed =
        Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(format!("{trimmed}/{ENDPOINT_PATH}"))
}

#[async_trait]
impl PlaylistApi for HttpPlaylistClient {
    async fn generate_song_list(&self, genre: &str) -> Result<Vec<PlaylistItem>, ApiError> {
        info!(genre, endpoint = %self.endpoint, "requesting playlist");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest { genre })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, genre, "playlist request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&body).inspect_err(|e| {
            warn!(error = %e, "playlist response did not parse");
        })?;

        info!(genre, items = parsed.playlist.len(), "playlist received");
        Ok(parsed.playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            endpoint_for("https://api.example.com").unwrap(),
            "https://api.example.com/generate_song_list/"
        );
        assert_eq!(
            endpoint_for("http://localhost:8000/").unwrap(),
            "http://localhost:8000/generate_song_list/"
        );
        assert_eq!(
            endpoint_for("https://example.com/v1//").unwrap(),
            "https://example.com/v1/generate_song_list/"
        );
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        assert!(matches!(
            endpoint_for("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            endpoint_for("ftp://example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(endpoint_for(""), Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&GenerateRequest { genre: "R&B" }).unwrap();
        assert_eq!(body, r#"{"genre":"R&B"}"#);
    }

    #[test]
    fn test_response_parsing() {
        let ok: GenerateResponse = serde_json::from_str(
            r#"{"playlist":[{"title":"A","artist":"X","year":1999},{"title":"B","artist":"Y"}],"extra":true}"#,
        )
        .unwrap();
        assert_eq!(ok.playlist.len(), 2);
        assert_eq!(ok.playlist[1].title, "B");

        for bad in [
            r#"{}"#,
            r#"{"playlist":null}"#,
            r#"{"playlist":[{"title":"A"}]}"#,
            r#"{"playlist":[{"title":1,"artist":"X"}]}"#,
            r#"[]"#,
        ] {
            assert!(serde_json::from_str::<GenerateResponse>(bad).is_err(), "{bad}");
        }
    }
}
