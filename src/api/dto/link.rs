//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// Both fields are optional at the wire level so that a missing `url` is
/// reported as an invalid URL rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    /// The target URL (must be an absolute http(s) URL).
    #[serde(default)]
    pub url: Option<String>,

    /// Optional custom short code, 6-8 alphanumeric characters.
    #[serde(default)]
    pub code: Option<String>,
}

/// Response returned after creating a link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub code: String,
    pub url: String,
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Acknowledgement body for deletions.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
