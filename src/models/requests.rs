use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the two search forms (`/search?q=` and
/// `/ingredient?q=`). A missing or blank term fails validation and the
/// handler redirects back to the home page instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    /// Trimmed search term.
    pub fn term(&self) -> &str {
        self.q.trim()
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
