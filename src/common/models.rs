use serde::{Deserialize, Serialize};

/// Wire shape shared by every backend endpoint: `GET /city/{name}`,
/// `GET /city/gemini/{name}` and the `POST /city` body all carry it.
///
/// A lookup miss is not an error on the wire: the backend answers `200`
/// with an empty `facts` string, so `facts` defaults to empty when the
/// field is missing entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityFacts {
    pub name: String,
    #[serde(default)]
    pub facts: String,
}

impl CityFacts {
    /// Whether the backend actually knows anything about this city.
    pub fn has_facts(&self) -> bool {
        !self.facts.trim().is_empty()
    }
}

/// FastAPI error convention: non-2xx responses carry `{"detail": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}
