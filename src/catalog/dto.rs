use serde::Deserialize;

/// List endpoints wrap their items: `{ "payload": [...] }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub payload: Vec<T>,
}

/// Error body some backends send alongside a 4xx.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    pub message: String,
}
