use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A validated page of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
}

/// Why a decoded body was rejected.
#[derive(Debug, Error)]
pub enum MalformedResponse {
    #[error("Server flagged the response as an error: {message}")]
    ErrorFlagged { message: String },

    #[error("Unexpected response shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("Invalid pagination: current_page {current_page}, last_page {last_page}")]
    Pagination { current_page: u32, last_page: u32 },
}

#[derive(Deserialize)]
struct Envelope {
    error: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Deserialize)]
struct PageBody<T> {
    data: Vec<T>,
    current_page: u32,
    last_page: u32,
}

/// Validate a response body of the form
/// `{"error": false, "data": {"data": [...], "current_page": N, "last_page": M}}`.
pub fn parse_page<T: DeserializeOwned>(body: Value) -> Result<Page<T>, MalformedResponse> {
    let envelope: Envelope = serde_json::from_value(body).map_err(MalformedResponse::Shape)?;

    if envelope.error {
        return Err(MalformedResponse::ErrorFlagged {
            message: envelope.message.unwrap_or_else(|| "no message".to_string()),
        });
    }

    let data = envelope.data.unwrap_or(Value::Null);
    let page: PageBody<T> = serde_json::from_value(data).map_err(MalformedResponse::Shape)?;

    if page.current_page == 0 || page.last_page == 0 || page.current_page > page.last_page {
        return Err(MalformedResponse::Pagination {
            current_page: page.current_page,
            last_page: page.last_page,
        });
    }

    Ok(Page {
        items: page.data,
        current_page: page.current_page,
        last_page: page.last_page,
    })
}
