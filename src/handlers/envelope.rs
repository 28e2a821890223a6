use serde::Serialize;

pub const HTTP_OK: u16 = 200;

/// Body plus the status it is sent with. Failures travel inside the body,
/// the status is always `200`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub body: T,
    pub status: u16,
}

impl<T> Reply<T> {
    pub fn ok(body: T) -> Self {
        Self { body, status: HTTP_OK }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Envelope<T> {
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<T>,
    },
    Error {
        error_code: i64,
        error_message: String,
    },
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Envelope::Ok { data: Some(data) }
    }

    pub fn empty() -> Self {
        Envelope::Ok { data: None }
    }

    pub fn error(error_code: i64, error_message: impl Into<String>) -> Self {
        Envelope::Error { error_code, error_message: error_message.into() }
    }
}
