use serde::{Deserialize, Serialize};

/// Structured error body returned by the backend.
///
/// The backend is not consistent about the field name, so both `message` and `error`
/// are accepted, in that order of preference.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorDto {
    pub fn into_message(self) -> Option<String> {
        let non_empty = |value: &String| !value.trim().is_empty();

        self.message
            .filter(non_empty)
            .or_else(|| self.error.filter(non_empty))
    }
}
