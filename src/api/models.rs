use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
}

/// What a request's `prompt` field amounts to.
#[derive(Debug, PartialEq, Eq)]
pub enum Prompt {
    Text(String),
    /// Absent, `null`, `false`, `0`, `""`, `[]` or `{}`.
    Missing,
    /// Present and non-empty, but not a string.
    NotText,
}

impl GenerateRequest {
    pub fn prompt(self) -> Prompt {
        match self.prompt {
            Some(Value::String(text)) if !text.is_empty() => Prompt::Text(text),
            None | Some(Value::Null) | Some(Value::String(_)) | Some(Value::Bool(false)) => {
                Prompt::Missing
            }
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Prompt::Missing,
            Some(Value::Array(items)) if items.is_empty() => Prompt::Missing,
            Some(Value::Object(fields)) if fields.is_empty() => Prompt::Missing,
            Some(_) => Prompt::NotText,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: &'static str,
    pub text: String,
}

impl GenerateResponse {
    pub fn success(text: String) -> Self {
        Self {
            status: "success",
            text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
