use serde_json::Value;

/// What the generation backend answered with
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// A text field could be extracted from the body
    Text(String),
    /// Any other JSON body, rendered verbatim
    Raw(Value),
}

impl GenerationResult {
    /// Extract the reply from a response body.
    ///
    /// Lookup order is `text`, then `result`, then the whole value. Only
    /// non-empty strings count as a hit for the keyed lookups.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(ref map) => {
                let keyed = ["text", "result"].iter().find_map(|key| {
                    map.get(*key)
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                });
                match keyed {
                    Some(text) => GenerationResult::Text(text),
                    None => GenerationResult::Raw(value),
                }
            }
            Value::String(text) => GenerationResult::Text(text),
            other => GenerationResult::Raw(other),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            GenerationResult::Text(text) => text,
            GenerationResult::Raw(value) => value.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation service timed out")]
    Timeout,
    #[error("generation service returned status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("malformed generation response: {0}")]
    Malformed(String),
    #[error("generation request failed: {0}")]
    Request(String),
}
