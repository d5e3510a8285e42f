use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("unknown industry key: {0}")]
    UnknownIndustry(String),

    #[error("industry {0} has no widgets")]
    EmptyTemplate(String),

    #[error("industry {0} is declared more than once")]
    DuplicateIndustry(String),

    #[error("default industry {0} is not in the registry")]
    MissingDefault(String),

    #[error("invalid embedded configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("dom call failed: {0}")]
    Dom(String),

    #[error("no browser window available")]
    NoWindow,
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
