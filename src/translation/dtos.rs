use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_language: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

impl TranslateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() || self.target_language.trim().is_empty() {
            return Err("Text and target language are required".to_string());
        }
        Ok(())
    }
}
