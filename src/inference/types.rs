use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    pub wait_for_model: bool,
}

#[derive(Debug, Serialize)]
pub struct SummarizationParameters {
    pub max_length: u32,
    pub min_length: u32,
}

#[derive(Debug, Serialize)]
pub struct SummarizationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: SummarizationParameters,
    pub options: InferenceOptions,
}

#[derive(Debug, Deserialize)]
pub struct SummarizationOutput {
    pub summary_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslationRequest<'a> {
    pub inputs: &'a str,
    pub options: InferenceOptions,
}

#[derive(Debug, Deserialize)]
pub struct TranslationOutput {
    pub translation_text: Option<String>,
}
