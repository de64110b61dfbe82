use tracing::{error, info};

use crate::errors::AppError;
use crate::jobs::prompts::description_prompt;
use crate::llm_client::LlmClient;

/// Validates the title, then makes a single completion call.
/// Every provider failure becomes `AppError::Llm` with the cause kept.
pub async fn generate_description(llm: &LlmClient, title: Option<&str>) -> Result<String, AppError> {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Job title is required".to_string()))?;

    info!("Generating description for \"{title}\" with {}", llm.model());

    llm.complete(&description_prompt(title)).await.map_err(|e| {
        error!("Error generating job description: {e}");
        AppError::Llm(format!("Failed to generate job description: {e}"))
    })
}
