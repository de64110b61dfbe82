use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;

/// Prompt for a short plain-text job description.
pub fn description_prompt(title: &str) -> String {
    format!(
        "Write a professional job description for a \"{title}\" position. \
         Include responsibilities, qualifications, and required skills. \
         Keep it concise and professional. \
         It should be in the format of a job description. \
         {PLAIN_TEXT_INSTRUCTION} \
         Make sure it's only 200 characters."
    )
}
