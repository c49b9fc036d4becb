//! Prompt text sent to the generator and the canned replies used without a key.

use crate::workflows::prospecting::domain::Lead;

use super::domain::EmailBrief;

pub const ICEBREAKER_LIMIT: usize = 300;

pub fn sales_email(brief: &EmailBrief) -> String {
    format!(
        "Write a short, engaging sales email about \"{topic}\".\n\
         The tone should be {tone}.\n\
         The recipient's name is {recipient}.\n\
         Include a subject line.\n\
         Format the output as plain text with clearly separated Subject and Body.",
        topic = brief.topic.trim(),
        tone = brief.tone.trim(),
        recipient = brief.recipient.trim(),
    )
}

pub fn icebreaker(lead: &Lead) -> String {
    format!(
        "Write a short, personalized LinkedIn connection message (max {ICEBREAKER_LIMIT} characters) \
         for a prospect named {name}.\n\n\
         Context:\n\
         - Role: {title}\n\
         - Company: {company}\n\
         - Location: {location}\n\n\
         Make it friendly, professional, and not salesy.",
        name = lead.name,
        title = lead.title,
        company = lead.company,
        location = lead.location,
    )
}

pub fn refinement(original: &str, instruction: &str) -> String {
    format!(
        "Original Email:\n\"{original}\"\n\n\
         Instruction: Rewrite the above email to be {instruction}. Keep the same context/recipient."
    )
}

pub fn mock_email(brief: &EmailBrief) -> String {
    format!(
        "[MOCK GENERATION - No API Key]\n\nSubject: Regarding {topic}\n\nHi {recipient},\n\n\
         To use real AI generation, please go to Settings and enter your Gemini API Key.\n\n\
         Best,\nNexus Team",
        topic = brief.topic.trim(),
        recipient = brief.recipient.trim(),
    )
}

pub fn mock_icebreaker(lead: &Lead) -> String {
    format!(
        "[MOCK ICEBREAKER]\nHi {}, I see you're doing great work at {} in {}!",
        lead.name, lead.company, lead.location
    )
}

pub fn mock_refinement(original: &str, instruction: &str) -> String {
    format!("[MOCK REFINEMENT - {instruction}]\n\n{original}")
}
