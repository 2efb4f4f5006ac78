//! Prompt templates for the two mood-conditioned generation calls.
//!
//! Both prompts embed the same (emotion, labels) pair; only the ask
//! differs. The recommendation prompt pins the `**Song - Artist**` shape
//! the candidate miner scans for.

use crate::models::Emotion;

/// Prompt asking for song recommendations in the minable
/// `**Song - Artist**` form.
///
/// # Example
/// ```
/// use aura::llm::prompts::music_recommendation_prompt;
/// use aura::models::Emotion;
///
/// let prompt = music_recommendation_prompt(Emotion::Neutral, &["beach".into(), "sunset".into()]);
/// assert!(prompt.contains("beach, sunset"));
/// assert!(prompt.contains("**Song - Artist**"));
/// ```
pub fn music_recommendation_prompt(emotion: Emotion, labels: &[String]) -> String {
    format!(
        "Detected emotion: {emotion}. Context labels: {labels}. \
         Recommend songs matching this mood as **Song - Artist**.",
        labels = labels.join(", ")
    )
}

/// Prompt asking for a short story reflecting the detected mood.
pub fn short_story_prompt(emotion: Emotion, labels: &[String]) -> String {
    format!(
        "Detected emotion: {emotion}. Context labels: {labels}. \
         Write a short story that reflects this mood and setting.",
        labels = labels.join(", ")
    )
}
