use crate::error::Result;
use crate::llm::{prompts, LlmProvider};
use crate::models::Emotion;

/// LLM-backed story writer. The completion is returned exactly as
/// generated: no parsing, no truncation, no length cap.
#[derive(Clone)]
pub struct Narrator {
    llm: LlmProvider,
}

impl Narrator {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    pub async fn narrate(&self, labels: &[String], emotion: Emotion) -> Result<String> {
        let prompt = prompts::short_story_prompt(emotion, labels);
        let story = self.llm.complete(&prompt).await?;
        tracing::info!(story_len = story.len(), "Story generated");
        Ok(story)
    }
}
