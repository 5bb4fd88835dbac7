//! The story request record flowing through the pipeline.

use serde::{Deserialize, Serialize};

/// A validated story generation request.
///
/// Constructed from [`RawStoryInput`](crate::RawStoryInput) once validation
/// passes. Immutable afterwards except for attaching the generated text via
/// [`with_story`](StoryRequest::with_story).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    /// Target academic grade, e.g. "5th grade"
    pub academic_grade: String,
    /// Subject matter of the story
    pub subject: String,
    /// Optional narrower focus within the subject
    pub subject_specification: Option<String>,
    /// Optional story setting
    pub setting: Option<String>,
    /// Optional main character
    pub main_character: Option<String>,
    /// Requested approximate word count
    pub word_count: i64,
    /// Language the story should be written in
    pub language: String,
}

impl StoryRequest {
    /// Token budget for the upstream call: twice the requested word count.
    ///
    /// Returns `None` when the word count does not fit a token budget (a
    /// negative count survives validation, matching the lack of range
    /// checks on input).
    pub fn max_tokens(&self) -> Option<u32> {
        u32::try_from(self.word_count.saturating_mul(2)).ok()
    }

    /// Attach generated text, producing the record shape that gets persisted.
    pub fn with_story(self, story_text: impl Into<String>) -> StoryRecord {
        StoryRecord {
            academic_grade: self.academic_grade,
            subject: self.subject,
            subject_specification: self.subject_specification,
            setting: self.setting,
            main_character: self.main_character,
            word_count: self.word_count,
            language: self.language,
            story_text: story_text.into(),
        }
    }
}

/// A story request together with its generated text.
///
/// This is the flat record persisted to the `stories` table, fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    /// Target academic grade
    pub academic_grade: String,
    /// Subject matter of the story
    pub subject: String,
    /// Optional narrower focus within the subject
    pub subject_specification: Option<String>,
    /// Optional story setting
    pub setting: Option<String>,
    /// Optional main character
    pub main_character: Option<String>,
    /// Requested approximate word count
    pub word_count: i64,
    /// Language the story is written in
    pub language: String,
    /// The generated story
    pub story_text: String,
}
