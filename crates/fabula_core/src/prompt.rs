//! Deterministic prompt construction for story generation.

use crate::StoryRequest;

/// Render the upstream instruction string for a story request.
///
/// Pure string concatenation with no hidden state: identical input yields a
/// byte-identical prompt. Absent optional fields fall back to generic
/// phrasing rather than being dropped. Values are interpolated verbatim.
///
/// # Examples
///
/// ```
/// use fabula_core::{build_prompt, StoryRequest};
///
/// let request = StoryRequest {
///     academic_grade: "5th grade".to_string(),
///     subject: "photosynthesis".to_string(),
///     subject_specification: None,
///     setting: None,
///     main_character: None,
///     word_count: 300,
///     language: "English".to_string(),
/// };
///
/// let prompt = build_prompt(&request);
/// assert!(prompt.starts_with(
///     "Create a didactic story for 5th grade students about photosynthesis"
/// ));
/// ```
pub fn build_prompt(request: &StoryRequest) -> String {
    let mut prompt = format!(
        "Create a didactic story for {} students about {}",
        request.academic_grade, request.subject
    );

    if let Some(specification) = &request.subject_specification {
        prompt.push_str(&format!(", specifically focusing on {}", specification));
    }

    match &request.setting {
        Some(setting) => prompt.push_str(&format!(", set in {}", setting)),
        None => prompt.push_str(", set in an appropriate environment"),
    }

    match &request.main_character {
        Some(character) => prompt.push_str(&format!(", featuring {}", character)),
        None => prompt.push_str(", featuring a relatable protagonist"),
    }

    prompt.push_str(&format!(
        ", approximately {} words, in {}. The story should be educational and engaging, \
         with clear learning objectives appropriate for {} level.",
        request.word_count, request.language, request.academic_grade
    ));

    prompt
}
