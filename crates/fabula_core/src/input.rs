//! Untrusted request input and its validation.

use crate::StoryRequest;
use serde::Deserialize;

/// The raw request body for story generation, before validation.
///
/// Every field is optional at this layer so that presence checks stay in
/// [`validate`](RawStoryInput::validate) rather than in serde rejections.
/// The one exception is the numeric-type rule: `word_count` deserializes as
/// [`serde_json::Number`], so a numeric-looking string fails to deserialize
/// at all and the caller maps that to the same invalid-input response.
///
/// # Examples
///
/// ```
/// use fabula_core::RawStoryInput;
///
/// let input: RawStoryInput = serde_json::from_str(
///     r#"{"academic_grade":"5th grade","subject":"photosynthesis",
///         "word_count":300,"language":"English"}"#,
/// )
/// .unwrap();
/// assert!(input.validate());
///
/// let missing: RawStoryInput = serde_json::from_str(r#"{"subject":"rocks"}"#).unwrap();
/// assert!(!missing.validate());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStoryInput {
    /// Target academic grade
    pub academic_grade: Option<String>,
    /// Subject matter of the story
    pub subject: Option<String>,
    /// Optional narrower focus within the subject
    pub subject_specification: Option<String>,
    /// Optional story setting
    pub setting: Option<String>,
    /// Optional main character
    pub main_character: Option<String>,
    /// Requested word count, restricted to JSON numbers
    pub word_count: Option<serde_json::Number>,
    /// Language the story should be written in
    pub language: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

impl RawStoryInput {
    /// Check presence of all required fields.
    ///
    /// Required: `academic_grade`, `subject`, `word_count`, `language`.
    /// Missing or empty values are invalid, as is a word count of zero.
    /// Pure predicate, no side effects.
    pub fn validate(&self) -> bool {
        present(&self.academic_grade)
            && present(&self.subject)
            && present(&self.language)
            && self.word_count_value().is_some_and(|count| count != 0)
    }

    /// Promote validated input into a [`StoryRequest`].
    ///
    /// Returns `None` when [`validate`](RawStoryInput::validate) fails.
    /// Empty optional fields are normalized to absent so the prompt builder
    /// falls back to its generic phrasing.
    pub fn into_request(self) -> Option<StoryRequest> {
        if !self.validate() {
            return None;
        }
        let word_count = self.word_count_value()?;
        Some(StoryRequest {
            academic_grade: self.academic_grade?,
            subject: self.subject?,
            subject_specification: self.subject_specification.filter(|s| !s.is_empty()),
            setting: self.setting.filter(|s| !s.is_empty()),
            main_character: self.main_character.filter(|s| !s.is_empty()),
            word_count,
            language: self.language?,
        })
    }

    fn word_count_value(&self) -> Option<i64> {
        let number = self.word_count.as_ref()?;
        if let Some(value) = number.as_i64() {
            return Some(value);
        }
        // Fractional counts are accepted; they truncate toward zero.
        number.as_f64().map(|value| value as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RawStoryInput {
        RawStoryInput {
            academic_grade: Some("5th grade".to_string()),
            subject: Some("photosynthesis".to_string()),
            word_count: Some(serde_json::Number::from(300)),
            language: Some("English".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_required_fields() {
        assert!(valid_input().validate());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let strips: [fn(&mut RawStoryInput); 4] = [
            |i| i.academic_grade = None,
            |i| i.subject = None,
            |i| i.word_count = None,
            |i| i.language = None,
        ];
        for strip in strips {
            let mut input = valid_input();
            strip(&mut input);
            assert!(!input.validate());
        }
    }

    #[test]
    fn rejects_empty_strings() {
        let mut input = valid_input();
        input.subject = Some(String::new());
        assert!(!input.validate());
    }

    #[test]
    fn rejects_zero_word_count() {
        let mut input = valid_input();
        input.word_count = Some(serde_json::Number::from(0));
        assert!(!input.validate());
    }

    #[test]
    fn string_word_count_fails_deserialization() {
        let result = serde_json::from_str::<RawStoryInput>(
            r#"{"academic_grade":"5th grade","subject":"photosynthesis",
                "word_count":"300","language":"English"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_optionals_are_normalized_away() {
        let mut input = valid_input();
        input.setting = Some(String::new());
        let request = input.into_request().expect("valid input");
        assert_eq!(request.setting, None);
    }
}
