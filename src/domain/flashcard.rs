// src/domain/flashcard.rs
use serde::{Deserialize, Serialize};

/// A row of the `Flashcard` table.
///
/// Field names on the wire match the column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Question_Content")]
    pub question_content: Option<String>,
    #[serde(rename = "Answer_Content")]
    pub answer_content: Option<String>,
}

/// Caller-supplied content for creating or editing a flashcard.
///
/// Both fields are optional. `null` and a missing field are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardInput {
    #[serde(rename = "Question_Content")]
    pub question_content: Option<String>,
    #[serde(rename = "Answer_Content")]
    pub answer_content: Option<String>,
}

impl FlashcardInput {
    pub fn new(question: Option<&str>, answer: Option<&str>) -> Self {
        Self {
            question_content: question.map(str::to_string),
            answer_content: answer.map(str::to_string),
        }
    }

    /// Compute the values an edit writes back.
    ///
    /// Each requested field wins when it is non-empty, otherwise the stored
    /// value is kept. Both columns are always rewritten with the result.
    pub fn merge_onto(self, existing: &Flashcard) -> FlashcardInput {
        FlashcardInput {
            question_content: prefer_non_empty(
                self.question_content,
                existing.question_content.as_deref(),
            ),
            answer_content: prefer_non_empty(
                self.answer_content,
                existing.answer_content.as_deref(),
            ),
        }
    }

    /// True when at least one of the two fields holds a non-empty string.
    pub fn has_content(&self) -> bool {
        is_filled(self.question_content.as_deref()) || is_filled(self.answer_content.as_deref())
    }
}

fn prefer_non_empty(requested: Option<String>, existing: Option<&str>) -> Option<String> {
    requested
        .filter(|value| !value.is_empty())
        .or_else(|| existing.map(str::to_string))
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stored(question: Option<&str>, answer: Option<&str>) -> Flashcard {
        Flashcard {
            id: 7,
            question_content: question.map(str::to_string),
            answer_content: answer.map(str::to_string),
        }
    }

    #[rstest]
    #[case(Some("new q"), None, Some("new q"), Some("old a"))]
    #[case(None, Some("new a"), Some("old q"), Some("new a"))]
    #[case(Some(""), Some(""), Some("old q"), Some("old a"))]
    #[case(Some("new q"), Some("new a"), Some("new q"), Some("new a"))]
    fn given_partial_input_when_merging_then_empty_fields_fall_back_to_stored(
        #[case] question: Option<&str>,
        #[case] answer: Option<&str>,
        #[case] expected_question: Option<&str>,
        #[case] expected_answer: Option<&str>,
    ) {
        let existing = stored(Some("old q"), Some("old a"));

        let merged = FlashcardInput::new(question, answer).merge_onto(&existing);

        assert_eq!(merged.question_content.as_deref(), expected_question);
        assert_eq!(merged.answer_content.as_deref(), expected_answer);
    }

    #[test]
    fn given_empty_input_and_empty_row_when_merging_then_has_no_content() {
        let existing = stored(Some(""), None);

        let merged = FlashcardInput::new(Some(""), None).merge_onto(&existing);

        assert!(!merged.has_content());
    }

    #[test]
    fn given_stored_null_answer_when_merging_question_only_then_answer_stays_null() {
        let existing = stored(Some("q"), None);

        let merged = FlashcardInput::new(Some("edited"), None).merge_onto(&existing);

        assert_eq!(merged.question_content.as_deref(), Some("edited"));
        assert_eq!(merged.answer_content, None);
        assert!(merged.has_content());
    }

    #[test]
    fn given_json_with_null_and_missing_fields_when_deserializing_then_both_absent() {
        let input: FlashcardInput =
            serde_json::from_str(r#"{"Question_Content": null, "Extra": 1}"#).unwrap();

        assert_eq!(input, FlashcardInput::default());
    }
}
