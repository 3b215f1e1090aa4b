//! Custom question uploads
//!
//! Teachers can upload a JSON array of questions instead of the built-in bank:
//!
//! ```json
//! [{ "text": "2+2?", "options": ["3", "4", "5", "6"], "correctAnswer": 1 }]
//! ```
//!
//! The whole file is rejected if any element is invalid.

use serde::Deserialize;
use serde_json::Value;

use super::{CUSTOM_GRADE, Question};
use crate::error::ImportError;

/// Skill label for uploaded questions that don't name one
const DEFAULT_SKILL: &str = "custom";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(alias = "question", alias = "prompt")]
    text: String,
    options: Vec<String>,
    correct_answer: f64,
    #[serde(default)]
    skill: Option<String>,
    #[serde(default)]
    difficulty: Option<u8>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    damage: Option<u32>,
}

/// Parse and validate an uploaded question file
pub fn parse_custom_questions(json: &str) -> Result<Vec<Question>, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };
    if items.is_empty() {
        return Err(ImportError::Empty);
    }

    let questions = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("Imported {} custom questions", questions.len());
    Ok(questions)
}

fn validate(index: usize, item: Value) -> Result<Question, ImportError> {
    let invalid = |reason: String| ImportError::InvalidEntry { index, reason };

    if !item.is_object() {
        return Err(invalid("expected an object".into()));
    }
    let raw: RawQuestion = serde_json::from_value(item).map_err(|e| invalid(e.to_string()))?;

    let text = raw.text.trim();
    if text.is_empty() {
        return Err(invalid("question text is empty".into()));
    }
    if raw.correct_answer.fract() != 0.0 || raw.correct_answer < 0.0 {
        return Err(invalid(format!(
            "correctAnswer {} is not a whole number",
            raw.correct_answer
        )));
    }

    // Saturates for huge values, which the range check below rejects
    let question = Question {
        id: index as u32 + 1,
        text: text.to_string(),
        options: raw.options,
        correct_answer: raw.correct_answer as usize,
        difficulty: raw.difficulty.unwrap_or(1).clamp(1, 3),
        skill: raw.skill.unwrap_or_else(|| DEFAULT_SKILL.to_string()),
        grade: CUSTOM_GRADE.to_string(),
        subject: raw.subject,
        damage: raw.damage,
    };
    if !question.is_well_formed() {
        return Err(invalid(format!(
            "needs at least two options and a correctAnswer in 0..{}",
            question.options.len()
        )));
    }
    Ok(question)
}
