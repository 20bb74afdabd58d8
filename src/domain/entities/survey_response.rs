use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer to one survey question as submitted by the wizard.
///
/// Single-choice questions send a string, multi-select questions send an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurveyAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl SurveyAnswer {
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, SurveyAnswer::Multiple(_))
    }
}

/// Survey answer row as stored in the db.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    pub id: Uuid,
    pub waitlist_user_id: Uuid,
    pub question_id: String,
    pub answer: String,
    pub is_multiple_choice: bool,
    pub created_at: DateTime<Utc>,
}

/// One row to be written for a submission, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSurveyResponse {
    pub question_id: String,
    pub answer: String,
    pub is_multiple_choice: bool,
}

/// Expand the submitted answer map into rows: one per single answer, one per
/// selected option of a multi-select question.
pub fn flatten_answers(answers: &BTreeMap<String, SurveyAnswer>) -> Vec<NewSurveyResponse> {
    let mut rows = Vec::new();
    for (question_id, answer) in answers {
        let is_multiple_choice = answer.is_multiple_choice();
        let values = match answer {
            SurveyAnswer::Single(value) => std::slice::from_ref(value),
            SurveyAnswer::Multiple(values) => values.as_slice(),
        };
        rows.extend(values.iter().map(|value| NewSurveyResponse {
            question_id: question_id.clone(),
            answer: value.clone(),
            is_multiple_choice,
        }));
    }
    rows
}
