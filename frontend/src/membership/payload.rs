use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::membership::form::Expectation;

pub const APPLICATION_SOURCE: &str = "website";

/// One human readable line of the submitted application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
}

impl QaItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Body of `POST /api/membrii/applications/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationPayload {
    pub parent_name: String,
    pub phone: String,
    pub email: String,
    pub child_name: String,
    pub child_age: String,
    pub art_relationship: String,
    pub expectation: Expectation,
    pub source: String,
    pub qa_items: Vec<QaItem>,
    pub dynamic_answers: BTreeMap<String, String>,
}
