//! Application questions as served by the CMS, normalized into one ordered list.
//!
//! A fetch that yields nothing usable leaves the wizard on the legacy
//! free-text question.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// A CMS-authored prompt for step 3 of the wizard.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub id: Option<String>,
    pub key: String,
    pub text: String,
    pub suggested_answer: Option<String>,
    pub required: bool,
    pub order: f64,
    pub is_active: bool,
}

/// Where step 3 gets its prompts from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QuestionSource {
    Dynamic(Vec<Question>),
    /// The CMS returned nothing usable; a single free-text field is asked instead.
    #[default]
    Legacy,
}

impl From<Vec<Question>> for QuestionSource {
    fn from(questions: Vec<Question>) -> Self {
        if questions.is_empty() {
            QuestionSource::Legacy
        } else {
            QuestionSource::Dynamic(questions)
        }
    }
}

impl QuestionSource {
    pub fn questions(&self) -> &[Question] {
        match self {
            QuestionSource::Dynamic(questions) => questions,
            QuestionSource::Legacy => &[],
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, QuestionSource::Dynamic(_))
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Missing or null flags count as set.
fn flag(item: &Map<String, Value>, key: &str) -> bool {
    match item.get(key) {
        None | Some(Value::Null) => true,
        Some(value) => truthy(value),
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(item: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| item.get(*key).and_then(text))
}

fn order(item: &Map<String, Value>, index: usize) -> f64 {
    let parsed = match item.get("order") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => Some(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(index as f64)
}

fn normalize_question(item: &Map<String, Value>, index: usize) -> Question {
    let id = ["id", "pk"]
        .iter()
        .find_map(|key| item.get(*key).filter(|v| !v.is_null()))
        .and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            other => text(other),
        });

    let key = first_text(item, &["key", "slug"]).unwrap_or_else(|| match &id {
        Some(id) => format!("q_{}", id),
        None => format!("q_{}", index + 1),
    });

    Question {
        key,
        id,
        text: first_text(item, &["question_text", "question", "text"]).unwrap_or_default(),
        suggested_answer: first_text(item, &["suggested_answer", "placeholder", "hint"]),
        required: flag(item, "required"),
        order: order(item, index),
        is_active: flag(item, "is_active"),
    }
}

/// Normalizes the body of the questions endpoint.
///
/// Accepts `{items: [...]}` or `{questions: [...]}`. Inactive and blank
/// prompts are dropped and the rest are sorted by `order`, keeping the CMS
/// order for ties.
pub fn normalize_questions(body: &Value) -> Vec<Question> {
    let raw = ["items", "questions"]
        .iter()
        .find_map(|key| body.get(*key).filter(|v| truthy(v)));

    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };

    let mut questions: Vec<Question> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| item.as_object().map(|obj| normalize_question(obj, index)))
        .filter(|q| q.is_active && !q.text.trim().is_empty())
        .collect();

    questions.sort_by(|a, b| a.order.partial_cmp(&b.order).unwrap_or(Ordering::Equal));
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn items_are_normalized_with_defaults() {
        let body = json!({
            "items": [
                { "id": 7, "key": "materiale", "question_text": "Ce materiale folosește?", "suggested_answer": "Acuarelă..." }
            ]
        });

        assert_eq!(
            normalize_questions(&body),
            vec![Question {
                id: Some("7".into()),
                key: "materiale".into(),
                text: "Ce materiale folosește?".into(),
                suggested_answer: Some("Acuarelă...".into()),
                required: true,
                order: 0.0,
                is_active: true,
            }]
        );
    }

    #[test]
    fn alternate_field_names_are_accepted() {
        let body = json!({
            "questions": [
                { "pk": 3, "slug": "pasiuni", "question": "Ce îi place?", "placeholder": "Desen", "required": false },
                { "text": "Fără cheie" }
            ]
        });

        let questions = normalize_questions(&body);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].key, "pasiuni");
        assert_eq!(questions[0].id.as_deref(), Some("3"));
        assert_eq!(questions[0].suggested_answer.as_deref(), Some("Desen"));
        assert!(!questions[0].required);
        assert_eq!(questions[1].key, "q_2");
        assert_eq!(questions[1].id, None);
    }

    #[test]
    fn key_falls_back_to_id() {
        let body = json!({ "items": [{ "id": 12, "key": "", "question_text": "Q" }] });
        assert_eq!(normalize_questions(&body)[0].key, "q_12");
    }

    #[test]
    fn inactive_and_blank_questions_are_dropped() {
        let body = json!({
            "items": [
                null,
                { "key": "a", "question_text": "   " },
                { "key": "b", "question_text": "Inactivă", "is_active": false },
                { "key": "c", "question_text": "Activă", "is_active": null },
                "not an object"
            ]
        });

        let keys: Vec<String> = normalize_questions(&body).into_iter().map(|q| q.key).collect();
        assert_eq!(keys, vec!["c".to_string()]);
    }

    #[test]
    fn questions_are_sorted_by_order_keeping_ties_stable() {
        let body = json!({
            "items": [
                { "key": "third", "question_text": "3", "order": 5 },
                { "key": "first", "question_text": "1", "order": "1" },
                { "key": "tie_a", "question_text": "2a", "order": 2 },
                { "key": "tie_b", "question_text": "2b", "order": 2 }
            ]
        });

        let keys: Vec<String> = normalize_questions(&body).into_iter().map(|q| q.key).collect();
        assert_eq!(keys, vec!["first", "tie_a", "tie_b", "third"]);
    }

    #[test]
    fn missing_or_malformed_lists_yield_nothing() {
        assert!(normalize_questions(&json!({})).is_empty());
        assert!(normalize_questions(&json!({ "items": "nope" })).is_empty());
        assert!(normalize_questions(&Value::Null).is_empty());
    }

    #[test]
    fn empty_question_list_means_legacy_source() {
        assert_eq!(QuestionSource::from(Vec::new()), QuestionSource::Legacy);
        assert!(!QuestionSource::Legacy.is_dynamic());
        assert!(QuestionSource::Legacy.questions().is_empty());
    }
}
