//! The mutable application form and the identifiers of its fields.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::membership::wizard::Step;

pub const MIN_CHILD_AGE: u32 = 4;

/// Ages offered in the child-age select, youngest first.
pub const AGE_OPTIONS: [&str; 14] = [
    "4 ani", "5 ani", "6 ani", "7 ani", "8 ani", "9 ani", "10 ani", "11 ani", "12 ani", "13 ani",
    "14 ani", "15 ani", "16 ani", "17 ani",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    Hobby,
    Performance,
}

impl Expectation {
    pub const ALL: [Expectation; 2] = [Expectation::Hobby, Expectation::Performance];

    pub fn as_str(self) -> &'static str {
        match self {
            Expectation::Hobby => "hobby",
            Expectation::Performance => "performance",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Expectation::Hobby => "Hobby",
            Expectation::Performance => "Performanță",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Expectation::Hobby => "Explorare creativă și dezvoltare personală",
            Expectation::Performance => "Pregătire pentru o carieră în arte vizuale",
        }
    }

    /// Sentence stored in the question/answer snapshot.
    pub fn snapshot_label(self) -> &'static str {
        match self {
            Expectation::Hobby => "Hobby (explorare creativă și dezvoltare personală)",
            Expectation::Performance => "Performanță (pregătire pentru o carieră în arte vizuale)",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expectation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hobby" => Ok(Expectation::Hobby),
            "performance" => Ok(Expectation::Performance),
            other => Err(format!("unknown expectation: {}", other)),
        }
    }
}

/// Identifies one input of the wizard; also the key of validation errors and the touched set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ParentName,
    Phone,
    Email,
    ChildName,
    ChildAge,
    ArtRelationship,
    Expectation,
    Question(String),
}

impl Field {
    pub fn step(&self) -> Step {
        match self {
            Field::ParentName | Field::Phone | Field::Email => Step::ParentDetails,
            Field::ChildName | Field::ChildAge => Step::ChildDetails,
            Field::ArtRelationship | Field::Question(_) => Step::Questions,
            Field::Expectation => Step::Expectations,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub parent_name: String,
    pub phone: String,
    pub email: String,
    pub child_name: String,
    pub child_age: String,
    /// Free text asked only when the CMS has no questions.
    pub art_relationship: String,
    pub expectation: Option<Expectation>,
    pub dynamic_answers: BTreeMap<String, String>,
}

impl ApplicationForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::ParentName => self.parent_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::ChildName => self.child_name = value,
            Field::ChildAge => self.child_age = value,
            Field::ArtRelationship => self.art_relationship = value,
            Field::Expectation => self.expectation = value.parse().ok(),
            Field::Question(key) => self.set_dynamic_answer(key, value),
        }
    }

    pub fn set_dynamic_answer(&mut self, key: impl Into<String>, value: String) {
        self.dynamic_answers.insert(key.into(), value);
    }

    pub fn answer(&self, key: &str) -> &str {
        self.dynamic_answers.get(key).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_only_the_named_field() {
        let mut form = ApplicationForm::default();
        form.set_field(Field::ParentName, "Ana Pop".into());
        form.set_field(Field::ChildAge, "6 ani".into());

        assert_eq!(form.parent_name, "Ana Pop");
        assert_eq!(form.child_age, "6 ani");
        assert!(form.phone.is_empty());
        assert!(form.expectation.is_none());
    }

    #[test]
    fn expectation_is_parsed_from_its_wire_value() {
        let mut form = ApplicationForm::default();
        form.set_field(Field::Expectation, "performance".into());
        assert_eq!(form.expectation, Some(Expectation::Performance));

        form.set_field(Field::Expectation, "career".into());
        assert_eq!(form.expectation, None);
    }

    #[test]
    fn question_field_writes_a_dynamic_answer() {
        let mut form = ApplicationForm::default();
        form.set_field(Field::Question("materiale".into()), "Acuarelă".into());
        assert_eq!(form.answer("materiale"), "Acuarelă");
        assert_eq!(form.answer("lipsa"), "");
    }

    #[test]
    fn expectation_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Expectation::Hobby).unwrap(), "\"hobby\"");
    }

    #[test]
    fn fields_belong_to_their_steps() {
        assert_eq!(Field::Email.step(), Step::ParentDetails);
        assert_eq!(Field::ChildAge.step(), Step::ChildDetails);
        assert_eq!(Field::Question("x".into()).step(), Step::Questions);
        assert_eq!(Field::Expectation.step(), Step::Expectations);
    }
}
