//! Pure validation of the application form. Messages are the Romanian texts
//! shown next to each field.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::membership::form::{ApplicationForm, Field, AGE_OPTIONS, MIN_CHILD_AGE};
use crate::membership::questions::QuestionSource;
use crate::membership::wizard::Step;

pub const MIN_PHONE_DIGITS: usize = 9;
pub const MIN_ART_RELATIONSHIP_CHARS: usize = 20;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern compiles"));

/// `local@domain.tld` with a TLD of at least two characters. Surrounding whitespace is ignored.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// First run of digits in an age label such as `"6 ani"`.
pub fn age_in_years(label: &str) -> Option<u32> {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Field errors for the current form, keyed by field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: &Field) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &Field) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &str)> {
        self.0.iter().map(|(field, message)| (field, message.as_str()))
    }

    /// Whether any error belongs to a field shown on `step`.
    pub fn touches_step(&self, step: Step) -> bool {
        self.0.keys().any(|field| field.step() == step)
    }
}

fn child_age_error(label: &str) -> Option<&'static str> {
    if label.trim().is_empty() {
        return Some("Te rugăm selectează vârsta.");
    }
    match age_in_years(label) {
        None => Some("Te rugăm selectează o vârstă validă."),
        Some(age) if age < MIN_CHILD_AGE => Some("Vârsta minimă este 4 ani."),
        Some(_) if !AGE_OPTIONS.contains(&label) => Some("Te rugăm selectează o vârstă validă."),
        Some(_) => None,
    }
}

/// Validates every step at once. Pure over the form and the question source.
pub fn validate(form: &ApplicationForm, source: &QuestionSource) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.parent_name.trim().is_empty() {
        errors.insert(Field::ParentName, "Te rugăm completează numele complet.");
    }
    if digit_count(&form.phone) < MIN_PHONE_DIGITS {
        errors.insert(Field::Phone, "Te rugăm completează un număr de telefon valid.");
    }
    if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Te rugăm completează un email valid.");
    }

    if form.child_name.trim().is_empty() {
        errors.insert(Field::ChildName, "Te rugăm completează numele copilului.");
    }
    if let Some(message) = child_age_error(&form.child_age) {
        errors.insert(Field::ChildAge, message);
    }

    match source {
        QuestionSource::Dynamic(questions) => {
            for question in questions.iter().filter(|q| q.required) {
                if form.answer(&question.key).trim().is_empty() {
                    errors.insert(
                        Field::Question(question.key.clone()),
                        "Acest câmp este obligatoriu.",
                    );
                }
            }
        }
        QuestionSource::Legacy => {
            if form.art_relationship.trim().chars().count() < MIN_ART_RELATIONSHIP_CHARS {
                errors.insert(
                    Field::ArtRelationship,
                    "Te rugăm scrie câteva detalii (minim 20 caractere).",
                );
            }
        }
    }

    if form.expectation.is_none() {
        errors.insert(Field::Expectation, "Te rugăm selectează o opțiune.");
    }

    errors
}
