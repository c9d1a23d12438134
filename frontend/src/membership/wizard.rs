//! Step state machine of the membership application.
//!
//! Steps 1-4 collect input, `Submitted` is terminal. Moving forward requires
//! the current step to validate; moving back is allowed until the application
//! is in flight. Neither direction moves while a submission is pending.

use std::collections::BTreeSet;

use log::warn;

use crate::api::error::CmsError;
use crate::api::traits::MembershipApi;
use crate::membership::form::{ApplicationForm, Field};
use crate::membership::payload::{ApplicationPayload, QaItem, APPLICATION_SOURCE};
use crate::membership::questions::{Question, QuestionSource};
use crate::membership::validation::{validate, ValidationErrors};

pub const SUBMIT_REJECTED_MESSAGE: &str = "Nu am putut trimite aplicația. Încearcă din nou.";
pub const SUBMIT_FAILED_MESSAGE: &str = "A apărut o eroare la trimitere.";

pub const LEGACY_QUESTION: &str = "Descrieți relația copilului cu arta până în prezent";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    ParentDetails,
    ChildDetails,
    Questions,
    Expectations,
    Submitted,
}

impl Step {
    /// The steps that hold inputs, in order.
    pub const FORM_STEPS: [Step; 4] = [
        Step::ParentDetails,
        Step::ChildDetails,
        Step::Questions,
        Step::Expectations,
    ];

    pub fn number(self) -> u8 {
        match self {
            Step::ParentDetails => 1,
            Step::ChildDetails => 2,
            Step::Questions => 3,
            Step::Expectations => 4,
            Step::Submitted => 5,
        }
    }

    fn next(self) -> Step {
        match self {
            Step::ParentDetails => Step::ChildDetails,
            Step::ChildDetails => Step::Questions,
            Step::Questions | Step::Expectations => Step::Expectations,
            Step::Submitted => Step::Submitted,
        }
    }

    fn previous(self) -> Step {
        match self {
            Step::ParentDetails | Step::ChildDetails => Step::ParentDetails,
            Step::Questions => Step::ChildDetails,
            Step::Expectations => Step::Questions,
            Step::Submitted => Step::Submitted,
        }
    }

    /// Width of the progress bar, 0 on the first step and 100 from the last one on.
    pub fn progress_percent(self) -> u32 {
        let n = u32::from(self.number().clamp(1, 4));
        (n - 1) * 100 / 3
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    form: ApplicationForm,
    source: QuestionSource,
    step: Step,
    touched: BTreeSet<Field>,
    submitting: bool,
    submit_error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            form: ApplicationForm::default(),
            source: QuestionSource::Legacy,
            step: Step::ParentDetails,
            touched: BTreeSet::new(),
            submitting: false,
            submit_error: None,
        }
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        let mut wizard = Self::new();
        wizard.load_questions(questions);
        wizard
    }

    pub fn load_questions(&mut self, questions: Vec<Question>) {
        self.source = QuestionSource::from(questions);
    }

    /// Applies the outcome of a question fetch. Any failure falls back to the
    /// legacy free-text question; answers already typed are kept.
    pub fn apply_questions(&mut self, result: Result<Vec<Question>, CmsError>) {
        match result {
            Ok(questions) => self.load_questions(questions),
            Err(e) => {
                warn!("Membership questions unavailable, using the legacy field: {}", e);
                self.load_questions(Vec::new());
            }
        }
    }

    pub async fn fetch_questions<A: MembershipApi + ?Sized>(&mut self, api: &A) {
        let result = api.fetch_questions().await;
        self.apply_questions(result);
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn source(&self) -> &QuestionSource {
        &self.source
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set_field(field, value);
    }

    pub fn set_dynamic_answer(&mut self, key: impl Into<String>, value: String) {
        self.form.set_dynamic_answer(key, value);
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.form, &self.source)
    }

    pub fn step_is_valid(&self, step: Step) -> bool {
        match step {
            Step::Submitted => false,
            step => !self.validate().touches_step(step),
        }
    }

    /// Marks a field as visited so its error can be shown.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: &Field) -> bool {
        self.touched.contains(field)
    }

    /// Error for `field`, only once the user has visited it.
    pub fn visible_error(&self, field: &Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.validate().get(field).map(str::to_string)
    }

    fn step_fields(&self, step: Step) -> Vec<Field> {
        match step {
            Step::ParentDetails => vec![Field::ParentName, Field::Phone, Field::Email],
            Step::ChildDetails => vec![Field::ChildName, Field::ChildAge],
            Step::Questions => match &self.source {
                QuestionSource::Dynamic(questions) => questions
                    .iter()
                    .filter(|q| q.required)
                    .map(|q| Field::Question(q.key.clone()))
                    .collect(),
                QuestionSource::Legacy => vec![Field::ArtRelationship],
            },
            Step::Expectations => vec![Field::Expectation],
            Step::Submitted => Vec::new(),
        }
    }

    pub fn advance(&mut self) {
        if self.submitting {
            return;
        }
        for field in self.step_fields(self.step) {
            self.touch(field);
        }
        if !self.step_is_valid(self.step) {
            return;
        }
        self.submit_error = None;
        self.step = self.step.next();
    }

    pub fn retreat(&mut self) {
        if self.step == Step::Submitted || self.submitting {
            return;
        }
        self.submit_error = None;
        self.step = self.step.previous();
    }

    /// Question/answer list stored next to the structured application.
    pub fn build_snapshot(&self) -> Vec<QaItem> {
        let form = &self.form;
        let mut qa = vec![
            QaItem::new("Nume părinte (complet)", form.parent_name.trim()),
            QaItem::new("Telefon", form.phone.trim()),
            QaItem::new("Email", form.email.trim()),
            QaItem::new("Nume copil", form.child_name.trim()),
            QaItem::new("Vârsta copilului", form.child_age.as_str()),
        ];

        match &self.source {
            QuestionSource::Dynamic(questions) => {
                qa.extend(questions.iter().filter_map(|q| {
                    let answer = form.answer(&q.key).trim();
                    (!answer.is_empty()).then(|| QaItem::new(q.text.as_str(), answer))
                }));
            }
            QuestionSource::Legacy => {
                qa.push(QaItem::new(LEGACY_QUESTION, form.art_relationship.trim()));
            }
        }

        if let Some(expectation) = form.expectation {
            qa.push(QaItem::new("Așteptări", expectation.snapshot_label()));
        }

        qa
    }

    /// `None` until an expectation has been chosen.
    pub fn build_payload(&self) -> Option<ApplicationPayload> {
        let form = &self.form;
        Some(ApplicationPayload {
            parent_name: form.parent_name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            child_name: form.child_name.trim().to_string(),
            child_age: form.child_age.clone(),
            art_relationship: form.art_relationship.trim().to_string(),
            expectation: form.expectation?,
            source: APPLICATION_SOURCE.to_string(),
            qa_items: self.build_snapshot(),
            dynamic_answers: form.dynamic_answers.clone(),
        })
    }

    /// First half of `submit`: returns the payload to send, or `None` when the
    /// wizard is not ready to send anything.
    pub fn begin_submit(&mut self) -> Option<ApplicationPayload> {
        self.touch(Field::Expectation);
        if self.step != Step::Expectations || self.submitting || !self.step_is_valid(self.step) {
            return None;
        }
        let payload = self.build_payload()?;
        self.submit_error = None;
        self.submitting = true;
        Some(payload)
    }

    /// Second half of `submit`: applies the endpoint's answer.
    pub fn finish_submit(&mut self, result: Result<(), CmsError>) {
        self.submitting = false;
        match result {
            Ok(()) if self.step == Step::Expectations => self.step = Step::Submitted,
            Ok(()) => {}
            Err(CmsError::Status { message: None, .. }) => {
                self.submit_error = Some(SUBMIT_REJECTED_MESSAGE.to_string());
            }
            Err(err) => {
                let message = err.server_message().unwrap_or(SUBMIT_FAILED_MESSAGE);
                self.submit_error = Some(message.to_string());
            }
        }
    }

    pub async fn submit<A: MembershipApi + ?Sized>(&mut self, api: &A) {
        let Some(payload) = self.begin_submit() else {
            return;
        };
        let result = api.submit_application(&payload).await;
        self.finish_submit(result);
    }

    /// Starts a fresh application after a successful one.
    pub fn reset_for_submission(&mut self) {
        if self.step != Step::Submitted {
            return;
        }
        self.form = ApplicationForm::default();
        self.touched.clear();
        self.submit_error = None;
        self.step = Step::ParentDetails;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::application_message_from_body;
    use crate::api::traits::MockMembershipApi;
    use crate::membership::form::Expectation;
    use pretty_assertions::assert_eq;

    fn question(key: &str, text: &str, required: bool) -> Question {
        Question {
            id: None,
            key: key.to_string(),
            text: text.to_string(),
            suggested_answer: None,
            required,
            order: 0.0,
            is_active: true,
        }
    }

    fn fill_contact_and_child(wizard: &mut Wizard) {
        wizard.set_field(Field::ParentName, "Ana Pop".into());
        wizard.set_field(Field::Phone, "0722111222".into());
        wizard.set_field(Field::Email, "ana@example.ro".into());
        wizard.set_field(Field::ChildName, "Maria".into());
        wizard.set_field(Field::ChildAge, "6 ani".into());
    }

    /// A wizard sitting on step 4 with every field valid.
    fn ready_to_submit() -> Wizard {
        let mut wizard = Wizard::with_questions(vec![question("motivatie", "De ce arta?", true)]);
        fill_contact_and_child(&mut wizard);
        wizard.set_dynamic_answer("motivatie", "Da".into());
        wizard.set_field(Field::Expectation, "hobby".into());
        wizard.advance();
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.step(), Step::Expectations);
        wizard
    }

    #[test]
    fn happy_path_validates_every_step_and_submits() {
        let mut wizard = Wizard::with_questions(vec![question("motivatie", "De ce arta?", true)]);
        fill_contact_and_child(&mut wizard);
        wizard.set_dynamic_answer("motivatie", "Da".into());
        wizard.set_field(Field::Expectation, "hobby".into());

        for step in Step::FORM_STEPS {
            assert_eq!(wizard.step(), step);
            assert!(wizard.step_is_valid(step));
            if step != Step::Expectations {
                wizard.advance();
            }
        }

        let mut api = MockMembershipApi::new();
        api.expect_submit_application()
            .withf(|payload| payload.parent_name == "Ana Pop" && payload.source == "website")
            .times(1)
            .returning(|_| Ok(()));

        tokio_test::block_on(wizard.submit(&api));

        assert_eq!(wizard.step(), Step::Submitted);
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.submit_error(), None);
    }

    #[test]
    fn advance_is_blocked_by_an_invalid_step() {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::ParentName, "Ana Pop".into());
        wizard.advance();

        assert_eq!(wizard.step(), Step::ParentDetails);
        assert!(wizard.is_touched(&Field::Phone));
        assert!(wizard.visible_error(&Field::Email).is_some());
        assert_eq!(wizard.visible_error(&Field::ParentName), None);
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.visible_error(&Field::ParentName), None);
        wizard.touch(Field::ParentName);
        assert_eq!(
            wizard.visible_error(&Field::ParentName).as_deref(),
            Some("Te rugăm completează numele complet.")
        );
    }

    #[test]
    fn advance_is_capped_at_the_last_form_step() {
        let mut wizard = ready_to_submit();
        wizard.advance();
        assert_eq!(wizard.step(), Step::Expectations);
    }

    #[test]
    fn retreat_is_floored_at_the_first_step_and_clears_the_error() {
        let mut wizard = ready_to_submit();
        wizard.finish_submit(Err(CmsError::Network("offline".into())));
        assert!(wizard.submit_error().is_some());

        wizard.retreat();
        assert_eq!(wizard.step(), Step::Questions);
        assert_eq!(wizard.submit_error(), None);

        wizard.retreat();
        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.step(), Step::ParentDetails);
    }

    #[test]
    fn step_three_ignores_unanswered_optional_questions() {
        let mut wizard = Wizard::with_questions(vec![
            question("a", "A?", true),
            question("b", "B?", true),
            question("c", "C?", false),
        ]);
        wizard.set_dynamic_answer("a", "Da".into());
        wizard.set_dynamic_answer("b", "Nu".into());
        assert!(wizard.step_is_valid(Step::Questions));
    }

    #[test]
    fn advancing_from_step_three_touches_only_required_questions() {
        let mut wizard = Wizard::with_questions(vec![question("a", "A?", true), question("c", "C?", false)]);
        fill_contact_and_child(&mut wizard);
        wizard.advance();
        wizard.advance();
        wizard.advance();

        assert_eq!(wizard.step(), Step::Questions);
        assert!(wizard.is_touched(&Field::Question("a".into())));
        assert!(!wizard.is_touched(&Field::Question("c".into())));
        assert!(!wizard.is_touched(&Field::ArtRelationship));
    }

    #[test]
    fn snapshot_lists_answers_in_order_and_skips_blank_ones() {
        let mut wizard = Wizard::with_questions(vec![
            question("a", "Ce desenează?", true),
            question("b", "Ce materiale?", false),
            question("c", "Alte detalii?", false),
        ]);
        fill_contact_and_child(&mut wizard);
        wizard.set_dynamic_answer("a", " Portrete ".into());
        wizard.set_dynamic_answer("b", "   ".into());
        wizard.set_dynamic_answer("c", "Nimic".into());
        wizard.set_field(Field::Expectation, "performance".into());

        assert_eq!(
            wizard.build_snapshot(),
            vec![
                QaItem::new("Nume părinte (complet)", "Ana Pop"),
                QaItem::new("Telefon", "0722111222"),
                QaItem::new("Email", "ana@example.ro"),
                QaItem::new("Nume copil", "Maria"),
                QaItem::new("Vârsta copilului", "6 ani"),
                QaItem::new("Ce desenează?", "Portrete"),
                QaItem::new("Alte detalii?", "Nimic"),
                QaItem::new("Așteptări", "Performanță (pregătire pentru o carieră în arte vizuale)"),
            ]
        );
    }

    #[test]
    fn legacy_snapshot_uses_the_free_text_answer() {
        let mut wizard = Wizard::new();
        fill_contact_and_child(&mut wizard);
        wizard.set_field(Field::ArtRelationship, "  Pictează de la trei ani, mai ales acuarelă. ".into());

        let snapshot = wizard.build_snapshot();
        assert_eq!(snapshot.len(), 6);
        assert_eq!(
            snapshot[5],
            QaItem::new(LEGACY_QUESTION, "Pictează de la trei ani, mai ales acuarelă.")
        );
    }

    #[test]
    fn payload_carries_raw_dynamic_answers() {
        let mut wizard = ready_to_submit();
        wizard.set_dynamic_answer("extra", "  spații  ".into());

        let payload = wizard.build_payload().unwrap();
        assert_eq!(payload.expectation, Expectation::Hobby);
        assert_eq!(payload.dynamic_answers.get("extra").map(String::as_str), Some("  spații  "));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["expectation"], "hobby");
        assert_eq!(json["source"], "website");
        assert_eq!(json["qa_items"][0]["question"], "Nume părinte (complet)");
    }

    #[test]
    fn network_failure_keeps_the_form_for_retry() {
        let mut wizard = ready_to_submit();
        let before = wizard.form().clone();

        let mut api = MockMembershipApi::new();
        api.expect_submit_application()
            .times(1)
            .returning(|_| Err(CmsError::Network("Failed to fetch".into())));

        tokio_test::block_on(wizard.submit(&api));

        assert_eq!(wizard.step(), Step::Expectations);
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.submit_error(), Some(SUBMIT_FAILED_MESSAGE));
        assert_eq!(wizard.form(), &before);
    }

    #[test]
    fn server_message_is_shown_on_rejection() {
        let mut wizard = ready_to_submit();
        let mut api = MockMembershipApi::new();
        api.expect_submit_application().returning(|_| {
            Err(CmsError::Status {
                status: 400,
                message: Some("Există deja o aplicație cu acest email.".into()),
            })
        });

        tokio_test::block_on(wizard.submit(&api));
        assert_eq!(wizard.submit_error(), Some("Există deja o aplicație cu acest email."));

        wizard.finish_submit(Err(CmsError::Status { status: 500, message: None }));
        assert_eq!(wizard.submit_error(), Some(SUBMIT_REJECTED_MESSAGE));
    }

    #[test]
    fn submit_is_a_no_op_before_the_last_step() {
        let mut wizard = Wizard::new();
        fill_contact_and_child(&mut wizard);
        wizard.set_field(Field::Expectation, "hobby".into());

        let mut api = MockMembershipApi::new();
        api.expect_submit_application().times(0);

        tokio_test::block_on(wizard.submit(&api));
        assert_eq!(wizard.step(), Step::ParentDetails);
        assert!(wizard.is_touched(&Field::Expectation));
    }

    #[test]
    fn submit_without_expectation_only_reveals_the_error() {
        let mut wizard = ready_to_submit();
        wizard.set_field(Field::Expectation, String::new());

        assert_eq!(wizard.begin_submit(), None);
        assert!(!wizard.is_submitting());
        assert_eq!(
            wizard.visible_error(&Field::Expectation).as_deref(),
            Some("Te rugăm selectează o opțiune.")
        );
    }

    #[test]
    fn steps_are_frozen_while_sending() {
        let mut wizard = ready_to_submit();
        assert!(wizard.begin_submit().is_some());

        wizard.retreat();
        assert_eq!(wizard.step(), Step::Expectations);
        wizard.advance();
        assert_eq!(wizard.step(), Step::Expectations);

        wizard.finish_submit(Ok(()));
        assert_eq!(wizard.step(), Step::Submitted);
    }

    #[test]
    fn success_only_completes_from_the_last_step() {
        let mut wizard = ready_to_submit();
        wizard.retreat();
        assert_eq!(wizard.step(), Step::Questions);

        wizard.finish_submit(Ok(()));
        assert_eq!(wizard.step(), Step::Questions);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn message_only_rejection_shows_the_generic_text() {
        let mut wizard = ready_to_submit();
        let body = serde_json::json!({ "message": "Câmp invalid" });
        let mut api = MockMembershipApi::new();
        api.expect_submit_application().returning(move |_| {
            Err(CmsError::Status {
                status: 400,
                message: application_message_from_body(&body),
            })
        });

        tokio_test::block_on(wizard.submit(&api));
        assert_eq!(wizard.submit_error(), Some(SUBMIT_REJECTED_MESSAGE));
        assert_eq!(wizard.step(), Step::Expectations);
    }

    #[test]
    fn question_fetch_failure_falls_back_to_legacy() {
        let mut api = MockMembershipApi::new();
        api.expect_fetch_questions()
            .times(1)
            .returning(|| Err(CmsError::Decode("expected an object".into())));

        let mut wizard = Wizard::new();
        tokio_test::block_on(wizard.fetch_questions(&api));
        assert_eq!(wizard.source(), &QuestionSource::Legacy);
    }

    #[test]
    fn question_fetch_success_switches_to_dynamic() {
        let mut api = MockMembershipApi::new();
        api.expect_fetch_questions()
            .returning(|| Ok(vec![question("motivatie", "De ce arta?", true)]));

        let mut wizard = Wizard::new();
        tokio_test::block_on(wizard.fetch_questions(&api));
        assert!(wizard.source().is_dynamic());
        assert_eq!(wizard.source().questions().len(), 1);
    }

    #[test]
    fn reloading_questions_keeps_typed_answers() {
        let mut wizard = Wizard::with_questions(vec![question("motivatie", "De ce arta?", true)]);
        fill_contact_and_child(&mut wizard);
        wizard.set_dynamic_answer("motivatie", "Pictează zilnic".into());
        wizard.set_field(Field::ArtRelationship, "Desenează de la trei ani, cu mult drag.".into());

        wizard.apply_questions(Err(CmsError::Network("offline".into())));
        assert_eq!(wizard.source(), &QuestionSource::Legacy);
        assert_eq!(wizard.form().answer("motivatie"), "Pictează zilnic");

        wizard.apply_questions(Ok(vec![question("motivatie", "De ce arta?", true)]));
        assert!(wizard.source().is_dynamic());
        assert_eq!(wizard.form().answer("motivatie"), "Pictează zilnic");
        assert_eq!(wizard.form().art_relationship, "Desenează de la trei ani, cu mult drag.");
        assert_eq!(wizard.form().parent_name, "Ana Pop");
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut wizard = ready_to_submit();
        assert!(wizard.begin_submit().is_some());
        assert!(wizard.is_submitting());
        assert_eq!(wizard.begin_submit(), None);
    }

    #[test]
    fn terminal_state_only_leaves_through_reset() {
        let mut wizard = ready_to_submit();
        wizard.finish_submit(Ok(()));
        assert_eq!(wizard.step(), Step::Submitted);

        wizard.retreat();
        wizard.advance();
        assert_eq!(wizard.step(), Step::Submitted);

        wizard.reset_for_submission();
        assert_eq!(wizard.step(), Step::ParentDetails);
        assert_eq!(wizard.form(), &ApplicationForm::default());
        assert!(!wizard.is_touched(&Field::Expectation));
        assert!(wizard.source().is_dynamic());
    }

    #[test]
    fn reset_is_ignored_mid_application() {
        let mut wizard = ready_to_submit();
        wizard.reset_for_submission();
        assert_eq!(wizard.step(), Step::Expectations);
        assert_eq!(wizard.form().parent_name, "Ana Pop");
    }

    #[test]
    fn progress_follows_the_step() {
        assert_eq!(Step::ParentDetails.progress_percent(), 0);
        assert_eq!(Step::ChildDetails.progress_percent(), 33);
        assert_eq!(Step::Expectations.progress_percent(), 100);
        assert_eq!(Step::Submitted.progress_percent(), 100);
    }
}
