use std::rc::Rc;

use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::client::CmsClient;
use crate::api::error::CmsError;
use crate::api::traits::MembershipApi;
use crate::membership::form::{Expectation, Field, AGE_OPTIONS};
use crate::membership::questions::{Question, QuestionSource};
use crate::membership::validation::MIN_ART_RELATIONSHIP_CHARS;
use crate::membership::wizard::{Step, Wizard};

pub enum MembershipMsg {
    QuestionsFetched(Result<Vec<Question>, CmsError>),
    SetField(Field, String),
    Touch(Field),
    ChooseExpectation(Expectation),
    Next,
    Back,
    Submit,
    SubmitFinished(Result<(), CmsError>),
    StartOver,
}

/// The "Membrie" section: a four step application wizard.
///
/// Replies that arrive after the section is gone are dropped by the scope.
pub struct Membership {
    wizard: Wizard,
    loading_questions: bool,
    api: Rc<CmsClient>,
}

impl Component for Membership {
    type Message = MembershipMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = Rc::new(CmsClient::default());
        {
            let api = api.clone();
            ctx.link().send_future(async move {
                MembershipMsg::QuestionsFetched(api.fetch_questions().await)
            });
        }

        Self {
            wizard: Wizard::new(),
            loading_questions: true,
            api,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MembershipMsg::QuestionsFetched(result) => {
                self.wizard.apply_questions(result);
                self.loading_questions = false;
            }
            MembershipMsg::SetField(field, value) => self.wizard.set_field(field, value),
            MembershipMsg::Touch(field) => self.wizard.touch(field),
            MembershipMsg::ChooseExpectation(expectation) => {
                self.wizard
                    .set_field(Field::Expectation, expectation.as_str().to_string());
                self.wizard.touch(Field::Expectation);
            }
            MembershipMsg::Next => self.wizard.advance(),
            MembershipMsg::Back => self.wizard.retreat(),
            MembershipMsg::Submit => {
                let Some(payload) = self.wizard.begin_submit() else {
                    return true;
                };
                let api = self.api.clone();
                ctx.link().send_future(async move {
                    MembershipMsg::SubmitFinished(api.submit_application(&payload).await)
                });
            }
            MembershipMsg::SubmitFinished(result) => {
                match &result {
                    Ok(()) => info!("Application sent"),
                    Err(e) => error!("Application failed: {}", e),
                }
                self.wizard.finish_submit(result);
            }
            MembershipMsg::StartOver => self.wizard.reset_for_submission(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();

        html! {
            <section id="membrie" class="membership-section">
                <div class="membership-header">
                    <span class="section-label">{"( APLICAȚIE )"}</span>
                    <h1>{"Solicită acces la "}<span class="italic">{"comunitatea noastră"}</span>{"."}</h1>
                    if self.loading_questions {
                        <p class="membership-loading">{"Se încarcă formularul…"}</p>
                    }
                </div>
                <div class="membership-card">
                    <div class="membership-progress">
                        { step_dots(step) }
                        <div class="progress-track">
                            <div class="progress-fill" style={format!("width: {}%;", step.progress_percent())}></div>
                        </div>
                        <span class="progress-caption">
                            {
                                if step == Step::Submitted {
                                    "Final".to_string()
                                } else {
                                    format!("Pasul {} din 4", step.number())
                                }
                            }
                        </span>
                    </div>
                    <div class="membership-body">
                        {
                            match step {
                                Step::ParentDetails => self.view_parent(ctx),
                                Step::ChildDetails => self.view_child(ctx),
                                Step::Questions => self.view_questions(ctx),
                                Step::Expectations => self.view_expectations(ctx),
                                Step::Submitted => self.view_success(ctx),
                            }
                        }
                    </div>
                    if step != Step::Submitted {
                        { self.view_controls(ctx) }
                    }
                </div>
                <style>{MEMBERSHIP_CSS}</style>
            </section>
        }
    }
}

impl Membership {
    fn text_input(&self, ctx: &Context<Self>, label: &'static str, placeholder: &'static str, field: Field, value: &str, input_mode: &'static str) -> Html {
        let error = self.wizard.visible_error(&field);
        let oninput = {
            let field = field.clone();
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                MembershipMsg::SetField(field.clone(), input.value())
            })
        };
        let onblur = ctx.link().callback(move |_: FocusEvent| MembershipMsg::Touch(field.clone()));

        html! {
            <div class="form-field">
                <label>{label}</label>
                <div class={classes!("input-shell", error.is_some().then_some("has-error"))}>
                    <input
                        value={value.to_string()}
                        placeholder={placeholder}
                        inputmode={input_mode}
                        oninput={oninput}
                        onblur={onblur}
                    />
                </div>
                if let Some(error) = error {
                    <div class="field-error">{error}</div>
                }
            </div>
        }
    }

    fn text_area(&self, ctx: &Context<Self>, label: Html, placeholder: String, field: Field, value: &str) -> Html {
        let error = self.wizard.visible_error(&field);
        let oninput = {
            let field = field.clone();
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                MembershipMsg::SetField(field.clone(), input.value())
            })
        };
        let onblur = ctx.link().callback(move |_: FocusEvent| MembershipMsg::Touch(field.clone()));

        html! {
            <div class="form-field">
                { label }
                <div class={classes!("input-shell", error.is_some().then_some("has-error"))}>
                    <textarea rows="7" value={value.to_string()} placeholder={placeholder} oninput={oninput} onblur={onblur} />
                </div>
                if let Some(error) = error {
                    <div class="field-error">{error}</div>
                }
            </div>
        }
    }

    fn view_parent(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        html! {
            <div>
                <h2>{"Detalii Părinte"}</h2>
                <p class="step-intro">{"Datele vor fi folosite doar pentru a te contacta."}</p>
                <div class="form-grid">
                    { self.text_input(ctx, "Nume complet", "Numele și prenumele", Field::ParentName, &form.parent_name, "text") }
                    { self.text_input(ctx, "Telefon", "+40 7XX XXX XXX", Field::Phone, &form.phone, "tel") }
                    { self.text_input(ctx, "Email", "email@exemplu.ro", Field::Email, &form.email, "email") }
                </div>
            </div>
        }
    }

    fn view_child(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        let age_error = self.wizard.visible_error(&Field::ChildAge);
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            MembershipMsg::SetField(Field::ChildAge, select.value())
        });
        let onblur = ctx.link().callback(|_: FocusEvent| MembershipMsg::Touch(Field::ChildAge));

        html! {
            <div>
                <h2>{"Detalii Copil"}</h2>
                <p class="step-intro">{"Doar informațiile necesare pentru a înțelege profilul."}</p>
                <div class="form-grid">
                    { self.text_input(ctx, "Numele copilului", "Numele copilului", Field::ChildName, &form.child_name, "text") }
                    <div class="form-field">
                        <label>{"Vârsta"}</label>
                        <div class={classes!("input-shell", age_error.is_some().then_some("has-error"))}>
                            <select onchange={onchange} onblur={onblur}>
                                <option value="" disabled={true} selected={form.child_age.is_empty()}>
                                    {"Selectează vârsta (minim 4 ani)"}
                                </option>
                                { for AGE_OPTIONS.iter().map(|age| html! {
                                    <option value={*age} selected={form.child_age == *age}>{*age}</option>
                                }) }
                            </select>
                        </div>
                        if let Some(error) = age_error {
                            <div class="field-error">{error}</div>
                        }
                    </div>
                </div>
            </div>
        }
    }

    fn view_questions(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        match self.wizard.source() {
            QuestionSource::Dynamic(questions) => html! {
                <div>
                    <h2>{"Întrebări"}</h2>
                    <p class="step-intro">
                        {"Răspunsurile ne ajută să înțelegem contextul copilului. (câmpurile marcate sunt obligatorii)"}
                    </p>
                    <div class="form-grid">
                        { for questions.iter().map(|q| {
                            let label = html! {
                                <label>
                                    {q.text.clone()}
                                    if q.required {
                                        <span class="required-mark">{" *"}</span>
                                    }
                                </label>
                            };
                            let placeholder = q
                                .suggested_answer
                                .clone()
                                .unwrap_or_else(|| "Scrie răspunsul aici…".to_string());
                            self.text_area(ctx, label, placeholder, Field::Question(q.key.clone()), form.answer(&q.key))
                        }) }
                    </div>
                </div>
            },
            QuestionSource::Legacy => html! {
                <div>
                    <h2>{"Relația cu Arta"}</h2>
                    <p class="step-intro">{"Descrieți, pe scurt, relația copilului cu arta până în prezent."}</p>
                    <div class="form-grid">
                        {
                            self.text_area(
                                ctx,
                                html! {},
                                "Ce medii artistice a explorat? Ce îl/o fascinează? Există lucrări de care este mândru/mândră?".to_string(),
                                Field::ArtRelationship,
                                &form.art_relationship,
                            )
                        }
                        <div class="char-counter">
                            { format!(
                                "Minim {} caractere. ({}/{})",
                                MIN_ART_RELATIONSHIP_CHARS,
                                form.art_relationship.trim().chars().count(),
                                MIN_ART_RELATIONSHIP_CHARS
                            ) }
                        </div>
                    </div>
                </div>
            },
        }
    }

    fn view_expectations(&self, ctx: &Context<Self>) -> Html {
        let chosen = self.wizard.form().expectation;
        let submitting = self.wizard.is_submitting();

        html! {
            <div>
                <h2>{"Așteptări"}</h2>
                <p class="step-intro">{"Ce căutați pentru copilul dumneavoastră?"}</p>
                <div class="choice-grid">
                    { for Expectation::ALL.iter().map(|&expectation| {
                        let onclick = ctx.link().callback(move |_: MouseEvent| MembershipMsg::ChooseExpectation(expectation));
                        html! {
                            <button
                                type="button"
                                class={classes!("choice-card", (chosen == Some(expectation)).then_some("checked"))}
                                disabled={submitting}
                                onclick={onclick}
                            >
                                <span class="choice-dot"></span>
                                <div>
                                    <div class="choice-title">{expectation.title()}</div>
                                    <div class="choice-description">{expectation.description()}</div>
                                </div>
                            </button>
                        }
                    }) }
                    if let Some(error) = self.wizard.visible_error(&Field::Expectation) {
                        <div class="field-error">{error}</div>
                    }
                    if let Some(error) = self.wizard.submit_error() {
                        <div class="submit-error">{error.to_string()}</div>
                    }
                </div>
            </div>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| MembershipMsg::StartOver);
        html! {
            <div class="membership-success">
                <div class="success-badge"><span>{"✓"}</span></div>
                <h2>{"Aplicația a fost înregistrată."}</h2>
                <p>{"Comitetul de admitere vă va contacta în 48h."}</p>
                <button type="button" class="secondary-button" onclick={onclick}>
                    {"Trimite o nouă aplicație"}
                </button>
            </div>
        }
    }

    fn view_controls(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();
        let submitting = self.wizard.is_submitting();
        let back_disabled = step == Step::ParentDetails || submitting;
        let submit_disabled = submitting || !self.wizard.step_is_valid(step);

        html! {
            <div class="membership-controls">
                <button
                    type="button"
                    class="back-button"
                    disabled={back_disabled}
                    onclick={ctx.link().callback(|_: MouseEvent| MembershipMsg::Back)}
                >
                    <span aria-hidden="true">{"←"}</span>
                    <span>{"Înapoi"}</span>
                </button>
                if step == Step::Expectations {
                    <button
                        type="button"
                        class={classes!("submit-button", submit_disabled.then_some("disabled"))}
                        disabled={submit_disabled}
                        onclick={ctx.link().callback(|_: MouseEvent| MembershipMsg::Submit)}
                    >
                        { if submitting { "Se trimite…" } else { "Trimite candidatura" } }
                    </button>
                } else {
                    <button
                        type="button"
                        class="next-button"
                        onclick={ctx.link().callback(|_: MouseEvent| MembershipMsg::Next)}
                    >
                        <span>{"Continuă"}</span>
                        <span aria-hidden="true">{"→"}</span>
                    </button>
                }
            </div>
        }
    }
}

fn step_dots(step: Step) -> Html {
    let current = step.number().clamp(1, 4);
    html! {
        <div class="step-dots">
            { for (1..=4u8).map(|n| {
                let done = current > n;
                let active = current == n;
                html! {
                    <div class="step-dot-wrap">
                        <div
                            class={classes!("step-dot", done.then_some("done"), active.then_some("active"))}
                            aria-label={if done { format!("Pasul {} completat", n) } else { format!("Pasul {}", n) }}
                        >
                            { if done { "✓".to_string() } else { n.to_string() } }
                        </div>
                        if n != 4 {
                            <div class="step-line"></div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

const MEMBERSHIP_CSS: &str = r#"
.membership-section {
    position: relative;
    width: 100%;
    background: #f4f1ea;
    padding: 7rem 1rem 9rem;
}
.membership-header {
    text-align: center;
    margin-bottom: 2.5rem;
}
.membership-header h1 {
    max-width: 48rem;
    margin: 0.75rem auto 0;
    font-size: 3rem;
    font-weight: 500;
    line-height: 1.1;
}
.membership-loading {
    margin-top: 0.75rem;
    font-size: 0.875rem;
    color: #78716c;
}
.membership-card {
    max-width: 56rem;
    margin: 0 auto;
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.55);
    box-shadow: 0 30px 80px rgba(0, 0, 0, 0.07);
    backdrop-filter: blur(24px);
}
.membership-progress {
    padding: 1.25rem 2rem;
}
.step-dots {
    display: flex;
    justify-content: space-between;
    gap: 0.75rem;
}
.step-dot-wrap {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}
.step-dot {
    display: grid;
    place-items: center;
    width: 2.75rem;
    height: 2.75rem;
    border: 1px solid rgba(0, 0, 0, 0.12);
    border-radius: 999px;
    color: rgba(0, 0, 0, 0.55);
}
.step-dot.active, .step-dot.done {
    color: #7f1d1d;
    background: rgba(127, 29, 29, 0.08);
}
.step-line {
    width: 7vw;
    max-width: 140px;
    height: 2px;
    background: rgba(0, 0, 0, 0.1);
}
.progress-track {
    margin-top: 1rem;
    height: 3px;
    border-radius: 999px;
    background: rgba(0, 0, 0, 0.1);
    overflow: hidden;
}
.progress-fill {
    height: 100%;
    background: #7f1d1d;
    transition: width 0.3s ease;
}
.progress-caption {
    display: block;
    margin-top: 0.75rem;
    font-size: 0.75rem;
    color: #78716c;
}
.membership-body {
    padding: 2.5rem 2rem;
}
.membership-body h2 {
    font-size: 2.25rem;
}
.step-intro {
    margin-top: 0.5rem;
    color: #57534e;
}
.form-grid, .choice-grid {
    display: grid;
    gap: 1.5rem;
    margin-top: 2rem;
}
.form-field label {
    display: block;
    font-size: 0.875rem;
    color: #44403c;
}
.input-shell {
    margin-top: 0.5rem;
    border: 1px solid rgba(0, 0, 0, 0.15);
    border-radius: 0.75rem;
    background: #f7f4ee;
    padding: 0.75rem 1rem;
}
.input-shell.has-error {
    border-color: #fca5a5;
}
.input-shell input, .input-shell select, .input-shell textarea {
    width: 100%;
    border: none;
    outline: none;
    background: transparent;
    font-size: 16px;
    color: #292524;
    resize: none;
}
.field-error {
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: #b91c1c;
}
.required-mark {
    color: #b91c1c;
}
.char-counter {
    font-size: 0.75rem;
    color: #78716c;
}
.choice-card {
    display: flex;
    gap: 1rem;
    width: 100%;
    padding: 1.25rem;
    text-align: left;
    border: 1px solid rgba(0, 0, 0, 0.15);
    border-radius: 1rem;
    background: #f7f4ee;
    cursor: pointer;
}
.choice-card.checked {
    border-color: rgba(0, 0, 0, 0.3);
    box-shadow: 0 18px 45px rgba(0, 0, 0, 0.08);
}
.choice-dot {
    width: 1.5rem;
    height: 1.5rem;
    border-radius: 999px;
    border: 1px solid rgba(0, 0, 0, 0.2);
}
.choice-card.checked .choice-dot {
    border-color: transparent;
    background: radial-gradient(circle, #7f1d1d 30%, rgba(127, 29, 29, 0.1) 35%);
}
.choice-title {
    font-size: 1.125rem;
    font-weight: 500;
}
.choice-description {
    margin-top: 0.25rem;
    font-size: 0.875rem;
    color: #57534e;
}
.submit-error {
    margin-top: 1rem;
    padding: 0.75rem 1rem;
    border: 1px solid #fecaca;
    border-radius: 0.75rem;
    background: #fef2f2;
    color: #991b1b;
    font-size: 0.875rem;
}
.membership-controls {
    display: flex;
    justify-content: space-between;
    padding: 1.25rem 2rem;
    border-top: 1px solid rgba(0, 0, 0, 0.08);
}
.back-button, .next-button, .submit-button, .secondary-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    border-radius: 999px;
    padding: 0.5rem 1.25rem;
    font-size: 0.875rem;
    cursor: pointer;
}
.back-button {
    border: none;
    background: transparent;
}
.back-button:disabled {
    color: #a8a29e;
    cursor: default;
}
.next-button, .secondary-button {
    border: 1px solid rgba(0, 0, 0, 0.12);
    background: #fff;
}
.submit-button {
    border: none;
    color: #fff;
    letter-spacing: 0.18em;
    text-transform: uppercase;
    background: linear-gradient(135deg, #7f1d1d, #3f0e0e);
}
.submit-button.disabled {
    color: #78716c;
    background: rgba(0, 0, 0, 0.1);
    cursor: default;
}
.membership-success {
    padding: 2.5rem 0;
    text-align: center;
}
.success-badge span {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 999px;
    color: #7f1d1d;
    background: rgba(127, 29, 29, 0.1);
}
@media (max-width: 768px) {
    .membership-header h1 {
        font-size: 1.875rem;
    }
    .step-line {
        display: none;
    }
}
"#;
