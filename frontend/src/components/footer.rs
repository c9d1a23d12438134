use chrono::{Datelike, Local};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::client::CmsClient;
use crate::api::traits::NewsletterApi;
use crate::components::section_link::{SectionLink, SECTION_LINKS};
use crate::newsletter::NewsletterForm;

pub const STUDIO_ADDRESS: &str = "Piața Presei Libere Nr. 1, Sector 1, București";
const MAP_EMBED_URL: &str = "https://www.google.com/maps?q=44.48,26.0722&z=15&output=embed";

pub fn copyright_line(year: i32) -> String {
    format!("© {} Ateliere la Scânteia. Toate drepturile rezervate.", year)
}

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let form = use_state(NewsletterForm::default);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };

    let on_company = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.company = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let Some(email) = next.begin_subscribe() else {
                form.set(next);
                return;
            };
            form.set(next.clone());
            let form = form.clone();
            spawn_local(async move {
                let result = CmsClient::default().subscribe(&email).await;
                next.finish_subscribe(result);
                form.set(next);
            });
        })
    };

    html! {
        <form class="newsletter-form" onsubmit={on_submit} novalidate={true}>
            <input
                type="text"
                name="company"
                class="newsletter-honeypot"
                value={form.company.clone()}
                oninput={on_company}
                autocomplete="off"
                tabindex="-1"
                aria-hidden="true"
            />
            <label for="newsletter-email" class="visually-hidden">{"Email"}</label>
            <div class="newsletter-row">
                <input
                    id="newsletter-email"
                    type="email"
                    inputmode="email"
                    autocomplete="email"
                    placeholder="Email-ul tău"
                    value={form.email.clone()}
                    oninput={on_email}
                />
                <button type="submit" disabled={form.is_loading()} aria-label="Abonează-te la newsletter">
                    { if form.is_loading() { "..." } else { "SUBSCRIBE" } }
                </button>
            </div>
            {
                match form.message() {
                    Some(message) => html! {
                        <p class={form.status().css_class()}>{ message }</p>
                    },
                    None => html! {
                        <p class="newsletter-message">{"Fără spam. Te poți dezabona oricând."}</p>
                    },
                }
            }
        </form>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <img src="/assets/Ateliere_la_Scanteia.svg" alt="Ateliere la Scânteia logo" class="footer-logo" />
                    <p>{"Un spațiu dedicat formării artistice și dezvoltării creative a copiilor. Selecție atentă, comunitate restrânsă, progres real."}</p>
                </div>

                <div>
                    <h4>{"Navigare"}</h4>
                    <ul>
                        { for SECTION_LINKS.iter().map(|(id, label)| html! {
                            <li><SectionLink id={*id} class="footer-link">{ *label }</SectionLink></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-newsletter">
                    <h4>{"Newsletter"}</h4>
                    <p>{"Fii la curent cu noile sesiuni, locurile disponibile și inițiativele noastre educaționale."}</p>
                    <Newsletter />
                </div>

                <div>
                    <h4>{"Locație"}</h4>
                    <p>{ STUDIO_ADDRESS }</p>
                    <iframe
                        class="footer-map"
                        src={MAP_EMBED_URL}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        title="Harta Ateliere la Scânteia"
                    ></iframe>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ copyright_line(year) }</p>
            </div>
            <style>{FOOTER_CSS}</style>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
.site-footer {
    background: #fafaf9;
    border-top: 1px solid rgba(0, 0, 0, 0.06);
    padding: 5rem 1.5rem 2rem;
    color: #44403c;
}
.footer-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 3rem;
    max-width: 80rem;
    margin: 0 auto;
}
.footer-newsletter {
    grid-column: span 2;
}
.footer-logo {
    height: 3rem;
}
.site-footer h4 {
    margin: 0 0 1rem;
    font-size: 0.75rem;
    letter-spacing: 0.22em;
    text-transform: uppercase;
    color: #1c1917;
}
.site-footer ul {
    list-style: none;
    padding: 0;
    margin: 0;
}
.footer-link {
    display: inline-block;
    padding: 0.25rem 0;
    color: inherit;
    text-decoration: none;
}
.footer-link:hover {
    color: #b91c1c;
}
.newsletter-honeypot {
    position: absolute;
    left: -9999px;
    width: 1px;
    height: 1px;
    opacity: 0;
}
.newsletter-row {
    display: flex;
    gap: 0.5rem;
}
.newsletter-row input {
    flex: 1;
    padding: 0.75rem 1rem;
    border: 1px solid rgba(0, 0, 0, 0.12);
    border-radius: 0.75rem;
}
.newsletter-row button {
    padding: 0.75rem 1.25rem;
    border: none;
    border-radius: 0.75rem;
    background: #1c1917;
    color: #fff;
    letter-spacing: 0.18em;
    cursor: pointer;
}
.newsletter-row button:disabled {
    opacity: 0.6;
    cursor: default;
}
.newsletter-message {
    margin-top: 0.75rem;
    font-size: 0.8rem;
    color: #78716c;
}
.newsletter-message.success {
    color: #047857;
}
.newsletter-message.error {
    color: #b91c1c;
}
.footer-map {
    width: 100%;
    height: 10rem;
    border: 0;
    border-radius: 1rem;
    filter: grayscale(1);
}
.footer-bottom {
    max-width: 80rem;
    margin: 3rem auto 0;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(0, 0, 0, 0.06);
    font-size: 0.8rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_the_given_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Ateliere la Scânteia. Toate drepturile rezervate."
        );
    }
}
