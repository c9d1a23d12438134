use yew::prelude::*;

use crate::components::markup::line_breaks;
use crate::components::scroll::scroll_to_section;
use crate::content::main_page::HeroContent;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = &props.content;
    let to_membership = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("membrie");
    });

    html! {
        <section id="acasa" class="hero" style={format!("background-image: url('{}');", content.background)}>
            <div class="hero-shade"></div>
            <div class="hero-content">
                <p class="hero-kicker">{ &content.kicker }</p>
                <h1>{ line_breaks(&content.title_lines) }</h1>
                <p class="hero-subtitle">{ line_breaks(&content.subtitle_lines) }</p>
                <a href="/#membrie" class="hero-cta" onclick={to_membership}>{"SOLICITĂ O INVITAȚIE"}</a>
            </div>
            <style>{HERO_CSS}</style>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: flex-end;
    background-size: cover;
    background-position: center;
    color: #fff;
}
.hero-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(180deg, rgba(0, 0, 0, 0.15), rgba(0, 0, 0, 0.65));
}
.hero-content {
    position: relative;
    max-width: 80rem;
    width: 100%;
    margin: 0 auto;
    padding: 0 1.5rem 6rem;
}
.hero-kicker {
    font-size: 0.75rem;
    letter-spacing: 0.3em;
    opacity: 0.85;
}
.hero h1 {
    margin: 1.25rem 0 0;
    font-size: clamp(2.75rem, 7vw, 6rem);
    font-weight: 600;
    line-height: 1.02;
}
.hero-subtitle {
    margin-top: 1.5rem;
    max-width: 40rem;
    font-size: 1.125rem;
    line-height: 1.6;
    opacity: 0.9;
}
.hero-cta {
    display: inline-block;
    margin-top: 2.5rem;
    padding: 1rem 1.75rem;
    border: 1px solid rgba(255, 255, 255, 0.6);
    border-radius: 1rem;
    color: #fff;
    font-size: 0.75rem;
    letter-spacing: 0.22em;
    text-decoration: none;
}
.hero-cta:hover {
    background: rgba(255, 255, 255, 0.12);
}
"#;
