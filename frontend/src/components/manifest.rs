use yew::prelude::*;

use crate::components::markup::line_breaks;
use crate::content::main_page::ManifestContent;
use crate::content::text::split_lines;

#[derive(Properties, PartialEq)]
pub struct ManifestProps {
    pub content: ManifestContent,
}

#[function_component(Manifest)]
pub fn manifest(props: &ManifestProps) -> Html {
    let content = &props.content;

    html! {
        <section id="manifest" class="manifest-section">
            <p class="section-label">{ &content.label }</p>
            <h2>{ line_breaks(&content.title_lines) }</h2>
            <p class="manifest-text">{ line_breaks(&content.text_lines) }</p>
            <div class="manifest-cards">
                { for content.cards.iter().map(|card| html! {
                    <article class="manifest-card">
                        <h3>{ line_breaks(&split_lines(&card.title)) }</h3>
                        <p>{ &card.text }</p>
                    </article>
                }) }
            </div>
            <style>{MANIFEST_CSS}</style>
        </section>
    }
}

const MANIFEST_CSS: &str = r#"
.manifest-section {
    background: #1c1917;
    color: #f5f5f4;
    padding: 7rem 1.5rem;
    text-align: center;
}
.manifest-section h2 {
    margin: 1rem auto 1.5rem;
    max-width: 56rem;
    font-size: clamp(2.25rem, 5vw, 4rem);
    font-weight: 600;
    line-height: 1.05;
}
.manifest-text {
    max-width: 42rem;
    margin: 0 auto;
    line-height: 1.7;
    color: #d6d3d1;
}
.manifest-cards {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 1.5rem;
    max-width: 80rem;
    margin: 4rem auto 0;
    text-align: left;
}
.manifest-card {
    padding: 2rem;
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 2rem;
    background: rgba(255, 255, 255, 0.04);
}
.manifest-card h3 {
    margin: 0 0 1rem;
    font-size: 1.5rem;
    font-weight: 600;
}
.manifest-card p {
    line-height: 1.7;
    color: #d6d3d1;
}
"#;
