use yew::prelude::*;

use crate::components::markup::line_breaks;
use crate::components::scroll::scroll_to_section;
use crate::content::main_page::{PhilosophyContent, SpaceContent};

#[derive(Properties, PartialEq)]
pub struct SpaceProps {
    pub space: SpaceContent,
    pub philosophy: PhilosophyContent,
}

/// "Spațiul" and "Filosofia noastră" share one section and one background.
#[function_component(Space)]
pub fn space(props: &SpaceProps) -> Html {
    let space = &props.space;
    let philosophy = &props.philosophy;
    let to_membership = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("membrie");
    });

    html! {
        <section id="spatiul" class="space-section">
            <div class="space-grid">
                <div>
                    <p class="section-label">{ &space.label }</p>
                    <h2>{ &space.title }</h2>
                    <p class="space-paragraph">{ line_breaks(&space.paragraph_lines) }</p>
                    if !space.seo_blurb_lines.is_empty() {
                        <p class="space-blurb">{ line_breaks(&space.seo_blurb_lines) }</p>
                    }
                    if !space.hidden_keywords.is_empty() {
                        <p class="visually-hidden">{ &space.hidden_keywords }</p>
                    }
                    <blockquote class="space-quote">{ &space.quote }</blockquote>
                </div>
                <img class="space-image" src={space.image.clone()} alt={space.title.clone()} loading="lazy" />
            </div>

            <div class="space-stats">
                { for space.stats.iter().map(|stat| html! {
                    <div class="space-stat">
                        <span class="stat-value">{ &stat.value }</span>
                        <span class="stat-label">{ &stat.label }</span>
                        if !stat.sublabel.is_empty() {
                            <span class="stat-sublabel">{ &stat.sublabel }</span>
                        }
                    </div>
                }) }
            </div>

            <div id="filosofie" class="space-grid philosophy">
                <img class="space-image" src={philosophy.image.clone()} alt={philosophy.title_first.clone()} loading="lazy" />
                <div>
                    <p class="section-label">{ &philosophy.label }</p>
                    <h2>
                        { &philosophy.title_first }
                        if !philosophy.title_second.is_empty() {
                            <br/>
                            <em>{ &philosophy.title_second }</em>
                        }
                    </h2>
                    { for philosophy.intro.iter().map(|p| html! { <p class="philosophy-intro">{ p }</p> }) }
                    { for philosophy.first_paragraph.iter().map(|p| html! { <p>{ p }</p> }) }
                    { for philosophy.second_paragraph.iter().map(|p| html! { <p>{ p }</p> }) }
                    <blockquote class="space-quote">{ &philosophy.quote }</blockquote>
                    <a href="/#membrie" class="section-cta" onclick={to_membership}>{ &philosophy.cta }</a>
                </div>
            </div>
            <style>{SPACE_CSS}</style>
        </section>
    }
}

const SPACE_CSS: &str = r#"
.space-section {
    max-width: 80rem;
    margin: 0 auto;
    padding: 7rem 1.5rem;
}
.space-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 3rem;
    align-items: center;
}
.space-grid.philosophy {
    margin-top: 7rem;
}
.space-grid h2 {
    margin: 1rem 0 1.5rem;
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 600;
    line-height: 1.05;
}
.space-paragraph,
.philosophy-intro {
    font-size: 1.25rem;
    line-height: 1.6;
}
.space-blurb {
    color: #57534e;
    line-height: 1.7;
}
.space-quote {
    margin: 2rem 0;
    padding-left: 1.25rem;
    border-left: 2px solid #b91c1c;
    font-style: italic;
    color: #44403c;
}
.space-image {
    width: 100%;
    height: 32rem;
    object-fit: cover;
    border-radius: 2rem;
}
.space-stats {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
    gap: 2rem;
    margin-top: 4rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(0, 0, 0, 0.1);
}
.space-stat {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}
.stat-value {
    font-size: 3rem;
    font-weight: 600;
}
.stat-sublabel {
    color: #78716c;
    font-size: 0.875rem;
}
.section-cta {
    display: inline-block;
    padding: 0.9rem 1.5rem;
    border: 1px solid rgba(185, 28, 28, 0.35);
    border-radius: 1rem;
    color: #1c1917;
    font-size: 0.75rem;
    letter-spacing: 0.22em;
    text-decoration: none;
}
.visually-hidden {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0 0 0 0);
}
"#;
