use yew::prelude::*;

use crate::content::main_page::TestimonialsContent;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub content: TestimonialsContent,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let content = &props.content;

    html! {
        <section id="testimoniale" class="testimonials-section">
            <h2>{ &content.title }</h2>
            <div class="testimonials-grid">
                { for content.items.iter().map(|item| html! {
                    <figure class="testimonial">
                        <blockquote>{ format!("„{}”", item.quote) }</blockquote>
                        <figcaption>
                            <span class="testimonial-name">{ &item.name }</span>
                            if !item.role.is_empty() {
                                <span class="testimonial-role">{ &item.role }</span>
                            }
                        </figcaption>
                    </figure>
                }) }
            </div>
            <style>{TESTIMONIALS_CSS}</style>
        </section>
    }
}

const TESTIMONIALS_CSS: &str = r#"
.testimonials-section {
    max-width: 80rem;
    margin: 0 auto;
    padding: 7rem 1.5rem;
}
.testimonials-section h2 {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 600;
}
.testimonials-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 1.5rem;
    margin-top: 3rem;
}
.testimonial {
    margin: 0;
    padding: 2rem;
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 2rem;
    background: rgba(255, 255, 255, 0.6);
}
.testimonial blockquote {
    margin: 0;
    font-size: 1.125rem;
    line-height: 1.7;
    font-style: italic;
}
.testimonial figcaption {
    display: flex;
    flex-direction: column;
    margin-top: 1.5rem;
}
.testimonial-name {
    font-weight: 600;
}
.testimonial-role {
    color: #78716c;
    font-size: 0.8rem;
    letter-spacing: 0.08em;
}
"#;
