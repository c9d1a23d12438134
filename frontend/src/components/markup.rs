use log::warn;
use yew::prelude::*;

/// Renders lines separated by `<br/>`.
pub fn line_breaks(lines: &[String]) -> Html {
    html! {
        { for lines.iter().enumerate().map(|(i, line)| html! {
            <>
                if i > 0 { <br/> }
                { line.clone() }
            </>
        }) }
    }
}

/// Wraps trusted CMS markup in a `<div>` so it can be mounted as-is.
pub fn raw_html(class: &'static str, markup: &str) -> Html {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return html! {};
    };
    match document.create_element("div") {
        Ok(element) => {
            element.set_class_name(class);
            element.set_inner_html(markup);
            Html::VRef(element.into())
        }
        Err(e) => {
            warn!("Could not create article body element: {:?}", e);
            html! {}
        }
    }
}
