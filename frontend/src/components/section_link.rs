use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::scroll_to_section;
use crate::Route;

/// In-page sections reachable from the navigation bar and footer.
pub const SECTION_LINKS: [(&str, &str); 4] = [
    ("spatiul", "Spațiul"),
    ("manifest", "Manifest"),
    ("jurnal", "Jurnal"),
    ("testimoniale", "Testimoniale"),
];

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    pub children: Children,
}

/// Link to `/#id`. From another page it routes home first, then scrolls once
/// the section has mounted.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let onclick = {
        let id = props.id.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if route != Some(Route::Home) {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            scroll_to_section(&id);
            on_navigate.emit(());
        })
    };

    html! {
        <a href={format!("/#{}", props.id)} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
