use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};

mod config;
mod newsletter;
mod api {
    pub mod client;
    pub mod error;
    pub mod traits;
}
mod content {
    pub mod text;
    pub mod main_page;
    pub mod journal;
}
mod membership {
    pub mod form;
    pub mod questions;
    pub mod validation;
    pub mod payload;
    pub mod wizard;
    pub mod view;
}
mod components {
    pub mod markup;
    pub mod scroll;
    pub mod section_link;
    pub mod hero;
    pub mod space;
    pub mod manifest;
    pub mod testimonials;
    pub mod journal_card;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod journal;
    pub mod not_found;
}

use components::{
    footer::Footer,
    scroll::scroll_to_top,
    section_link::{SectionLink, SECTION_LINKS},
};
use pages::{
    home::Home,
    journal::{JournalAll, JournalArticle},
    not_found::NotFound,
};

/// Scroll depth after which the navigation bar turns opaque.
const NAV_OPAQUE_AFTER: f64 = 8.0;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/jurnal")]
    Journal,
    #[at("/jurnal/:slug")]
    JournalArticle { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Journal => {
            info!("Rendering Journal page");
            html! { <JournalAll /> }
        },
        Route::JournalArticle { slug } => {
            info!("Rendering Journal article {}", slug);
            html! { <JournalArticle slug={slug} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    // The logo always lands at the top of the home page.
    let go_home = {
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if route != Some(Route::Home) {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            scroll_to_top();
            close_menu.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (scroll_y > NAV_OPAQUE_AFTER).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={go_home}>
                    <img src="/assets/Ateliere_la_Scanteia.svg" alt="Ateliere la Scânteia" />
                </a>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Închide meniul" } else { "Deschide meniul" }}
                    aria-expanded={(*menu_open).to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTION_LINKS.iter().map(|(id, label)| html! {
                        <SectionLink id={*id} class="nav-link" on_navigate={close_menu.clone()}>
                            { *label }
                        </SectionLink>
                    }) }
                    <SectionLink id="membrie" class="nav-cta" on_navigate={close_menu.clone()}>
                        {"Solicită acces →"}
                    </SectionLink>
                </div>
            </div>
            <style>{NAV_CSS}</style>
        </nav>
    }
}

const NAV_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: "Inter", system-ui, sans-serif;
    color: #1c1917;
    background: #fff;
    overflow-x: hidden;
}
.section-label {
    font-size: 0.75rem;
    letter-spacing: 0.28em;
    color: #b91c1c;
}
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}
.top-nav.scrolled {
    background: rgba(255, 255, 255, 0.92);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
    backdrop-filter: blur(12px);
}
.nav-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 1.5rem;
}
.nav-logo img {
    height: 2.75rem;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 2rem;
}
.nav-link {
    font-size: 0.8rem;
    letter-spacing: 0.18em;
    color: #44403c;
    text-decoration: none;
}
.nav-link:hover {
    color: #1c1917;
}
.nav-cta {
    padding: 0.6rem 1.25rem;
    border: 1px solid rgba(220, 38, 38, 0.8);
    border-radius: 999px;
    font-size: 0.8rem;
    letter-spacing: 0.18em;
    color: #292524;
    text-decoration: none;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    padding: 0.5rem;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 22px;
    height: 2px;
    background: #1c1917;
}
@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        position: fixed;
        inset: 4.5rem 0 0 0;
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        gap: 1.5rem;
        padding: 2rem 1.5rem;
        background: #fff;
    }
}
"#;


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
