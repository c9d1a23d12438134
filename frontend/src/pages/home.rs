use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::client::CmsClient;
use crate::components::hero::Hero;
use crate::components::journal_card::JournalPreview;
use crate::components::manifest::Manifest;
use crate::components::scroll::{scroll_to_location_hash, scroll_to_top};
use crate::components::space::Space;
use crate::components::testimonials::Testimonials;
use crate::content::main_page::MainPage;
use crate::membership::view::Membership;

/// Landing page. Renders the built-in copy right away and swaps in CMS
/// content when `/api/mainpage/` answers.
#[function_component(Home)]
pub fn home() -> Html {
    let page = use_state(MainPage::fallback);
    let is_mounted = use_is_mounted();

    use_mount(|| {
        if web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map_or(true, |hash| hash.len() <= 1)
        {
            scroll_to_top();
        } else {
            scroll_to_location_hash();
        }
    });

    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match CmsClient::default().fetch_main_page().await {
                        Ok(fetched) => {
                            if is_mounted() {
                                info!("Main page content loaded");
                                page.set(fetched);
                            }
                        }
                        Err(e) => warn!("Main page content unavailable, keeping built-in copy: {}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <main class="home">
            <Hero content={page.hero.clone()} />
            <Space space={page.space.clone()} philosophy={page.philosophy.clone()} />
            <Testimonials content={page.testimonials.clone()} />
            <Manifest content={page.manifest.clone()} />
            <JournalPreview />
            <Membership />
        </main>
    }
}
