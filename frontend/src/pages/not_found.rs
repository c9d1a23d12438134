use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <p class="section-label">{"( 404 )"}</p>
            <h1>{"Pagina nu a fost găsită."}</h1>
            <Link<Route> to={Route::Home} classes="journal-all-link">
                {"← ÎNAPOI ACASĂ"}
            </Link<Route>>
        </section>
    }
}
