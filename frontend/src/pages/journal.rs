use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::api::client::CmsClient;
use crate::api::error::CmsError;
use crate::components::journal_card::{use_journal_listing, ArticleCard, JOURNAL_CSS};
use crate::components::markup::raw_html;
use crate::components::scroll::scroll_to_top;
use crate::components::section_link::SectionLink;
use crate::content::journal::{fallback_article, Article, ArticleBody, ARCHIVE_LABEL};
use crate::Route;

pub const ARTICLE_NOT_FOUND: &str = "Articolul nu a fost găsit.";
pub const ARTICLE_UNAVAILABLE: &str = "Articolul nu poate fi încărcat acum.";

#[function_component(JournalAll)]
pub fn journal_all() -> Html {
    let listing = use_journal_listing();
    use_mount(scroll_to_top);

    html! {
        <section class="journal-section journal-page">
            <header class="journal-header">
                <p class="section-label">{ &listing.index.label }</p>
                <div class="journal-title-row">
                    <div>
                        <h1>{"Toate articolele"}</h1>
                        <p class="journal-intro">{"- Aici găsești toate articolele publicate."}</p>
                    </div>
                    <SectionLink id="jurnal" class="journal-all-link">{"← ÎNAPOI ACASĂ"}</SectionLink>
                </div>
            </header>
            <div class="article-grid">
                { for listing.articles_or_fallback().into_iter().map(|article| {
                    let key = article.slug.clone();
                    html! { <ArticleCard key={key} article={article} /> }
                }) }
            </div>
            <style>{JOURNAL_CSS}</style>
        </section>
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ArticleState {
    Loading,
    Loaded(Article),
    NotFound,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct JournalArticleProps {
    pub slug: String,
}

/// Single article. Built-in articles render immediately and are replaced by
/// the CMS version when one exists.
#[function_component(JournalArticle)]
pub fn journal_article(props: &JournalArticleProps) -> Html {
    let state = use_state(|| ArticleState::Loading);
    let is_mounted = use_is_mounted();
    let current_slug = use_mut_ref(String::new);
    *current_slug.borrow_mut() = props.slug.clone();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |slug: &String| {
                scroll_to_top();
                state.set(ArticleState::Loading);
                let slug = slug.clone();
                spawn_local(async move {
                    let result = CmsClient::default().fetch_article(&slug).await;
                    if !is_mounted() || *current_slug.borrow() != slug {
                        return;
                    }
                    match result {
                        Ok(article) => {
                            info!("Loaded journal article {}", slug);
                            state.set(ArticleState::Loaded(article));
                        }
                        Err(CmsError::NotFound) => state.set(ArticleState::NotFound),
                        Err(e) => {
                            warn!("Journal article {} unavailable: {}", slug, e);
                            state.set(ArticleState::Failed);
                        }
                    }
                });
                || ()
            },
            props.slug.clone(),
        );
    }

    let article = match &*state {
        ArticleState::Loaded(article) => Some(article.clone()),
        _ => fallback_article(&props.slug),
    };

    match (article, &*state) {
        (Some(article), _) => view_article(&article),
        (None, ArticleState::NotFound) => view_missing(ARTICLE_NOT_FOUND),
        (None, ArticleState::Failed) => view_missing(ARTICLE_UNAVAILABLE),
        (None, _) => html! {},
    }
}

fn view_missing(message: &'static str) -> Html {
    html! {
        <section class="journal-section journal-page">
            <div class="journal-header">
                <h1>{ message }</h1>
                <SectionLink id="jurnal" class="journal-all-link">{"← ÎNAPOI LA JURNAL"}</SectionLink>
            </div>
            <style>{JOURNAL_CSS}</style>
            <style>{ARTICLE_CSS}</style>
        </section>
    }
}

fn view_body(body: &ArticleBody) -> Html {
    match body {
        ArticleBody::Html(markup) => raw_html("article-body", markup),
        ArticleBody::Paragraphs(paragraphs) => html! {
            <div class="article-body">
                { for paragraphs.iter().enumerate().map(|(i, p)| html! {
                    <p class={classes!((i == 0).then_some("dropcap"))}>{ p }</p>
                }) }
            </div>
        },
        ArticleBody::Empty => html! { <div class="article-body"></div> },
    }
}

fn view_article(article: &Article) -> Html {
    let kicker = match (article.category.is_empty(), article.meta.is_empty()) {
        (false, false) => format!("{} · {}", article.category, article.meta),
        (false, true) => article.category.clone(),
        (true, false) => article.meta.clone(),
        (true, true) => String::new(),
    };

    html! {
        <article class="journal-section journal-page">
            <div class="journal-header">
                <div class="journal-title-row">
                    <div>
                        <p class="section-label">{ ARCHIVE_LABEL }</p>
                        <p class="article-kicker">{ kicker }</p>
                    </div>
                    <div class="article-nav">
                        <Link<Route> to={Route::Journal} classes="journal-all-link">
                            {"← VEZI TOATE ARTICOLELE"}
                        </Link<Route>>
                        <SectionLink id="jurnal" class="journal-all-link">{"← ÎNAPOI LA JURNAL"}</SectionLink>
                    </div>
                </div>
            </div>

            <header class="article-hero">
                <img src={article.image_or_default().to_string()} alt={article.title.clone()} draggable="false" />
                <div class="article-hero-text">
                    <h1>{ &article.title }</h1>
                    if !article.excerpt.is_empty() {
                        <p>{ format!("- {}", article.excerpt) }</p>
                    }
                </div>
            </header>

            <div class="article-layout">
                <section>
                    { view_body(&article.body) }
                    <span class="article-signature">{"Arhiva Scânteia"}</span>
                </section>
                <aside class="article-aside">
                    <h4>{"Despre articol"}</h4>
                    <p>{"Pentru înscrieri și întrebări, scrie-ne. Îți răspundem rapid cu detalii despre grupe, program și materiale."}</p>
                    <SectionLink id="membrie" class="journal-all-link">{"ÎNSCRIE-TE"}</SectionLink>
                </aside>
            </div>
            <style>{JOURNAL_CSS}</style>
            <style>{ARTICLE_CSS}</style>
        </article>
    }
}

const ARTICLE_CSS: &str = r#"
.journal-page {
    min-height: 70vh;
    padding-top: 9rem;
}
.article-kicker {
    margin-top: 0.5rem;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    color: #78716c;
}
.article-nav {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}
.article-hero {
    position: relative;
    max-width: 80rem;
    margin: 2.5rem auto 0;
    overflow: hidden;
    border-radius: 2.25rem;
}
.article-hero img {
    width: 100%;
    height: 34rem;
    object-fit: cover;
}
.article-hero-text {
    position: absolute;
    inset: auto 0 0 0;
    padding: 2.5rem;
    background: linear-gradient(180deg, transparent, rgba(0, 0, 0, 0.7));
    color: #fff;
}
.article-hero-text h1 {
    margin: 0;
    font-size: clamp(2rem, 4vw, 3.5rem);
    line-height: 1.05;
}
.article-layout {
    display: grid;
    grid-template-columns: minmax(0, 1fr) 18rem;
    gap: 3rem;
    max-width: 80rem;
    margin: 3rem auto 0;
}
@media (max-width: 900px) {
    .article-layout {
        grid-template-columns: 1fr;
    }
}
.article-body {
    max-width: 72ch;
    font-size: 1.125rem;
    line-height: 1.95;
}
.article-body p + p {
    margin-top: 1.5rem;
}
.article-body .dropcap::first-letter,
.article-body > p:first-child::first-letter {
    float: left;
    margin: 0.25rem 0.75rem 0 0;
    font-size: 3rem;
    font-weight: 600;
    line-height: 1;
}
.article-body blockquote {
    margin: 2rem 0;
    padding: 1rem 1.25rem;
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.55);
}
.article-signature {
    display: block;
    margin-top: 2.5rem;
    font-size: 0.75rem;
    letter-spacing: 0.22em;
    color: #78716c;
}
.article-aside {
    align-self: start;
    padding: 1.75rem;
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 1.5rem;
    background: rgba(255, 255, 255, 0.55);
}
"#;
