use log::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::api::client::CmsClient;
use crate::content::journal::{Article, JournalListing};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: Article,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    html! {
        <Link<Route> to={Route::JournalArticle { slug: article.slug.clone() }} classes="article-card">
            <div class="article-card-image">
                <img src={article.image_or_default().to_string()} alt={article.title.clone()} loading="lazy" draggable="false" />
                if !article.category.is_empty() {
                    <span class="article-card-category">{ &article.category }</span>
                }
            </div>
            <div class="article-card-body">
                <h3>{ &article.title }</h3>
                <p>{ &article.excerpt }</p>
                if !article.meta.is_empty() {
                    <span class="article-card-meta">{ &article.meta }</span>
                }
            </div>
        </Link<Route>>
    }
}

/// Journal listing fetched once per mount. Starts out empty, which renders the
/// built-in articles until the CMS answers.
#[hook]
pub fn use_journal_listing() -> UseStateHandle<JournalListing> {
    let listing = use_state(JournalListing::default);
    let is_mounted = use_is_mounted();
    {
        let listing = listing.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match CmsClient::default().fetch_journal().await {
                        Ok(fetched) if is_mounted() => listing.set(fetched),
                        Ok(_) => {}
                        Err(e) => warn!("Journal listing unavailable, using built-in articles: {}", e),
                    }
                });
                || ()
            },
            (),
        );
    }
    listing
}

#[function_component(JournalPreview)]
pub fn journal_preview() -> Html {
    let listing = use_journal_listing();
    let index = &listing.index;

    html! {
        <section id="jurnal" class="journal-section">
            <header class="journal-header">
                <p class="section-label">{ &index.label }</p>
                <div class="journal-title-row">
                    <h2>
                        { &index.title }
                        <em>{ format!(" {}", index.subtitle) }</em>
                    </h2>
                    <Link<Route> to={Route::Journal} classes="journal-all-link">
                        {"VEZI TOATE ARTICOLELE →"}
                    </Link<Route>>
                </div>
                <p class="journal-intro">{ &index.intro }</p>
            </header>
            <div class="article-grid">
                { for listing.preview().into_iter().map(|article| {
                    let key = article.slug.clone();
                    html! { <ArticleCard key={key} article={article} /> }
                }) }
            </div>
            <style>{JOURNAL_CSS}</style>
        </section>
    }
}

pub const JOURNAL_CSS: &str = r#"
.journal-section {
    background: #f6f1e7;
    padding: 7rem 1.5rem 5rem;
}
.journal-header,
.article-grid {
    max-width: 80rem;
    margin: 0 auto;
}
.journal-title-row {
    display: flex;
    flex-wrap: wrap;
    align-items: flex-end;
    justify-content: space-between;
    gap: 1.25rem;
    margin-top: 1.25rem;
}
.journal-title-row h2,
.journal-title-row h1 {
    margin: 0;
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 600;
    line-height: 1.05;
}
.journal-all-link {
    padding: 0.75rem 1.25rem;
    border: 1px solid rgba(185, 28, 28, 0.25);
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.6);
    color: #292524;
    font-size: 0.75rem;
    letter-spacing: 0.22em;
    text-decoration: none;
}
.journal-intro {
    max-width: 56rem;
    margin-top: 1.5rem;
    font-style: italic;
    line-height: 1.7;
    color: #44403c;
}
.article-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 2rem;
    margin-top: 3.5rem;
}
.article-card {
    display: block;
    overflow: hidden;
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 2.25rem;
    background: rgba(255, 255, 255, 0.55);
    color: inherit;
    text-decoration: none;
    transition: transform 0.5s ease-out;
}
.article-card:hover {
    transform: translateY(-4px);
}
.article-card-image {
    position: relative;
}
.article-card-image img {
    width: 100%;
    height: 22rem;
    object-fit: cover;
}
.article-card-category {
    position: absolute;
    top: 1.25rem;
    left: 1.25rem;
    padding: 0.35rem 0.75rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.85);
    font-size: 0.7rem;
    letter-spacing: 0.2em;
}
.article-card-body {
    padding: 1.75rem;
}
.article-card-body h3 {
    margin: 0 0 0.75rem;
    font-size: 1.5rem;
    line-height: 1.2;
}
.article-card-meta {
    font-size: 0.75rem;
    letter-spacing: 0.18em;
    color: #78716c;
}
"#;
