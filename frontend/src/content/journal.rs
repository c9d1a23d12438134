use serde_json::Value;

use crate::config;

pub const DEFAULT_ARTICLE_IMAGE: &str = "/assets/jurnal1.jpeg";
pub const PREVIEW_ARTICLES: usize = 3;
pub const ARCHIVE_LABEL: &str = "( ARHIVA SCÂNTEIA )";

fn string_field(value: &Value, key: &str) -> String {
    value.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn image_field(value: &Value) -> Option<String> {
    value
        .get("image")
        .and_then(Value::as_str)
        .and_then(config::resolve_media_url)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArticleBody {
    Html(String),
    Paragraphs(Vec<String>),
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub slug: String,
    pub category: String,
    pub title: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub meta: String,
    pub body: ArticleBody,
}

impl Article {
    pub fn image_or_default(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_ARTICLE_IMAGE)
    }

    pub fn href(&self) -> String {
        format!("/jurnal/{}", self.slug)
    }

    /// List entries without a slug or title cannot be linked and are skipped.
    fn from_list_item(item: &Value) -> Option<Self> {
        let article = Self {
            slug: string_field(item, "slug"),
            category: string_field(item, "category"),
            title: string_field(item, "title"),
            image: image_field(item),
            excerpt: string_field(item, "excerpt"),
            meta: string_field(item, "meta"),
            body: ArticleBody::Empty,
        };
        (!article.slug.is_empty() && !article.title.is_empty()).then_some(article)
    }

    /// Reads `{detail: {...}}`. Returns `None` when the envelope has no detail.
    pub fn from_detail_json(body: &Value, slug: &str) -> Option<Self> {
        let detail = body.get("detail").filter(|d| d.is_object())?;
        let html = string_field(detail, "body_html");
        Some(Self {
            slug: detail
                .get("slug")
                .and_then(Value::as_str)
                .unwrap_or(slug)
                .to_string(),
            category: string_field(detail, "category"),
            title: string_field(detail, "title"),
            image: image_field(detail),
            excerpt: string_field(detail, "excerpt"),
            meta: string_field(detail, "meta"),
            body: if html.trim().is_empty() {
                ArticleBody::Empty
            } else {
                ArticleBody::Html(html)
            },
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JournalIndex {
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub intro: String,
}

impl Default for JournalIndex {
    fn default() -> Self {
        Self {
            label: ARCHIVE_LABEL.to_string(),
            title: "Jurnalul atelierului".to_string(),
            subtitle: "— note despre artă".to_string(),
            intro: "- Gânduri scurte, blânde și practice despre procesul creativ al copiilor: materiale, spațiu, curaj și bucuria de a încerca.".to_string(),
        }
    }
}

impl JournalIndex {
    fn from_cms(index: &Value) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| index.get(key).and_then(Value::as_str).map(str::to_string).unwrap_or(fallback);
        Self {
            label: pick("label", defaults.label),
            title: pick("title", defaults.title),
            subtitle: pick("subtitle", defaults.subtitle),
            intro: pick("intro", defaults.intro),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JournalListing {
    pub index: JournalIndex,
    pub articles: Vec<Article>,
}

impl JournalListing {
    pub fn from_json(body: &Value) -> Self {
        let index = body
            .get("index")
            .filter(|i| i.is_object())
            .map(JournalIndex::from_cms)
            .unwrap_or_default();
        let articles = body
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Article::from_list_item).collect())
            .unwrap_or_default();
        Self { index, articles }
    }

    /// CMS articles, or the built-in set when the CMS returned none.
    pub fn articles_or_fallback(&self) -> Vec<Article> {
        if self.articles.is_empty() {
            fallback_articles()
        } else {
            self.articles.clone()
        }
    }

    pub fn preview(&self) -> Vec<Article> {
        let mut articles = self.articles_or_fallback();
        articles.truncate(PREVIEW_ARTICLES);
        articles
    }
}

fn fallback(
    slug: &str,
    category: &str,
    title: &str,
    image: &str,
    excerpt: &str,
    body: [&str; 3],
    meta: &str,
) -> Article {
    Article {
        slug: slug.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        image: Some(image.to_string()),
        excerpt: excerpt.to_string(),
        meta: meta.to_string(),
        body: ArticleBody::Paragraphs(body.iter().map(|p| p.to_string()).collect()),
    }
}

pub fn fallback_articles() -> Vec<Article> {
    vec![
        fallback(
            "greseala-cel-mai-bun-profesor",
            "FILOSOFIE",
            "De ce „greșeala” este cel mai bun profesor de artă",
            "/assets/jurnal1.jpeg",
            "În atelier, greșeala nu e eșec. E material brut pentru observație, curaj și limbaj vizual.",
            [
                "În educația estetică, greșeala e un instrument – nu o rușine. Când copilul înțelege că o linie „ratată” poate deveni o idee nouă, se naște libertatea de a explora.",
                "În loc de corecturi rapide, lucrăm cu întrebări: Ce se întâmplă dacă? Cum se schimbă compoziția dacă mutăm centrul de greutate? Ce poveste spune pata?",
                "Așa apar ritmul, intenția și disciplina blândă: nu pentru note, ci pentru un limbaj personal care crește în timp.",
            ],
            "6 min · Atelier",
        ),
        fallback(
            "materialele-conteaza",
            "MATERIALE",
            "Materialele contează: de la tempera de supermarket la pigment profesionist",
            "/assets/jurnal2.jpeg",
            "Diferența dintre „merge” și „se simte bine” vine adesea din material: densitate, granulație, lumină.",
            [
                "Materialele nu sunt un moft. Sunt un profesor tăcut. Un pigment bun îți arată imediat ce înseamnă transparență, stratificare și răbdare.",
                "La început, scopul nu e luxul, ci consistența: să poți repeta un gest și să înveți din el. Când materialul e imprevizibil, copilul învață frustrare – nu artă.",
                "Alegem instrumente care răsplătesc atenția: hârtie cu textură, pensule care țin apă, culori care nu „mor” pe foaie.",
            ],
            "8 min · Practică",
        ),
        fallback(
            "spatiul-ca-mentor",
            "SPAȚIU",
            "Spațiul ca mentor: cum arhitectura influențează creativitatea",
            "/assets/jurnal3.jpeg",
            "Lumina, liniștea și proporțiile nu sunt decor. Sunt condiții care modelează atenția.",
            [
                "Un spațiu coerent invită la lucru profund. Lumina bună reduce graba. Ordinea reduce anxietatea. Aerul și distanțele dau curaj.",
                "Când copilul intră într-un loc care respectă actul artistic, își schimbă postura: devine mai atent, mai prezent.",
                "Într-un atelier, arhitectura devine un cadru moral: aici avem voie să încercăm, să repetăm și să tăcem.",
            ],
            "7 min · Observație",
        ),
    ]
}

pub fn fallback_article(slug: &str) -> Option<Article> {
    fallback_articles().into_iter().find(|a| a.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn listing_drops_items_without_slug_or_title() {
        let body = json!({
            "items": [
                { "slug": "lumina", "title": "Lumina", "category": "SPAȚIU", "image": "" },
                { "slug": "", "title": "Fără slug" },
                { "slug": "fara-titlu" },
                "not an object",
                { "slug": "culoare", "title": "Culoare", "image": "/media/c.jpg", "meta": 5 }
            ]
        });
        let listing = JournalListing::from_json(&body);
        let slugs: Vec<&str> = listing.articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["lumina", "culoare"]);
        assert_eq!(listing.articles[0].image, None);
        assert_eq!(listing.articles[0].image_or_default(), DEFAULT_ARTICLE_IMAGE);
        assert_eq!(listing.articles[1].meta, "");
        assert_eq!(listing.index, JournalIndex::default());
    }

    #[test]
    fn index_fields_fall_back_individually() {
        let body = json!({ "index": { "title": "Note", "subtitle": 3 }, "items": [] });
        let index = JournalListing::from_json(&body).index;
        assert_eq!(index.title, "Note");
        assert_eq!(index.subtitle, "— note despre artă");
        assert_eq!(index.label, ARCHIVE_LABEL);
    }

    #[test]
    fn empty_listing_uses_fallback_articles() {
        let listing = JournalListing::from_json(&json!(null));
        assert_eq!(listing.articles_or_fallback().len(), 3);
        assert_eq!(listing.preview()[0].slug, "greseala-cel-mai-bun-profesor");
    }

    #[test]
    fn preview_is_capped() {
        let items: Vec<Value> = (0..5)
            .map(|i| json!({ "slug": format!("a-{}", i), "title": format!("A {}", i) }))
            .collect();
        let listing = JournalListing::from_json(&json!({ "items": items }));
        assert_eq!(listing.articles_or_fallback().len(), 5);
        let preview: Vec<String> = listing.preview().into_iter().map(|a| a.slug).collect();
        assert_eq!(preview, vec!["a-0", "a-1", "a-2"]);
    }

    #[test]
    fn detail_envelope_is_required() {
        assert_eq!(Article::from_detail_json(&json!({ "slug": "x" }), "x"), None);
        assert_eq!(Article::from_detail_json(&json!({ "detail": null }), "x"), None);
    }

    #[test]
    fn detail_keeps_html_and_defaults_slug() {
        let body = json!({
            "detail": { "title": "Lumina", "body_html": "<p>Text</p>", "image": "https://cdn.example/l.jpg" }
        });
        let article = Article::from_detail_json(&body, "lumina").unwrap();
        assert_eq!(article.slug, "lumina");
        assert_eq!(article.body, ArticleBody::Html("<p>Text</p>".into()));
        assert_eq!(article.image_or_default(), "https://cdn.example/l.jpg");
        assert_eq!(article.href(), "/jurnal/lumina");

        let blank = Article::from_detail_json(&json!({ "detail": { "body_html": "  " } }), "x").unwrap();
        assert_eq!(blank.body, ArticleBody::Empty);
    }

    #[test]
    fn fallback_article_lookup() {
        assert!(fallback_article("spatiul-ca-mentor").is_some());
        assert!(fallback_article("necunoscut").is_none());
    }
}
