//! View models for the landing page sections fed by `/api/mainpage/`.
//!
//! Every section resolves to fully populated content: whatever the CMS leaves
//! blank is filled from the copy below.

use serde_json::Value;

use crate::config;
use crate::content::text::{or_fallback, split_display_lines, split_lines, split_paragraphs, str_at, two_line_title};

pub const HERO_IMAGE: &str = "/assets/hero.jpeg";
pub const SPACE_IMAGE: &str = "/assets/spatiul1.jpeg";
pub const PHILOSOPHY_IMAGE: &str = "/assets/spatiul2.jpeg";

const SEAT_QUOTE: &str = "Numărul strict limitat de locuri asigură că mentorul este un partener de dialog pentru fiecare copil, nu un supraveghetor.";

fn lines_or(lines: Vec<String>, fallback: &[&str]) -> Vec<String> {
    if lines.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        lines
    }
}

fn media_or(section: Option<&Value>, key: &str, fallback: &str) -> String {
    config::resolve_media_url(&str_at(section, key)).unwrap_or_else(|| fallback.to_string())
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub kicker: String,
    pub title_lines: Vec<String>,
    pub subtitle_lines: Vec<String>,
    pub background: String,
}

impl HeroContent {
    pub fn from_cms(section: Option<&Value>) -> Self {
        Self {
            kicker: or_fallback(str_at(section, "kicker"), "CASA PRESEI LIBERE · BUCUREȘTI"),
            title_lines: lines_or(
                split_display_lines(&str_at(section, "title")),
                &["Arta cere spațiu.", "Și istorie."],
            ),
            subtitle_lines: lines_or(
                split_display_lines(&str_at(section, "subtitle")),
                &[
                    "O enclavă de creație vizuală, unde copiii gândesc liber,",
                    "iar spațiul devine mentor.",
                ],
            ),
            background: media_or(section, "bg_image", HERO_IMAGE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub sublabel: String,
}

impl Stat {
    fn new(value: &str, label: &str, sublabel: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            sublabel: sublabel.to_string(),
        }
    }

    fn from_cms(value: &Value) -> Self {
        match value {
            Value::String(s) => Stat::new(s, "", ""),
            other => Self {
                value: value_text(other.get("value")),
                label: value_text(other.get("label")),
                sublabel: value_text(other.get("sublabel")),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpaceContent {
    pub label: String,
    pub title: String,
    pub paragraph_lines: Vec<String>,
    pub seo_blurb_lines: Vec<String>,
    pub hidden_keywords: String,
    pub image: String,
    pub quote: String,
    pub stats: Vec<Stat>,
}

impl SpaceContent {
    pub fn from_cms(section: Option<&Value>) -> Self {
        let stats = match section.and_then(|s| s.get("stats")) {
            Some(Value::Array(stats)) if !stats.is_empty() => stats.iter().map(Stat::from_cms).collect(),
            _ => vec![
                Stat::new("4", "Copii într-o grupă.", "Nu 12, nu 15."),
                Stat::new("100%", "Lumină naturală", "Percepția corectă a culorilor."),
                Stat::new("0", "Zgomot. Presiune.", "Competiție inutilă."),
            ],
        };

        Self {
            label: or_fallback(str_at(section, "label"), "( SPAȚIUL )"),
            title: or_fallback(str_at(section, "title"), "Spațiul"),
            paragraph_lines: lines_or(
                split_lines(&str_at(section, "paragraph")),
                &["Căutați un curs de pictură pentru copii în București unde atenția să nu se împartă la 15?"],
            ),
            seo_blurb_lines: split_lines(&str_at(section, "seo_blurb")),
            hidden_keywords: str_at(section, "hidden_keywords").trim().to_string(),
            image: media_or(section, "image_1", SPACE_IMAGE),
            quote: or_fallback(str_at(section, "quote"), SEAT_QUOTE),
            stats,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhilosophyContent {
    pub label: String,
    pub title_first: String,
    pub title_second: String,
    pub intro: Vec<String>,
    pub first_paragraph: Vec<String>,
    pub second_paragraph: Vec<String>,
    pub cta: String,
    pub image: String,
    pub quote: String,
}

impl PhilosophyContent {
    pub fn from_cms(section: Option<&Value>) -> Self {
        let first = or_fallback(str_at(section, "title_line_1"), "Sanctuar privat.");
        let second = or_fallback(str_at(section, "title_line_2"), "Libertate radicală.");
        let (title_first, title_second) = two_line_title(&first, &second);

        Self {
            label: or_fallback(str_at(section, "label"), "( FILOSOFIA NOASTRĂ )"),
            title_first: or_fallback(title_first, "Sanctuar privat."),
            title_second: or_fallback(title_second, "Libertate radicală."),
            intro: lines_or(
                split_paragraphs(&str_at(section, "intro")),
                &["Răspundem direct celei mai stringente nevoi a părinților: atenția individuală."],
            ),
            first_paragraph: lines_or(
                split_paragraphs(&str_at(section, "paragraph_1")),
                &["Într-un cerc restrâns și securizat, copiii scapă de presiunea notelor și a performanței standardizate. Aici găsesc libertatea radicală de a crea fără frică."],
            ),
            second_paragraph: lines_or(
                split_paragraphs(&str_at(section, "paragraph_2")),
                &["Lucrăm cu materiale profesionale și spațiu vital imens pentru ca cei mici să își testeze limitele creativității într-un mediu sigur."],
            ),
            cta: or_fallback(str_at(section, "cta_text"), "SOLICITĂ O INVITAȚIE"),
            image: media_or(section, "image_2", PHILOSOPHY_IMAGE),
            quote: or_fallback(str_at(section, "quote"), SEAT_QUOTE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ManifestContent {
    pub label: String,
    pub title_lines: Vec<String>,
    pub text_lines: Vec<String>,
    pub cards: Vec<Card>,
}

pub const MAX_MANIFEST_CARDS: usize = 3;

fn fallback_cards() -> Vec<Card> {
    vec![
        Card {
            title: "Lumina naturală".into(),
            text: "Arta nu se face sub neone și părinții caută un mediu de învățare sănătos, departe de lumina artificială a ecranelor. Spațiul nostru din Casa Presei oferă o iluminare naturală ideală, vitală pentru percepția corectă a culorilor în artă. Acest aspect tehnic previne oboseala oculară și susține concentrarea pe termen lung pe parcursul activităților educative de weekend.".into(),
        },
        Card {
            title: "Mentoratul".into(),
            text: "La Atelierele Scânteia, direcția educațională este asigurată de Andreea Apăvăloaei, absolventă cu nota 10 a Universitatea Nationala de Arte Bucuresti, cu un portofoliu impresionant consolidat pe parcursul a trei decenii, orizontul ei artistic depășește cu mult șevaletul clasic. Abordând arta ca pe o „meditație activă”, Andreea traduce pentru cursanții noștri o experiență multidisciplinară complexă și formare pedagogică acreditată (Certificare pedagogică DPPD).".into(),
        },
        Card {
            title: "Spațiu să creeze.\nLiniște să se concentreze.".into(),
            text: "Fără zgomot de fond, fără competiție inutilă pentru validarea profesorului. Acest volum aerian, specific arhitecturii monumentale, previne suprastimularea senzorială unde copiii au libertatea de a se mișca".into(),
        },
    ]
}

impl ManifestContent {
    pub fn from_cms(section: Option<&Value>) -> Self {
        let title = or_fallback(str_at(section, "title"), "Accesul este limitat la\n12 membri pe sezon.");
        let text = or_fallback(
            str_at(section, "text"),
            "Căutăm familii care înțeleg că educația estetică este o investiție pe viață.\nNu vindem cursuri. Construim fundații artistice.",
        );

        let cards: Vec<Card> = match section.and_then(|s| s.get("cards")) {
            Some(Value::Array(cards)) => cards
                .iter()
                .map(|c| Card {
                    title: value_text(c.get("title")),
                    text: value_text(c.get("text")),
                })
                .filter(|c| !c.title.is_empty() || !c.text.is_empty())
                .take(MAX_MANIFEST_CARDS)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            label: or_fallback(str_at(section, "label"), "( PROCESUL DE SELECȚIE )"),
            title_lines: split_lines(&title),
            text_lines: split_lines(&text),
            cards: if cards.is_empty() { fallback_cards() } else { cards },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestimonialsContent {
    pub title: String,
    pub items: Vec<Testimonial>,
}

fn testimonial(quote: &str, name: &str, role: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    }
}

fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Într-o lume a dopaminei instantanee, acesta este singurul loc unde fiul meu are răbdarea să lucreze două ore la o singură linie de cărbune.",
            "Ana M.",
            "Partner @ Arhitectură & Design",
        ),
        testimonial(
            "Scara monumentală a Casei Presei îi obligă pe copii să gândească mare. Nu există «drăgălășenii» aici. Există studiu, proporție și seriozitate.",
            "Alexandru S.",
            "Tech Entrepreneur & Collector",
        ),
        testimonial(
            "Am căutat mult timp un loc care să nu fie un «parking de copii». Aici am găsit o comunitate de familii care împărtășesc aceleași valori.",
            "Ioana D.",
            "Medic & Membru Fondator",
        ),
        testimonial(
            "Copiii mei au descoperit că arta nu este despre talent înnăscut, ci despre disciplină și observație atentă. Evoluția lor este incredibilă.",
            "Maria T.",
            "Avocat & Colecționar",
        ),
        testimonial(
            "Spațiul în sine este o lecție de estetică. Fiecare dată când intrăm, copiii simt că fac parte din ceva care transcende simplul «curs de desen».",
            "Cristian P.",
            "Arhitect & Fondator Studio",
        ),
    ]
}

impl TestimonialsContent {
    pub fn from_cms(section: Option<&Value>) -> Self {
        let items: Vec<Testimonial> = match section.and_then(|s| s.get("items")) {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| item.is_object())
                .map(|item| Testimonial {
                    quote: value_text(item.get("quote")),
                    name: value_text(item.get("name")),
                    role: value_text(item.get("role")),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            title: or_fallback(str_at(section, "title"), "Vocile Comunității"),
            items: if items.is_empty() { fallback_testimonials() } else { items },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MainPage {
    pub hero: HeroContent,
    pub space: SpaceContent,
    pub philosophy: PhilosophyContent,
    pub manifest: ManifestContent,
    pub testimonials: TestimonialsContent,
}

impl Default for MainPage {
    fn default() -> Self {
        Self::fallback()
    }
}

impl MainPage {
    /// Content shown while the CMS is loading or unreachable.
    pub fn fallback() -> Self {
        Self::from_json(&Value::Null)
    }

    pub fn from_json(body: &Value) -> Self {
        let section = |key: &str| body.get(key).filter(|v| v.is_object());
        Self {
            hero: HeroContent::from_cms(section("hero")),
            space: SpaceContent::from_cms(section("spatiul")),
            philosophy: PhilosophyContent::from_cms(section("filosofie")),
            manifest: ManifestContent::from_cms(section("manifest")),
            testimonials: TestimonialsContent::from_cms(section("testimoniale")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn fallback_page_is_fully_populated() {
        let page = MainPage::fallback();
        assert_eq!(page.hero.title_lines, vec!["Arta cere spațiu.", "Și istorie."]);
        assert_eq!(page.hero.background, HERO_IMAGE);
        assert_eq!(page.space.stats.len(), 3);
        assert_eq!(page.philosophy.title_first, "Sanctuar privat.");
        assert_eq!(page.philosophy.title_second, "Libertate radicală.");
        assert_eq!(page.manifest.title_lines, vec!["Accesul este limitat la", "12 membri pe sezon."]);
        assert_eq!(page.manifest.cards.len(), 3);
        assert_eq!(page.testimonials.items.len(), 5);
        assert_eq!(page.testimonials.title, "Vocile Comunității");
    }

    #[test]
    fn hero_prefers_cms_copy() {
        let body = json!({
            "hero": {
                "kicker": "  ATELIER  ",
                "title": "Lumină. Liniște.",
                "subtitle": "",
                "bg_image": "https://cdn.example/hero.webp"
            }
        });
        let hero = MainPage::from_json(&body).hero;
        assert_eq!(hero.kicker, "ATELIER");
        assert_eq!(hero.title_lines, vec!["Lumină.", "Liniște."]);
        assert_eq!(hero.subtitle_lines.len(), 2);
        assert_eq!(hero.background, "https://cdn.example/hero.webp");
    }

    #[test]
    fn space_stats_accept_strings_and_objects() {
        let body = json!({
            "spatiul": { "stats": ["12", { "value": 100, "label": " Lumină ", "sublabel": null }] }
        });
        let space = MainPage::from_json(&body).space;
        assert_eq!(
            space.stats,
            vec![Stat::new("12", "", ""), Stat::new("100", "Lumină", "")]
        );
        assert_eq!(space.title, "Spațiul");
    }

    #[test]
    fn philosophy_paragraphs_join_hard_wraps() {
        let body = json!({
            "filosofie": {
                "title_line_1": "Sanctuar privat. Libertate radicală.",
                "title_line_2": "Libertate radicală.",
                "intro": "Atenție\nindividuală.\n\nFără grabă."
            }
        });
        let philosophy = MainPage::from_json(&body).philosophy;
        assert_eq!(philosophy.title_first, "Sanctuar privat.");
        assert_eq!(philosophy.title_second, "Libertate radicală.");
        assert_eq!(philosophy.intro, vec!["Atenție individuală.", "Fără grabă."]);
        assert_eq!(philosophy.cta, "SOLICITĂ O INVITAȚIE");
    }

    #[test]
    fn manifest_keeps_at_most_three_non_empty_cards() {
        let body = json!({
            "manifest": {
                "label": "",
                "cards": [
                    { "title": "A", "text": "a" },
                    { "title": " ", "text": "" },
                    { "title": "B" },
                    { "text": "c" },
                    { "title": "D", "text": "d" }
                ]
            }
        });
        let manifest = MainPage::from_json(&body).manifest;
        assert_eq!(manifest.label, "( PROCESUL DE SELECȚIE )");
        let titles: Vec<&str> = manifest.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", ""]);
    }

    #[test]
    fn empty_testimonials_fall_back() {
        let body = json!({ "testimoniale": { "title": "Părinți", "items": [] } });
        let testimonials = MainPage::from_json(&body).testimonials;
        assert_eq!(testimonials.title, "Părinți");
        assert_eq!(testimonials.items, fallback_testimonials());

        let body = json!({ "testimoniale": { "items": [{ "quote": "Minunat", "name": "Dan", "role": "Tată" }] } });
        assert_eq!(
            MainPage::from_json(&body).testimonials.items,
            vec![testimonial("Minunat", "Dan", "Tată")]
        );
    }
}
