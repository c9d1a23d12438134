//! Helpers for turning CMS textarea content into display lines.

use serde_json::Value;

/// String value of `key`, numbers rendered as text, anything else empty.
pub fn str_at(section: Option<&Value>, key: &str) -> String {
    match section.and_then(|s| s.get(key)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Trimmed CMS value, or the fallback when the CMS left it blank.
pub fn or_fallback(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collapses runs of whitespace into single spaces.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn starts_sentence(c: char) -> bool {
    c.is_uppercase() || matches!(c, 'Ă' | 'Â' | 'Î' | 'Ș' | 'Ț')
}

/// Splits after `.`, `!` or `?` when the next non-space character is uppercase.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        current.push(c);
        i += 1;

        if matches!(c, '.' | '!' | '?') {
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && starts_sentence(chars[j]) {
                sentences.push(current.trim().to_string());
                current.clear();
                i = j;
            }
        }
    }

    if !current.trim().is_empty() {
        sentences.push(current.trim().to_string());
    }
    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Newline separated lines, or sentences when the text is a single line.
pub fn split_display_lines(text: &str) -> Vec<String> {
    let by_newline = split_lines(text);
    if by_newline.len() > 1 {
        return by_newline;
    }
    let by_sentence = split_sentences(text.trim());
    if by_sentence.len() > 1 {
        by_sentence
    } else {
        by_newline
    }
}

/// Paragraphs separated by blank lines; hard wraps inside a paragraph are joined.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(clean_text(&current.join(" ")));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(clean_text(&current.join(" ")));
    }

    paragraphs.retain(|p| !p.is_empty());
    paragraphs
}

fn same_text(a: &str, b: &str) -> bool {
    clean_text(a).to_lowercase() == clean_text(b).to_lowercase()
}

/// Two title lines from a CMS pair where the first line sometimes repeats the second.
pub fn two_line_title(first: &str, second: &str) -> (String, String) {
    let a = clean_text(first);
    let b = clean_text(second);

    let lines = split_lines(first);
    if lines.len() >= 2 {
        let t1 = clean_text(&lines[0]);
        let t2 = clean_text(&lines[1..].join(" "));
        if same_text(&t1, &t2) {
            return (t1, String::new());
        }
        return (t1, t2);
    }

    if !b.is_empty() && a.to_lowercase().contains(&b.to_lowercase()) {
        let parts = split_after_punctuation(&a);
        if parts.len() >= 2 {
            let t1 = parts[0].clone();
            let t2 = parts[1..].join(" ");
            if same_text(&t2, &b) {
                return (t1, b);
            }
            return (t1, t2);
        }
        if same_text(&a, &b) {
            return (a, String::new());
        }
        let stripped = remove_case_insensitive(&a, &b);
        let t1 = if stripped.is_empty() { a } else { stripped };
        return (t1, b);
    }

    if !b.is_empty() && same_text(&a, &b) {
        return (a, String::new());
    }
    (a, b)
}

fn split_after_punctuation(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().map_or(false, |n| n.is_whitespace()) {
            parts.push(clean_text(&current));
            current.clear();
        }
    }
    if !current.trim().is_empty() {
        parts.push(clean_text(&current));
    }
    parts.retain(|p| !p.is_empty());
    parts
}

fn remove_case_insensitive(haystack: &str, needle: &str) -> String {
    let lower = haystack.to_lowercase();
    match lower.find(&needle.to_lowercase()) {
        // Lowercasing can change byte lengths; only cut when the offsets still line up.
        Some(start) if lower.len() == haystack.len() => {
            let end = start + needle.len();
            clean_text(&format!("{} {}", &haystack[..start], &haystack[end..]))
        }
        _ => haystack.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn str_at_reads_strings_and_numbers() {
        let section = json!({ "title": "Spațiul", "value": 4, "list": [] });
        assert_eq!(str_at(Some(&section), "title"), "Spațiul");
        assert_eq!(str_at(Some(&section), "value"), "4");
        assert_eq!(str_at(Some(&section), "list"), "");
        assert_eq!(str_at(None, "title"), "");
    }

    #[test]
    fn blank_values_use_the_fallback() {
        assert_eq!(or_fallback("  ".into(), "Implicit"), "Implicit");
        assert_eq!(or_fallback(" CMS ".into(), "Implicit"), "CMS");
    }

    #[test]
    fn lines_are_trimmed_and_blank_ones_dropped() {
        assert_eq!(split_lines("Arta cere spațiu.\r\n\n  Și istorie. "), vec!["Arta cere spațiu.", "Și istorie."]);
    }

    #[test]
    fn single_line_splits_on_sentences() {
        assert_eq!(
            split_display_lines("Arta cere spațiu. Și istorie."),
            vec!["Arta cere spațiu.", "Și istorie."]
        );
        assert_eq!(split_display_lines("Preț 4.5 lei, ok."), vec!["Preț 4.5 lei, ok."]);
        assert!(split_display_lines("   ").is_empty());
    }

    #[test]
    fn sentences_need_an_uppercase_start() {
        assert_eq!(split_sentences("Da! nu. Poate?Ț"), vec!["Da! nu.", "Poate?", "Ț"]);
    }

    #[test]
    fn paragraphs_join_hard_wraps() {
        let text = "Primul rând\ncontinuă aici.\n\n\nAl doilea   paragraf.";
        assert_eq!(
            split_paragraphs(text),
            vec!["Primul rând continuă aici.", "Al doilea paragraf."]
        );
    }

    #[test]
    fn two_line_title_drops_a_repeated_second_line() {
        assert_eq!(
            two_line_title("Sanctuar privat. Libertate radicală.", "Libertate radicală."),
            ("Sanctuar privat.".to_string(), "Libertate radicală.".to_string())
        );
        assert_eq!(
            two_line_title("Sanctuar privat.\nSanctuar privat.", ""),
            ("Sanctuar privat.".to_string(), String::new())
        );
        assert_eq!(
            two_line_title("Sanctuar privat.", "Sanctuar privat."),
            ("Sanctuar privat.".to_string(), String::new())
        );
        assert_eq!(
            two_line_title("Sanctuar privat.", "Libertate radicală."),
            ("Sanctuar privat.".to_string(), "Libertate radicală.".to_string())
        );
    }

    #[test]
    fn two_line_title_strips_the_embedded_second_line() {
        assert_eq!(
            two_line_title("Sanctuar privat libertate", "libertate"),
            ("Sanctuar privat".to_string(), "libertate".to_string())
        );
    }
}
