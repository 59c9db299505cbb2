/// Whitespace as matched by an ECMAScript `\s` class.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_allowed(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
        || c.is_ascii_alphanumeric()
        || is_js_whitespace(c)
        || matches!(c, '-' | ':' | ',' | '.' | '!' | '?' | '\'' | '"' | '(' | ')')
}

/// A title is readable when it is non-empty and made only of Cyrillic,
/// ASCII letters and digits, whitespace and basic punctuation.
pub fn is_readable_title(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_allowed)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Pick the display title: the localized title when readable, otherwise
/// the alternate-language title, then the original title, then whatever
/// the localized title was.
pub fn choose_title(primary: Option<&str>, alternate: Option<&str>, original: Option<&str>) -> String {
    if let Some(title) = primary.filter(|t| is_readable_title(t)) {
        return title.to_owned();
    }

    non_empty(alternate)
        .or_else(|| non_empty(original))
        .or(primary)
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_and_latin_titles_are_readable() {
        assert!(is_readable_title("Бегущий по лезвию 2049"));
        assert!(is_readable_title("Mission: Impossible - Dead Reckoning"));
        assert!(is_readable_title("Кто подставил кролика Роджера?"));
        assert!(is_readable_title("\"Ёлки\" (2010)"));
    }

    #[test]
    fn other_scripts_are_not_readable() {
        assert!(!is_readable_title("千と千尋の神隠し"));
        assert!(!is_readable_title("기생충"));
        assert!(!is_readable_title("Amélie"));
        assert!(!is_readable_title("Fast & Furious"));
        assert!(!is_readable_title(""));
    }

    #[test]
    fn non_breaking_space_counts_as_whitespace() {
        assert!(is_readable_title("Дюна:\u{00A0}Часть вторая"));
    }

    #[test]
    fn readable_primary_wins() {
        assert_eq!(choose_title(Some("Дюна"), Some("Dune"), Some("Dune")), "Дюна");
    }

    #[test]
    fn unreadable_primary_falls_back_in_order() {
        assert_eq!(
            choose_title(Some("千と千尋の神隠し"), Some("Spirited Away"), Some("千と千尋の神隠し")),
            "Spirited Away"
        );
        assert_eq!(choose_title(Some("기생충"), None, Some("Parasite")), "Parasite");
        assert_eq!(choose_title(Some("기생충"), Some(""), Some("")), "기생충");
        assert_eq!(choose_title(None, None, None), "");
    }
}
