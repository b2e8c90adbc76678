/// Longest id [`generate_id`] will produce, in characters.
pub const MAX_ID_LEN: usize = 50;

/// Derives a URL-safe product id from a product name.
///
/// Lower-cases the name, drops everything except ASCII letters, digits, and
/// whitespace, turns each whitespace run into a single `-`, and caps the
/// result at [`MAX_ID_LEN`] characters. Characters dropped in the middle of
/// a whitespace run do not split it: `"a - b"` becomes `"a-b"`.
///
/// Distinct names can map to the same id.
#[must_use]
pub fn generate_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len().min(MAX_ID_LEN));
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('-');
                in_whitespace = true;
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            id.push(c);
            in_whitespace = false;
        }
    }

    // Only ASCII is ever pushed, so byte length equals char length.
    id.truncate(MAX_ID_LEN);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(generate_id("Widget A"), "widget-a");
    }

    #[test]
    fn strips_punctuation_and_symbols() {
        assert_eq!(generate_id("2x1 en Café & Té!"), "2x1-en-caf-t");
    }

    #[test]
    fn collapses_whitespace_runs_across_dropped_chars() {
        assert_eq!(generate_id("Widget  -\t A"), "widget-a");
    }

    #[test]
    fn keeps_trailing_hyphen_from_trailing_symbol_run() {
        assert_eq!(generate_id("Promo !"), "promo-");
    }

    #[test]
    fn truncates_to_fifty_characters() {
        let name = "a".repeat(80);
        assert_eq!(generate_id(&name).len(), MAX_ID_LEN);
    }

    #[test]
    fn is_deterministic() {
        let name = "Descuento 15% Línea Blanca";
        assert_eq!(generate_id(name), generate_id(name));
    }

    #[test]
    fn output_alphabet_is_lowercase_digits_and_hyphens() {
        let names = [
            "¡Oferta ÚNICA! 50% OFF",
            "  leading and trailing  ",
            "Tabs\tand\nnewlines",
            "emoji 🎉 party",
            "",
        ];
        for name in names {
            let id = generate_id(name);
            assert!(id.len() <= MAX_ID_LEN);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in {id:?}"
            );
        }
    }

    #[test]
    fn distinct_names_can_collide() {
        assert_eq!(generate_id("Widget A"), generate_id("Widget A!"));
    }
}
