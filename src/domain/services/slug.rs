/// Derives a URL-friendly slug from a display name: lowercase, runs of
/// non-alphanumeric characters collapse to a single hyphen, no leading or
/// trailing hyphen. Deterministic, so renames always land on the same slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;

    for c in name.chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        assert_eq!(slugify("Closing Party"), "closing-party");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("Sun & Flower: Opening!"), "sun-flower-opening");
    }

    #[test]
    fn test_leading_and_trailing_junk() {
        assert_eq!(slugify("  --La Flor Blanca-- "), "la-flor-blanca");
    }

    #[test]
    fn test_uppercase_and_digits() {
        assert_eq!(slugify("Ibiza 2025 CLOSING"), "ibiza-2025-closing");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(slugify("Noche de Luna"), slugify("Noche de Luna"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
