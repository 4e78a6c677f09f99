//! Slug derivation
//!
//! Slugs are computed from names at creation time unless the caller
//! supplies one verbatim. Uniqueness is not enforced.

/// Derive a URL slug: lowercase ASCII alphanumerics, every other run
/// of characters collapsed to a single `-`, no leading/trailing dash.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_name_with_spaces() {
        assert_eq!(slugify("Vibrating Screen X1"), "vibrating-screen-x1");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Heavy-Duty  (Mk. II)"), "heavy-duty-mk-ii");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  --Crusher--  "), "crusher");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
