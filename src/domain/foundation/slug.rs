//! URL slug derivation for posts, projects and services.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowercase, hyphen-separated URL segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Uses `explicit` when it yields a non-empty slug, otherwise derives one from `title`.
    pub fn resolve(explicit: Option<&str>, title: &str) -> Result<Self, ValidationError> {
        let candidate = explicit
            .map(slugify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slugify(title));
        if candidate.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Folds common Latin diacritics, keeps ASCII alphanumerics and collapses the rest to `-`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        let mapped = match ch {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => Some('a'),
            'ç' | 'ć' | 'č' => Some('c'),
            'é' | 'è' | 'ê' | 'ë' => Some('e'),
            'ğ' => Some('g'),
            'í' | 'ì' | 'î' | 'ï' | 'ı' => Some('i'),
            'ñ' => Some('n'),
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' => Some('o'),
            'ş' | 'š' | 'ś' => Some('s'),
            'ú' | 'ù' | 'û' | 'ü' => Some('u'),
            'ý' | 'ÿ' => Some('y'),
            'ž' | 'ź' | 'ż' => Some('z'),
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        };

        match mapped {
            Some(c) => {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(c);
            }
            None => pending_dash = true,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Brand   Identity 2024 "), "brand-identity-2024");
    }

    #[test]
    fn slugify_folds_diacritics() {
        assert_eq!(slugify("Çağrı Şahin Über"), "cagri-sahin-uber");
    }

    #[test]
    fn resolve_prefers_explicit_slug() {
        let slug = Slug::resolve(Some("Custom Slug"), "Title").unwrap();
        assert_eq!(slug.as_str(), "custom-slug");
    }

    #[test]
    fn resolve_falls_back_to_title() {
        let slug = Slug::resolve(Some("  "), "Design Systems").unwrap();
        assert_eq!(slug.as_str(), "design-systems");
    }

    #[test]
    fn resolve_rejects_unsluggable_input() {
        assert!(Slug::resolve(None, "!!!").is_err());
    }

    proptest! {
        #[test]
        fn slugify_output_is_url_safe(input in ".{0,64}") {
            let slug = slugify(&input);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn slugify_is_idempotent(input in ".{0,64}") {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once.clone());
        }
    }
}
