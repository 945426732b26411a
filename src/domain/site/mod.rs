//! Public site read models and the static content used when the store
//! has nothing to offer.

mod cards;
mod fallback;

pub use cards::{PageCopy, PostCard, ProjectCard, ServiceCard};
pub use fallback::{fallback_copy, FALLBACK_POSTS, FALLBACK_PROJECTS, FALLBACK_SERVICES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{PageSection, PageSectionDraft, Post, PostDraft};
    use crate::domain::foundation::{Record, RecordId, Timestamp};

    #[test]
    fn fallback_lists_are_not_empty() {
        assert!(!FALLBACK_SERVICES.is_empty());
        assert!(FALLBACK_PROJECTS.iter().any(|p| p.lab));
        assert!(FALLBACK_PROJECTS.iter().any(|p| !p.lab));
        assert!(!FALLBACK_POSTS.is_empty());
    }

    #[test]
    fn section_overrides_only_non_blank_fields() {
        let section = PageSection::create(
            RecordId::new(),
            PageSectionDraft {
                page: "home".into(),
                section: "hero".into(),
                content: serde_json::json!({ "title": "Hello", "subtitle": "  " }),
            },
            Timestamp::now(),
        )
        .unwrap();

        let copy = fallback_copy("home", "Acme", "We build").overlay(Some(&section));
        assert_eq!(copy.title, "Hello");
        assert_eq!(copy.subtitle, "We build");
    }

    #[test]
    fn post_card_uses_publication_date() {
        let post = Post::create(
            RecordId::new(),
            PostDraft {
                title: "Hi".into(),
                published: true,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        let card = PostCard::from(&post);
        assert_eq!(card.slug, "hi");
        assert_eq!(card.date.len(), 10);
    }
}
