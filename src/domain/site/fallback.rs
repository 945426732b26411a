//! Built-in content rendered when the store is unavailable or empty.

use once_cell::sync::Lazy;

use super::{PageCopy, PostCard, ProjectCard, ServiceCard};

pub static FALLBACK_SERVICES: Lazy<Vec<ServiceCard>> = Lazy::new(|| {
    vec![
        ServiceCard {
            slug: "web-design".into(),
            title: "Web Design".into(),
            description: "Responsive sites designed around your brand and your customers.".into(),
            icon: Some("palette".into()),
            features: vec!["UX research".into(), "Visual design".into(), "Design systems".into()],
        },
        ServiceCard {
            slug: "web-development".into(),
            title: "Web Development".into(),
            description: "Fast, accessible websites and web applications.".into(),
            icon: Some("code".into()),
            features: vec!["Marketing sites".into(), "E-commerce".into(), "Integrations".into()],
        },
        ServiceCard {
            slug: "seo".into(),
            title: "SEO & Performance".into(),
            description: "Technical audits and ongoing optimisation so people can find you.".into(),
            icon: Some("search".into()),
            features: vec!["Site audits".into(), "Core Web Vitals".into(), "Content strategy".into()],
        },
    ]
});

pub static FALLBACK_PROJECTS: Lazy<Vec<ProjectCard>> = Lazy::new(|| {
    vec![
        ProjectCard {
            slug: "studio-rebrand".into(),
            title: "Studio Rebrand".into(),
            category: Some("Branding".into()),
            summary: Some("A new identity and site for a design studio.".into()),
            description: "Identity, art direction and a fast static site.".into(),
            cover_image: None,
            url: None,
            technologies: vec!["Figma".into(), "Rust".into()],
            lab: false,
        },
        ProjectCard {
            slug: "site-analyzer".into(),
            title: "Website Analyzer".into(),
            category: Some("Experiment".into()),
            summary: Some("Screenshot any page and get an AI design critique.".into()),
            description: "Headless browser capture fed to a vision model.".into(),
            cover_image: None,
            url: Some("/lab".into()),
            technologies: vec!["Chromium".into(), "LLM".into()],
            lab: true,
        },
    ]
});

pub static FALLBACK_POSTS: Lazy<Vec<PostCard>> = Lazy::new(|| {
    vec![PostCard {
        slug: "welcome".into(),
        title: "Welcome to our blog".into(),
        excerpt: Some("Notes on design, development and running a small studio.".into()),
        content: "<p>We write about the work we do and the tools we use.</p>".into(),
        cover_image: None,
        tags: vec!["news".into()],
        date: "2024-01-01".into(),
    }]
});

/// Default copy for a page key; unknown pages get an empty body.
pub fn fallback_copy(page: &str, site_name: &str, tagline: &str) -> PageCopy {
    match page {
        "home" => PageCopy {
            title: site_name.to_string(),
            subtitle: tagline.to_string(),
            body: "We design and build websites that work for your business.".into(),
        },
        "about" => PageCopy {
            title: format!("About {}", site_name),
            subtitle: "A small team of designers and engineers.".into(),
            body: "We partner with businesses of every size to plan, design and ship their web presence.".into(),
        },
        "services" => PageCopy {
            title: "Services".into(),
            subtitle: "What we can do for you.".into(),
            body: String::new(),
        },
        "portfolio" => PageCopy {
            title: "Portfolio".into(),
            subtitle: "Selected client work.".into(),
            body: String::new(),
        },
        "blog" => PageCopy {
            title: "Blog".into(),
            subtitle: "Ideas and updates.".into(),
            body: String::new(),
        },
        "lab" => PageCopy {
            title: "Lab".into(),
            subtitle: "Experiments and side projects.".into(),
            body: String::new(),
        },
        _ => PageCopy {
            title: site_name.to_string(),
            subtitle: String::new(),
            body: String::new(),
        },
    }
}
