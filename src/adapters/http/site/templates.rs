//! Embedded minijinja templates for the public site.

use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    ("_macros.html", include_str!("templates/_macros.html")),
    ("home.html", include_str!("templates/home.html")),
    ("page.html", include_str!("templates/page.html")),
    ("project.html", include_str!("templates/project.html")),
    ("post.html", include_str!("templates/post.html")),
    ("contact.html", include_str!("templates/contact.html")),
    ("login.html", include_str!("templates/login.html")),
    ("404.html", include_str!("templates/404.html")),
    ("500.html", include_str!("templates/500.html")),
];

/// Compiled template set, built once at startup.
pub struct SiteTemplates {
    env: Environment<'static>,
}

impl SiteTemplates {
    /// Parses every embedded template; a syntax error fails here rather than per request.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
