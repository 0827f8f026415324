use std::sync::OnceLock;

use tera::Tera;
use tracing::info;

use crate::{nav::NavBar, postings::PostingsPage, signup::SignupForm};

/// Templates are compiled into the binary so the server does not depend on its working directory.
const TEMPLATES: [(&str, &str); 4] = [
    ("html/base.html", include_str!("../templates/html/base.html")),
    ("html/navbar.html", include_str!("../templates/html/navbar.html")),
    ("html/home.html", include_str!("../templates/html/home.html")),
    ("html/postings.html", include_str!("../templates/html/postings.html")),
];

#[derive(Debug)]
pub struct TemplateManager {
    tera: &'static Tera,
}

impl TemplateManager {
    pub fn init() -> Self {
        info!(
            "{:<20} - Initializing the Template manager",
            "templ manager"
        );
        static TERA: OnceLock<Tera> = OnceLock::new();
        let tera = TERA.get_or_init(|| {
            let mut tera = Tera::default();
            tera.add_raw_templates(TEMPLATES)
                .unwrap_or_else(|e| panic!("Parsing error(s): {e}"));
            tera
        });
        Self { tera }
    }

    /// Renders a page from the 'html/' directory with the navigation header for `current_path`.
    pub fn render_page(
        &self,
        template_file: &str,
        current_path: &str,
        mut ctx: tera::Context,
    ) -> Result<String, tera::Error> {
        ctx.insert("nav", &NavBar::render(current_path));
        let template = format!("html/{template_file}");
        self.tera.render(&template, &ctx)
    }

    /// Renders the home page around the given signup form.
    pub fn render_home(&self, current_path: &str, form: &SignupForm) -> Result<String, tera::Error> {
        let mut ctx = tera::Context::new();
        ctx.insert("form", form);
        ctx.insert("success", &form.status().is_success());
        self.render_page("home.html", current_path, ctx)
    }

    pub fn render_postings(
        &self,
        current_path: &str,
        page: &PostingsPage,
    ) -> Result<String, tera::Error> {
        let mut ctx = tera::Context::new();
        ctx.insert("page", page);
        self.render_page("postings.html", current_path, ctx)
    }
}
