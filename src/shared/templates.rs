//! Page templates rendered with Jinja2 syntax.
//!
//! Every page the application serves is listed in [`Page`]. All of them are
//! loaded and parsed once at startup by [`Templates::load`], so a missing or
//! broken template stops the process before it starts listening.

use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use thiserror::Error;

/// Shared layout every page extends
pub const LAYOUT_TEMPLATE: &str = "layout.html";

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to read template '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template '{name}': {source}")]
    Syntax {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Pages served by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    MainPage,
    RegistrationForm,
    TrainingConfirmed,
    TrainingRejected,
    Participants,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::MainPage,
        Page::RegistrationForm,
        Page::TrainingConfirmed,
        Page::TrainingRejected,
        Page::Participants,
    ];

    pub fn template_name(self) -> &'static str {
        match self {
            Page::MainPage => "main-page.html",
            Page::RegistrationForm => "registration-form.html",
            Page::TrainingConfirmed => "training-confirmed.html",
            Page::TrainingRejected => "training-rejected.html",
            Page::Participants => "participants.html",
        }
    }
}

/// Parsed page templates, immutable after startup
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Load the layout and every [`Page`] template from `dir`.
    ///
    /// Fails on the first template that is missing or does not parse.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let mut env = Environment::new();
        // Form pages read `client.*` before a record exists
        env.set_undefined_behavior(UndefinedBehavior::Chainable);

        let names =
            std::iter::once(LAYOUT_TEMPLATE).chain(Page::ALL.iter().map(|p| p.template_name()));
        for name in names {
            let path = dir.join(name);
            if !path.is_file() {
                return Err(TemplateError::NotFound(path.display().to_string()));
            }

            let content =
                std::fs::read_to_string(&path).map_err(|source| TemplateError::Io {
                    path: path.clone(),
                    source,
                })?;

            env.add_template_owned(name, content)
                .map_err(|source| TemplateError::Syntax {
                    name: name.to_string(),
                    source,
                })?;
            tracing::debug!("Loaded template: {}", name);
        }

        Ok(Self { env })
    }

    /// Render `page` with the given context.
    pub fn render<S: Serialize>(&self, page: Page, ctx: S) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(page.template_name())
            .map_err(|_| TemplateError::NotFound(page.template_name().to_string()))?;

        template
            .render(ctx)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }
}
