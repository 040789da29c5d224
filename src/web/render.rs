//! HTML rendering of catalog views.

use std::fs;
use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use crate::config::TEMPLATE_NAME;
use crate::error::Result;
use crate::models::GameRecord;

/// Everything the page template can see.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub games: &'a [GameRecord],
    pub count: usize,
    /// Genre options for the selector, in catalog order.
    pub genres: &'a [String],
    pub name: Option<&'a str>,
    /// Genre to show as selected and to carry into the next submission.
    pub selected_genre: Option<&'a str>,
    pub platform: Option<&'a str>,
    /// Where the search form posts back to.
    pub action: &'a str,
}

/// Compiled page template.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Load and compile the page template from `path`.
    ///
    /// HTML auto-escaping applies because the template is registered under
    /// an `.html` name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_source(source)
    }

    pub fn from_source(source: impl Into<String>) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE_NAME, source.into())?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView<'_>) -> Result<String> {
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        Ok(tmpl.render(view)?)
    }
}
