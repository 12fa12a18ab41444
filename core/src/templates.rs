//! Named markup templates backed by a `handlebars` registry.
//!
//! Every template except the main shell is also registered as a partial under
//! the same name, so the shell can include the regions it is made of and each
//! region can still be rendered on its own.

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub const MAIN: &str = "main_template";
pub const TITLE: &str = "title_template";
pub const LIST: &str = "list_template";
pub const ALL_TODOS: &str = "all_todos_template";
pub const ALL_LISTS: &str = "all_list_template";
pub const COMPLETED_TODOS: &str = "completed_todos_template";
pub const COMPLETED_LISTS: &str = "completed_list_template";

const BUILTIN: [(&str, &str); 7] = [
    (MAIN, include_str!("../templates/main_template.hbs")),
    (TITLE, include_str!("../templates/title_template.hbs")),
    (LIST, include_str!("../templates/list_template.hbs")),
    (ALL_TODOS, include_str!("../templates/all_todos_template.hbs")),
    (ALL_LISTS, include_str!("../templates/all_list_template.hbs")),
    (COMPLETED_TODOS, include_str!("../templates/completed_todos_template.hbs")),
    (COMPLETED_LISTS, include_str!("../templates/completed_list_template.hbs")),
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template {name} failed to compile: {source}")]
    Compile {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("template {name} failed to render: {source}")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("failed to read templates from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Compiled templates, looked up by name.
#[derive(Debug)]
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// The templates shipped with the crate.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut templates = Self {
            registry: Handlebars::new(),
        };
        for (name, source) in BUILTIN {
            templates.register(name, source)?;
        }
        Ok(templates)
    }

    /// Built-in templates, with any `<name>.hbs` file in `dir` replacing the
    /// template of the same name.
    pub fn with_overrides(dir: &Path) -> Result<Self, TemplateError> {
        let mut templates = Self::builtin()?;
        let io_err = |source| TemplateError::Io {
            path: dir.to_path_buf(),
            source,
        };
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("hbs") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|source| TemplateError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(name, path = %path.display(), "overriding template");
            templates.register(name, &source)?;
        }
        Ok(templates)
    }

    pub fn register(&mut self, name: &str, source: &str) -> Result<(), TemplateError> {
        let compile_err = |source| TemplateError::Compile {
            name: name.to_string(),
            source: Box::new(source),
        };
        self.registry
            .register_template_string(name, source)
            .map_err(compile_err)?;
        if name != MAIN {
            self.registry.register_partial(name, source).map_err(compile_err)?;
        }
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, TemplateError> {
        self.registry
            .render(name, data)
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source: Box::new(source),
            })
    }
}
