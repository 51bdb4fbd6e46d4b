//! Template engine for the HTML views, using Jinja2 syntax.
//!
//! Templates live in `templates/` at the project root and are embedded at
//! compile time, so a running binary never depends on its working directory.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use minijinja::{context, Environment, Value};
use serde::Serialize;
use thiserror::Error;

use crate::shared::constants::INDEX_ACTION;
use crate::shared::views::{ActionResult, ViewData};

/// Embedded templates, keyed by the name views refer to them by
const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    (
        "citizens/index.html",
        include_str!("../../../templates/citizens/index.html"),
    ),
    (
        "citizens/details.html",
        include_str!("../../../templates/citizens/details.html"),
    ),
    (
        "citizens/form.html",
        include_str!("../../../templates/citizens/form.html"),
    ),
    (
        "citizens/create.html",
        include_str!("../../../templates/citizens/create.html"),
    ),
    (
        "citizens/edit.html",
        include_str!("../../../templates/citizens/edit.html"),
    ),
    (
        "citizens/delete.html",
        include_str!("../../../templates/citizens/delete.html"),
    ),
    (
        "complaints/index.html",
        include_str!("../../../templates/complaints/index.html"),
    ),
    (
        "complaints/details.html",
        include_str!("../../../templates/complaints/details.html"),
    ),
    (
        "complaints/form.html",
        include_str!("../../../templates/complaints/form.html"),
    ),
    (
        "complaints/create.html",
        include_str!("../../../templates/complaints/create.html"),
    ),
    (
        "complaints/edit.html",
        include_str!("../../../templates/complaints/edit.html"),
    ),
    (
        "complaints/delete.html",
        include_str!("../../../templates/complaints/delete.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("View '{0}' not found")]
    NotFound(String),

    #[error("Failed to compile template '{name}': {reason}")]
    CompileError { name: String, reason: String },

    #[error("Failed to render view: {0}")]
    RenderError(String),
}

pub struct ViewEngine {
    env: Environment<'static>,
}

impl std::fmt::Debug for ViewEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEngine")
            .field("templates", &self.env.templates().count())
            .finish()
    }
}

impl ViewEngine {
    /// Compile every embedded template
    pub fn new() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| ViewError::CompileError {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
            tracing::debug!("Loaded view template: {}", name);
        }
        Ok(Self { env })
    }

    /// Render `<view_name>.html` with a model and its view data
    pub fn render<M: Serialize>(
        &self,
        view_name: &str,
        model: Option<&M>,
        view_data: &ViewData,
    ) -> Result<String, ViewError> {
        let template_name = format!("{}.html", view_name);
        let template = self
            .env
            .get_template(&template_name)
            .map_err(|_| ViewError::NotFound(view_name.to_string()))?;

        template
            .render(context! {
                model => Value::from_serialize(model),
                view_data => Value::from_serialize(view_data),
            })
            .map_err(|e| ViewError::RenderError(e.to_string()))
    }

    /// Turn a controller outcome into an HTTP response.
    ///
    /// `controller` is the route prefix the controller is mounted under
    /// (e.g. `citizens`); redirects are resolved against it.
    pub fn respond<M: Serialize>(
        &self,
        controller: &str,
        result: ActionResult<M>,
    ) -> Result<Response, ViewError> {
        match result {
            ActionResult::View(view) => {
                let html = self.render(view.view_name, view.model.as_ref(), &view.view_data)?;
                Ok(Html(html).into_response())
            }
            ActionResult::Redirect(redirect) => {
                Ok(Redirect::to(&action_url(controller, redirect.action_name)).into_response())
            }
            ActionResult::NotFound => Ok(StatusCode::NOT_FOUND.into_response()),
        }
    }
}

/// URL of a controller action; `Index` maps to the controller root
pub fn action_url(controller: &str, action_name: &str) -> String {
    if action_name == INDEX_ACTION {
        format!("/{}", controller)
    } else {
        format!("/{}/{}", controller, action_name.to_lowercase())
    }
}
