//! Server-rendered views for the MVC controllers.
//!
//! Controllers never build responses themselves. They return an
//! [`ActionResult`] describing *what* should happen (render a view, redirect
//! to an action, or report that the entity does not exist) and the handlers
//! turn that into HTTP through [`ViewEngine::respond`].

pub mod action;
pub mod engine;
pub mod model_state;
pub mod update;

pub use action::{ActionResult, SelectList, ViewData};
pub use engine::{ViewEngine, ViewError};
pub use model_state::ModelState;
pub use update::{apply_update, UpdateOutcome};
