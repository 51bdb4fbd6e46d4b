use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::shared::constants::VIEW_DATA_ERRORS;
use crate::shared::views::ModelState;

/// Outcome of a controller action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<M> {
    /// Render a template, optionally with a model
    View(ViewResult<M>),
    /// Send the browser to another action of the same controller
    Redirect(RedirectToAction),
    /// Bodiless 404
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<M> {
    pub view_name: &'static str,
    pub model: Option<M>,
    pub view_data: ViewData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectToAction {
    pub action_name: &'static str,
}

impl<M> ActionResult<M> {
    pub fn view(view_name: &'static str, model: M) -> Self {
        Self::View(ViewResult {
            view_name,
            model: Some(model),
            view_data: ViewData::default(),
        })
    }

    pub fn empty_view(view_name: &'static str) -> Self {
        Self::View(ViewResult {
            view_name,
            model: None,
            view_data: ViewData::default(),
        })
    }

    pub fn redirect_to_action(action_name: &'static str) -> Self {
        Self::Redirect(RedirectToAction { action_name })
    }

    /// Attach view data; no-op for redirects and not-found results
    pub fn with_view_data(mut self, view_data: ViewData) -> Self {
        if let Self::View(ref mut view) = self {
            view.view_data = view_data;
        }
        self
    }

    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    #[cfg(test)]
    pub fn as_view(&self) -> Option<&ViewResult<M>> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn as_redirect(&self) -> Option<&RedirectToAction> {
        match self {
            Self::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }
}

/// Auxiliary values handed to a view next to its model, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewData(Map<String, Value>);

impl ViewData {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Expose model-state errors to a redisplayed form
    pub fn with_model_state(mut self, model_state: &ModelState) -> Self {
        if !model_state.is_valid() {
            self.insert(VIEW_DATA_ERRORS, json!(model_state.errors()));
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectListItem {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

/// Options for a `<select>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectList {
    pub items: Vec<SelectListItem>,
}

impl SelectList {
    pub fn new<T, I>(
        source: I,
        value: impl Fn(&T) -> String,
        text: impl Fn(&T) -> String,
        selected: Option<String>,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items = source
            .into_iter()
            .map(|item| {
                let value = value(&item);
                SelectListItem {
                    selected: selected.as_deref() == Some(value.as_str()),
                    text: text(&item),
                    value,
                }
            })
            .collect();
        Self { items }
    }

    #[cfg(test)]
    pub fn selected_value(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.selected)
            .map(|item| item.value.as_str())
    }
}

impl From<SelectList> for Value {
    fn from(list: SelectList) -> Self {
        Value::Array(
            list.items
                .into_iter()
                .map(|item| {
                    json!({
                        "value": item.value,
                        "text": item.text,
                        "selected": item.selected,
                    })
                })
                .collect(),
        )
    }
}
