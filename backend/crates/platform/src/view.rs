//! View Model Responses
//!
//! Pages are not rendered to HTML here. A handler returns a [`View`]: the
//! template name plus the model a template would be given, serialized as
//!
//! ```json
//! { "view": "trade/list", "model": { "trades": [] }, "flash": null }
//! ```

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::flash::Flash;

#[derive(Debug, Clone)]
pub struct View {
    name: Cow<'static, str>,
    status: StatusCode,
    model: Map<String, Value>,
    flash: Option<Flash>,
}

impl View {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            status: StatusCode::OK,
            model: Map::new(),
            flash: None,
        }
    }

    /// Add a model attribute.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::error!(error = %e, attribute = key, "View model attribute not serializable");
            Value::Null
        });
        self.model.insert(key.to_string(), value);
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &Map<String, Value> {
        &self.model
    }
}

#[derive(Serialize)]
struct ViewBody<'a> {
    view: &'a str,
    model: &'a Map<String, Value>,
    flash: Option<&'a Flash>,
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let body = ViewBody {
            view: &self.name,
            model: &self.model,
            flash: self.flash.as_ref(),
        };
        (self.status, Json(body)).into_response()
    }
}
