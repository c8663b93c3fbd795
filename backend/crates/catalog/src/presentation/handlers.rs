//! HTTP Handlers
//!
//! Thin adapters from axum extractors to [`CrudWorkflow`] calls. Every
//! workflow [`Outcome`] becomes either a rendered view or a redirect to the
//! list carrying a flash.

use std::sync::Arc;

use auth::CurrentIdentity;
use axum::Form;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use platform::flash::FlashCodec;
use platform::view::View;

use crate::application::form::FormFields;
use crate::application::resource::Resource;
use crate::application::workflow::{CrudWorkflow, Outcome};
use crate::domain::repository::Repository;
use crate::error::CatalogResult;

/// Shared state for one record kind's routes
pub struct CrudState<P, R> {
    pub workflow: CrudWorkflow<P, R>,
    pub flash: Arc<FlashCodec>,
}

impl<P, R> Clone for CrudState<P, R> {
    fn clone(&self) -> Self {
        Self {
            workflow: self.workflow.clone(),
            flash: Arc::clone(&self.flash),
        }
    }
}

impl<P, R> CrudState<P, R>
where
    P: Resource,
    R: Repository<P::Record>,
{
    fn render(&self, headers: &HeaderMap, outcome: Outcome<P::Form>) -> Response {
        let kind = P::KIND;
        match outcome {
            Outcome::List { items, error } => {
                let mut view = View::new(kind.view("list")).with(kind.list_key, &items);
                if let Some(message) = error {
                    view = view.with("errorMessage", message);
                }
                self.flash.render(headers, view)
            }
            Outcome::Form {
                mode,
                form,
                errors,
                message,
            } => {
                let mut view = View::new(kind.view(mode.page()))
                    .with(kind.form_key, &form)
                    .with("fieldErrors", &errors);
                if let Some(message) = message {
                    view = view.with("errorMessage", message);
                }
                self.flash.render(headers, view)
            }
            Outcome::Redirect { flash } => self.flash.redirect(&kind.list_path(), Some(flash)),
        }
    }
}

fn parse_id(raw: &str) -> CatalogResult<i32> {
    Ok(raw.trim().parse::<i32>()?)
}

/// GET /{slug}/list
pub async fn list<P, R>(State(state): State<CrudState<P, R>>, headers: HeaderMap) -> Response
where
    P: Resource,
    R: Repository<P::Record>,
{
    let outcome = state.workflow.list().await;
    state.render(&headers, outcome)
}

/// GET /{slug}/add
pub async fn add_form<P, R>(State(state): State<CrudState<P, R>>, headers: HeaderMap) -> Response
where
    P: Resource,
    R: Repository<P::Record>,
{
    let outcome = state.workflow.show_create_form();
    state.render(&headers, outcome)
}

/// POST /{slug}/validate
pub async fn validate<P, R>(
    State(state): State<CrudState<P, R>>,
    CurrentIdentity(identity): CurrentIdentity,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response
where
    P: Resource,
    R: Repository<P::Record>,
{
    let fields = FormFields::new(pairs);
    let outcome = state.workflow.create(&fields, &identity.principal).await;
    state.render(&headers, outcome)
}

/// GET /{slug}/update/{id}
pub async fn update_form<P, R>(
    State(state): State<CrudState<P, R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> CatalogResult<Response>
where
    P: Resource,
    R: Repository<P::Record>,
{
    let id = parse_id(&id)?;
    let outcome = state.workflow.show_update_form(id).await;
    Ok(state.render(&headers, outcome))
}

/// POST /{slug}/update/{id}
pub async fn update<P, R>(
    State(state): State<CrudState<P, R>>,
    CurrentIdentity(identity): CurrentIdentity,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> CatalogResult<Response>
where
    P: Resource,
    R: Repository<P::Record>,
{
    let id = parse_id(&id)?;
    let fields = FormFields::new(pairs);
    let outcome = state.workflow.update(id, &fields, &identity.principal).await;
    Ok(state.render(&headers, outcome))
}

/// GET /{slug}/delete/{id}
pub async fn delete<P, R>(
    State(state): State<CrudState<P, R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> CatalogResult<Response>
where
    P: Resource,
    R: Repository<P::Record>,
{
    let id = parse_id(&id)?;
    let outcome = state.workflow.delete(id).await;
    Ok(state.render(&headers, outcome))
}
