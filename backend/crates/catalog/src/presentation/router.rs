//! Catalog Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use platform::flash::FlashCodec;

use crate::application::config::CatalogConfig;
use crate::application::resource::Resource;
use crate::application::resources::{
    BidListResource, CurvePointResource, RatingResource, RuleNameResource, TradeResource,
    UserResource,
};
use crate::application::workflow::CrudWorkflow;
use crate::domain::repository::{CatalogStore, Repository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CrudState};

/// The six CRUD route groups with the PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository, config: &CatalogConfig) -> Router {
    catalog_router_generic(Arc::new(repo), config)
}

/// The six CRUD route groups for any store implementation
pub fn catalog_router_generic<S>(store: Arc<S>, config: &CatalogConfig) -> Router
where
    S: CatalogStore,
{
    let flash = Arc::new(config.flash_codec());
    let users = UserResource::new(config.password_pepper.clone());

    Router::new()
        .merge(crud_router(BidListResource, store.clone(), flash.clone()))
        .merge(crud_router(CurvePointResource, store.clone(), flash.clone()))
        .merge(crud_router(RatingResource, store.clone(), flash.clone()))
        .merge(crud_router(RuleNameResource, store.clone(), flash.clone()))
        .merge(crud_router(TradeResource, store.clone(), flash.clone()))
        .merge(crud_router(users, store, flash))
}

/// Routes for one record kind, under `/{slug}`:
///
/// | Method | Path | |
/// |---|---|---|
/// | GET | `/list` | list view |
/// | GET | `/add` | empty add form |
/// | POST | `/validate` | create |
/// | GET | `/update/{id}` | filled update form |
/// | POST | `/update/{id}` | update |
/// | GET | `/delete/{id}` | delete |
pub fn crud_router<P, R>(resource: P, repository: Arc<R>, flash: Arc<FlashCodec>) -> Router
where
    P: Resource,
    R: Repository<P::Record>,
{
    let slug = P::KIND.slug;
    let state = CrudState {
        workflow: CrudWorkflow::new(Arc::new(resource), repository),
        flash,
    };

    Router::new()
        .route(&format!("/{slug}/list"), get(handlers::list::<P, R>))
        .route(&format!("/{slug}/add"), get(handlers::add_form::<P, R>))
        .route(&format!("/{slug}/validate"), post(handlers::validate::<P, R>))
        .route(
            &format!("/{slug}/update/{{id}}"),
            get(handlers::update_form::<P, R>).post(handlers::update::<P, R>),
        )
        .route(&format!("/{slug}/delete/{{id}}"), get(handlers::delete::<P, R>))
        .with_state(state)
}
