//! Resource-agnostic controller verbs.
//!
//! Every verb forwards to the resource's [`CrudService`] and renders the
//! result as JSON. Controllers add no error handling of their own;
//! failures render through the shared `AppError` response mapping.

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;

use crudhub_core::error::AppError;
use crudhub_core::result::AppResult;
use crudhub_core::traits::{CrudRepository, Resource};
use crudhub_core::types::form::{EditForm, FormSchema};
use crudhub_core::types::pagination::PageResponse;
use crudhub_core::types::response::MessageResponse;
use crudhub_service::CrudService;

use crate::extractors::{JsonBody, PaginationParams, QueryParams, parse_id};
use crate::state::AppState;

type Id<C> = <<C as ResourceController>::Repo as CrudRepository>::Id;
type Entity<C> = <<C as ResourceController>::Repo as CrudRepository>::Entity;
type Draft<C> = <<C as ResourceController>::Repo as CrudRepository>::Draft;
type Patch<C> = <<C as ResourceController>::Repo as CrudRepository>::Patch;

/// Binds a resource to the delegator that serves it.
pub trait ResourceController: Send + Sync + 'static {
    /// Repository contract behind the resource.
    type Repo: ?Sized + CrudRepository;

    /// The delegator for this resource.
    fn service(state: &AppState) -> &CrudService<Self::Repo>;

    /// Path segment the resource is mounted under.
    fn resource() -> &'static str {
        <Entity<Self> as Resource>::NAME
    }
}

/// Mounts the seven resource routes under `/{resource}`.
pub fn resource_routes<C: ResourceController>() -> Router<AppState> {
    let collection = format!("/{}", C::resource());
    let member = format!("{collection}/{{id}}");

    Router::new()
        .route(&collection, get(index::<C>).post(store::<C>))
        .route(&format!("{collection}/create"), get(create::<C>))
        .route(
            &member,
            get(show::<C>).put(update::<C>).delete(destroy::<C>),
        )
        .route(&format!("{member}/edit"), get(edit::<C>))
}

/// GET /api/{resource}
pub async fn index<C: ResourceController>(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> AppResult<Json<PageResponse<Entity<C>>>> {
    let page = params.into_page_request();
    let result = C::service(&state).index(&page).await?;
    Ok(Json(result))
}

/// GET /api/{resource}/create
pub async fn create<C: ResourceController>(
    State(state): State<AppState>,
) -> AppResult<Json<FormSchema>> {
    let form = C::service(&state).create().await?;
    Ok(Json(form))
}

/// POST /api/{resource}
pub async fn store<C: ResourceController>(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<Draft<C>>,
) -> AppResult<(StatusCode, Json<Entity<C>>)> {
    let record = C::service(&state).store(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/{resource}/{id}
pub async fn show<C: ResourceController>(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<Entity<C>>> {
    let id: Id<C> = parse_id(C::resource(), &raw)?;
    let form = C::service(&state).edit(&id).await?;
    Ok(Json(form.record))
}

/// GET /api/{resource}/{id}/edit
pub async fn edit<C: ResourceController>(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<EditForm<Entity<C>>>> {
    let id: Id<C> = parse_id(C::resource(), &raw)?;
    let form = C::service(&state).edit(&id).await?;
    Ok(Json(form))
}

/// PUT /api/{resource}/{id}
pub async fn update<C: ResourceController>(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    JsonBody(patch): JsonBody<Patch<C>>,
) -> AppResult<Json<Entity<C>>> {
    let id: Id<C> = parse_id(C::resource(), &raw)?;
    let record = C::service(&state).put(&id, patch).await?;
    Ok(Json(record))
}

/// DELETE /api/{resource}/{id}
pub async fn destroy<C: ResourceController>(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id: Id<C> = parse_id(C::resource(), &raw)?;
    if !C::service(&state).delete(&id).await? {
        return Err(AppError::not_found(format!(
            "{} {id} not found",
            C::resource()
        )));
    }
    Ok(Json(MessageResponse::new(format!(
        "{} {id} deleted",
        C::resource()
    ))))
}
