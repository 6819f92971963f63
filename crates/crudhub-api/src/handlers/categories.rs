//! Categories controller.

use axum::Router;

use crudhub_database::repositories::DynCategoryRepository;
use crudhub_service::CrudService;

use super::crud::{ResourceController, resource_routes};
use crate::state::AppState;

/// Serves `/api/categories` through the categories delegator.
#[derive(Debug)]
pub struct CategoriesController;

impl ResourceController for CategoriesController {
    type Repo = DynCategoryRepository;

    fn service(state: &AppState) -> &CrudService<DynCategoryRepository> {
        &state.categories
    }
}

/// Category resource routes.
pub fn routes() -> Router<AppState> {
    resource_routes::<CategoriesController>()
}
