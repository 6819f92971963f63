//! Users controller.

use axum::Router;

use crudhub_database::repositories::DynUserRepository;
use crudhub_service::CrudService;

use super::crud::{ResourceController, resource_routes};
use crate::state::AppState;

/// Serves `/api/users` through the users delegator.
#[derive(Debug)]
pub struct UsersController;

impl ResourceController for UsersController {
    type Repo = DynUserRepository;

    fn service(state: &AppState) -> &CrudService<DynUserRepository> {
        &state.users
    }
}

/// User resource routes.
pub fn routes() -> Router<AppState> {
    resource_routes::<UsersController>()
}
