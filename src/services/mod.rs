//! Service layer between routes and the backend API.

use std::future::Future;

use thiserror::Error;

use crate::api::errors::{ApiError, ApiResult};
use crate::list::{ListController, ListState, Page, run_fetch};
use crate::query::ListQuery;

pub mod birds;
pub mod cart;
pub mod manager;
pub mod nests;
pub mod ratings;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A backend call outside the list machinery failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A list fetch ended in the `Failed` state.
    #[error("{0}")]
    List(String),

    /// User-visible form problem.
    #[error("{0}")]
    Form(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Runs one list fetch through the controller state machine and unwraps the
/// terminal state.
///
/// Every list page funnels through here so they all share the same
/// loading/ready/failed semantics instead of reimplementing them.
pub(crate) async fn load_list<T, F, Fut>(
    query: ListQuery,
    fetch: F,
) -> ServiceResult<(Page<T>, ListQuery)>
where
    F: FnOnce(ListQuery) -> Fut,
    Fut: Future<Output = ApiResult<Page<T>>>,
{
    let mut controller = ListController::new();
    run_fetch(&mut controller, query, fetch).await;
    match controller.into_state() {
        ListState::Ready { page, query } => Ok((page, query)),
        ListState::Failed { error, .. } => Err(ServiceError::List(error)),
        ListState::Idle | ListState::Loading { .. } => Err(ServiceError::Internal(
            "list fetch did not complete".to_string(),
        )),
    }
}
