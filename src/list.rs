//! Generic paginated-list controller.
//!
//! Every list page in the storefront goes through this machinery: decode the
//! query state, issue a fetch against the backend, and apply the result to a
//! small state machine (`Idle -> Loading -> Ready | Failed`). Fetches are
//! tagged with a monotonically increasing sequence number; a completion whose
//! tag no longer matches the latest issued fetch is discarded, so a
//! late-resolving superseded request can never overwrite newer state.

use std::future::Future;

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::query::ListQuery;

/// One fetched page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum PageInvariantError {
    #[error("page holds {count} items but page size is {page_size}")]
    Overfull { count: usize, page_size: usize },
    #[error("total pages is zero but the page holds {count} items")]
    PhantomItems { count: usize },
}

impl<T> Page<T> {
    /// Builds a page, rejecting payloads that violate the page invariants:
    /// at most `page_size` items, and no items at all when `total_pages` is 0.
    pub fn new(
        items: Vec<T>,
        page_number: usize,
        page_size: usize,
        total_pages: usize,
    ) -> Result<Self, PageInvariantError> {
        if items.len() > page_size {
            return Err(PageInvariantError::Overfull {
                count: items.len(),
                page_size,
            });
        }
        if total_pages == 0 && !items.is_empty() {
            return Err(PageInvariantError::PhantomItems { count: items.len() });
        }
        Ok(Self {
            items,
            page_number: page_number.max(1),
            page_size,
            total_pages,
        })
    }

    /// A page with no results at all.
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_number: 1,
            page_size,
            total_pages: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// Rendering state of a single list instance.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    Loading { seq: u64 },
    Ready { page: Page<T>, query: ListQuery },
    Failed { error: String, query: ListQuery },
}

/// Handle for one issued fetch. Carries the sequence tag that decides whether
/// its completion still applies, and the exact query to replay on retry.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    query: ListQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}

/// Drives the fetch lifecycle of one list page.
#[derive(Debug)]
pub struct ListController<T> {
    state: ListState<T>,
    seq: u64,
}

impl<T> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListController<T> {
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
            seq: 0,
        }
    }

    /// Issues a new fetch for `query`, superseding any fetch still in flight,
    /// and enters `Loading`.
    pub fn begin(&mut self, query: ListQuery) -> FetchTicket {
        self.seq += 1;
        self.state = ListState::Loading { seq: self.seq };
        FetchTicket {
            seq: self.seq,
            query,
        }
    }

    /// Applies a fetch result. Returns `false` when the ticket was superseded
    /// by a later `begin`, in which case the state is left untouched.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Page<T>, ApiError>) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        self.state = match result {
            Ok(page) => ListState::Ready {
                page,
                query: ticket.query,
            },
            Err(err) => ListState::Failed {
                error: err.to_string(),
                query: ticket.query,
            },
        };
        true
    }

    /// From `Failed`, re-issues a ticket for the identical query.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let query = match &self.state {
            ListState::Failed { query, .. } => query.clone(),
            _ => return None,
        };
        Some(self.begin(query))
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn into_state(self) -> ListState<T> {
        self.state
    }

    pub fn ready_page(&self) -> Option<&Page<T>> {
        match &self.state {
            ListState::Ready { page, .. } => Some(page),
            _ => None,
        }
    }
}

/// Runs one full fetch cycle: issue a ticket, await the fetch, apply the
/// result. Returns `false` if the result arrived stale and was discarded.
pub async fn run_fetch<T, F, Fut>(
    controller: &mut ListController<T>,
    query: ListQuery,
    fetch: F,
) -> bool
where
    F: FnOnce(ListQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let ticket = controller.begin(query);
    let result = fetch(ticket.query().clone()).await;
    controller.complete(ticket, result)
}
