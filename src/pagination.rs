//! Page-window computation and navigation links for list templates.

use serde::Serialize;

use crate::list::Page;
use crate::query::ListQuery;

const LEFT_EDGE: usize = 2;
const LEFT_CURRENT: usize = 2;
const RIGHT_CURRENT: usize = 4;
const RIGHT_EDGE: usize = 2;

/// Computes the ordered window of page numbers to render, with `None` marking
/// an ellipsis gap between ranges.
///
/// The current page is clamped into `[1, total_pages]` first, so a stale
/// bookmark pointing past the end renders the last valid page's window.
/// `total_pages == 0` yields an empty window: no controls at all.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }
    let current = current_page.clamp(1, total_pages);

    let mut pages = Vec::new();

    let left_end = (1 + LEFT_EDGE).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current.saturating_sub(LEFT_CURRENT));
    let mid_end = (current + RIGHT_CURRENT + 1).min(total_pages + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(RIGHT_EDGE) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

/// One entry of the rendered pagination strip.
///
/// A gap (`number == None`) carries no URL and renders as an ellipsis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageLink {
    pub number: Option<usize>,
    pub url: Option<String>,
    pub current: bool,
}

/// A fetched page together with everything the template needs to render its
/// navigation controls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub links: Vec<PageLink>,
}

impl<T> Paginated<T> {
    /// Wraps a fetched page, building page links that reuse every filter of
    /// `query` except the page number itself.
    pub fn new(page: Page<T>, path: &str, query: &ListQuery) -> Self {
        let current = if page.total_pages == 0 {
            1
        } else {
            page.page_number.clamp(1, page.total_pages)
        };

        let links = page_window(page.total_pages, current)
            .into_iter()
            .map(|token| match token {
                Some(n) => PageLink {
                    number: Some(n),
                    url: Some(query.with_page(n).url_for(path)),
                    current: n == current,
                },
                None => PageLink {
                    number: None,
                    url: None,
                    current: false,
                },
            })
            .collect();

        Self {
            items: page.items,
            page: current,
            total_pages: page.total_pages,
            links,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}
