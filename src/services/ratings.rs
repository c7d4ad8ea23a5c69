use crate::api::RatingApi;
use crate::dto::ratings::{RatingListData, ValueFilter};
use crate::pagination::Paginated;
use crate::query::ListQuery;
use crate::services::{ServiceResult, load_list};

/// Loads one page of customer ratings plus the star-value filter strip and
/// the shop-wide average.
pub async fn load_rating_list<A>(api: &A, query: ListQuery) -> ServiceResult<RatingListData>
where
    A: RatingApi,
{
    let query = query.for_ratings();

    let average = match api.average_rating().await {
        Ok(average) => Some(average),
        Err(err) => {
            log::error!("Failed to load average rating: {err}");
            None
        }
    };

    let (page, query) = load_list(query, |q| async move { api.list_ratings(&q).await }).await?;

    let filters = value_filters(&query);

    Ok(RatingListData {
        ratings: Paginated::new(page, "/ratings", &query),
        average,
        filters,
        query,
    })
}

/// "All" plus one button per star value; selecting a filter resets the page.
fn value_filters(query: &ListQuery) -> Vec<ValueFilter> {
    let mut filters = vec![ValueFilter {
        label: "All".to_string(),
        url: query.with_value(None).url_for("/ratings"),
        active: query.value.is_none(),
    }];
    for value in (1..=5).rev() {
        filters.push(ValueFilter {
            label: format!("{value} stars"),
            url: query.with_value(Some(value)).url_for("/ratings"),
            active: query.value == Some(value),
        });
    }
    filters
}
