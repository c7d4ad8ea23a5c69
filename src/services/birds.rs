use crate::api::{BirdApi, SpecieApi};
use crate::dto::birds::BirdListData;
use crate::pagination::Paginated;
use crate::query::ListQuery;
use crate::services::{ServiceResult, load_list};

/// Loads one page of the bird listing together with the species filter
/// options.
///
/// A failing species lookup degrades to an empty dropdown; only the list
/// fetch itself decides between the ready and failed page states.
pub async fn load_bird_list<A>(api: &A, query: ListQuery) -> ServiceResult<BirdListData>
where
    A: BirdApi + SpecieApi,
{
    let species = match api.list_species().await {
        Ok(species) => species,
        Err(err) => {
            log::error!("Failed to load species filter options: {err}");
            Vec::new()
        }
    };

    let (page, query) = load_list(query, |q| async move { api.list_birds(&q).await }).await?;

    Ok(BirdListData {
        birds: Paginated::new(page, "/birds", &query),
        species,
        query,
    })
}
