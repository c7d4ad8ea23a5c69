use crate::api::{NestApi, SpecieApi};
use crate::dto::nests::NestListData;
use crate::pagination::Paginated;
use crate::query::ListQuery;
use crate::services::{ServiceResult, load_list};

/// Loads one page of the nest listing together with the species filter
/// options.
pub async fn load_nest_list<A>(api: &A, query: ListQuery) -> ServiceResult<NestListData>
where
    A: NestApi + SpecieApi,
{
    let species = match api.list_species().await {
        Ok(species) => species,
        Err(err) => {
            log::error!("Failed to load species filter options: {err}");
            Vec::new()
        }
    };

    let (page, query) = load_list(query, |q| async move { api.list_nests(&q).await }).await?;

    Ok(NestListData {
        nests: Paginated::new(page, "/nests", &query),
        species,
        query,
    })
}
