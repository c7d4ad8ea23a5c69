use validator::Validate;

use crate::api::{NestAdmin, NestApi, SpecieAdmin, SpecieApi};
use crate::domain::nest::Nest;
use crate::domain::specie::Specie;
use crate::dto::manager::{NestTableData, SpecieListData};
use crate::forms::manager::{AddNestForm, AddSpecieForm};
use crate::pagination::Paginated;
use crate::query::ListQuery;
use crate::services::{ServiceError, ServiceResult, load_list};

/// Loads one page of the manager species list.
pub async fn load_specie_list<A>(api: &A, query: ListQuery) -> ServiceResult<SpecieListData>
where
    A: SpecieApi,
{
    let (page, query) = load_list(query, |q| async move { api.species_page(&q).await }).await?;
    Ok(SpecieListData {
        species: Paginated::new(page, "/manager/species", &query),
        query,
    })
}

/// Validates the add-specie form and creates the species on the backend.
pub async fn add_specie<A>(api: &A, form: AddSpecieForm) -> ServiceResult<Specie>
where
    A: SpecieAdmin,
{
    if let Err(err) = form.validate() {
        log::error!("Add-specie form failed validation: {err}");
        return Err(ServiceError::Form("invalid species details".to_string()));
    }
    Ok(api.create_specie(&form.into()).await?)
}

/// Deletes a species on the backend.
pub async fn remove_specie<A>(api: &A, id: &str) -> ServiceResult<()>
where
    A: SpecieAdmin,
{
    let id = id.trim();
    if id.is_empty() {
        return Err(ServiceError::Form("missing species id".to_string()));
    }
    Ok(api.delete_specie(id).await?)
}

/// Loads one page of the manager nest table.
pub async fn load_nest_table<A>(api: &A, query: ListQuery) -> ServiceResult<NestTableData>
where
    A: NestApi,
{
    let (page, query) = load_list(query, |q| async move { api.list_nests(&q).await }).await?;
    Ok(NestTableData {
        nests: Paginated::new(page, "/manager/nests", &query),
        query,
    })
}

/// Validates the add-nest form and creates the nest on the backend.
pub async fn add_nest<A>(api: &A, form: AddNestForm) -> ServiceResult<Nest>
where
    A: NestAdmin,
{
    if let Err(err) = form.validate() {
        log::error!("Add-nest form failed validation: {err}");
        return Err(ServiceError::Form("invalid nest details".to_string()));
    }
    Ok(api.create_nest(&form.into()).await?)
}
