use crate::domain::bird::Bird;
use crate::domain::specie::Specie;
use crate::pagination::Paginated;
use crate::query::ListQuery;

/// Data required to render the bird listing page.
#[derive(Debug)]
pub struct BirdListData {
    /// Current page of birds with its navigation strip.
    pub birds: Paginated<Bird>,
    /// Species for the filter dropdown; empty when the lookup failed.
    pub species: Vec<Specie>,
    /// Query echoed back so the filter controls reflect the active state.
    pub query: ListQuery,
}
