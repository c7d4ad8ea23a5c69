use crate::domain::nest::Nest;
use crate::domain::specie::Specie;
use crate::pagination::Paginated;
use crate::query::ListQuery;

/// Data required to render the nest listing page.
pub struct NestListData {
    pub nests: Paginated<Nest>,
    pub species: Vec<Specie>,
    pub query: ListQuery,
}
