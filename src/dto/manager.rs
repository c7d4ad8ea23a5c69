use crate::domain::nest::Nest;
use crate::domain::specie::Specie;
use crate::pagination::Paginated;
use crate::query::ListQuery;

/// Data required to render the manager species list.
pub struct SpecieListData {
    pub species: Paginated<Specie>,
    pub query: ListQuery,
}

/// Data required to render the manager nest table.
pub struct NestTableData {
    pub nests: Paginated<Nest>,
    pub query: ListQuery,
}
