/// Clauses of a `SELECT`, in the order they must appear.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub enum Phase {
    #[default]
    Projection = 0,
    Collections = 1,
    Criteria = 2,
    Aggregates = 3,
    Having = 4,
    OrderBy = 5,
    LimitAndOffset = 6,
}
