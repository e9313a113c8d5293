use model::WithId;
use utility::id::{HasId, Id};

pub mod journey;
pub mod station;

/// A row that maps onto one model entity with a text id.
pub trait DatabaseRow {
    type Model: HasId<IdType = String>;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Self::Model;
}

pub fn with_id<R: DatabaseRow>(row: R) -> WithId<R::Model> {
    WithId::new(row.get_id(), row.to_model())
}
