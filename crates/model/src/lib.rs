use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

pub mod connection;
pub mod journey;
pub mod station;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>, V::IdType: Deserialize<'de>"))]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}

impl<V> PartialEq for WithId<V>
where
    V: HasId + PartialEq,
    V::IdType: Serialize + Debug + Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.content == other.content
    }
}
