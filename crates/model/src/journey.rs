use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::{station::Station, WithId};

/// A route saved by a user. It is independent of any scheduled connection.
/// The order of `via` is the order in which the stations are passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub from: WithId<Station>,
    pub to: WithId<Station>,
    pub via: Vec<WithId<Station>>,
}

impl Journey {
    pub fn new(
        from: WithId<Station>,
        to: WithId<Station>,
        via: Vec<WithId<Station>>,
    ) -> Self {
        Self { from, to, via }
    }

    /// All stations in travel order: from, via..., to.
    pub fn stations(&self) -> impl Iterator<Item = &WithId<Station>> {
        std::iter::once(&self.from)
            .chain(self.via.iter())
            .chain(std::iter::once(&self.to))
    }
}

impl HasId for Journey {
    type IdType = String;
}
