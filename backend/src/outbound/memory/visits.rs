//! Visit store keyed by visit identifier.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::Visit;
use crate::domain::ports::{VisitQuery, VisitQueryError};

/// Visits held in memory.
#[derive(Debug, Default)]
pub struct InMemoryVisitQuery {
    visits: RwLock<HashMap<u32, Visit>>,
}

impl InMemoryVisitQuery {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `visit`, replacing any visit with the same identifier.
    pub fn insert(&self, visit: Visit) {
        self.visits
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(visit.visit_id(), visit);
    }
}

impl FromIterator<Visit> for InMemoryVisitQuery {
    fn from_iter<I: IntoIterator<Item = Visit>>(iter: I) -> Self {
        let query = Self::new();
        for visit in iter {
            query.insert(visit);
        }
        query
    }
}

#[async_trait]
impl VisitQuery for InMemoryVisitQuery {
    async fn find_visit(&self, visit_id: u32) -> Result<Option<Visit>, VisitQueryError> {
        Ok(self
            .visits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&visit_id)
            .cloned())
    }
}
