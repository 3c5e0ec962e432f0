//! In-memory caravan repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::caravan::{Caravan, CaravanError};
use crate::domain::foundation::CaravanId;
use crate::ports::CaravanRepository;

/// In-memory implementation of the caravan repository.
#[derive(Debug, Default)]
pub struct InMemoryCaravanRepository {
    caravans: Mutex<HashMap<CaravanId, Caravan>>,
}

impl InMemoryCaravanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.caravans.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CaravanRepository for InMemoryCaravanRepository {
    async fn add(&self, caravan: &Caravan) -> Result<(), CaravanError> {
        self.caravans
            .lock()
            .unwrap()
            .insert(*caravan.id(), caravan.clone());
        Ok(())
    }

    async fn update(&self, caravan: &Caravan) -> Result<(), CaravanError> {
        let mut caravans = self.caravans.lock().unwrap();
        if !caravans.contains_key(caravan.id()) {
            return Err(CaravanError::NotFound(*caravan.id()));
        }
        caravans.insert(*caravan.id(), caravan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CaravanId) -> Result<Option<Caravan>, CaravanError> {
        Ok(self.caravans.lock().unwrap().get(id).cloned())
    }

    async fn search_by_capacity(&self, min_capacity: u32) -> Result<Vec<Caravan>, CaravanError> {
        let mut matches: Vec<Caravan> = self
            .caravans
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.capacity() >= min_capacity)
            .cloned()
            .collect();
        // Deterministic order for callers and tests.
        matches.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(matches)
    }
}
