//! In-Memory Storage Engine
//!
//! One table per entity type: rows keyed by identifier, plus the sequence
//! new identifiers are drawn from. Handles are cheap to clone and share
//! the same table.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use datajpa_domain::model::entity::Entity;
use datajpa_domain::repository::error::RepositoryError;
use tracing::debug;

#[derive(Debug)]
struct Table<E: Entity> {
    rows: BTreeMap<E::Id, E>,
    /// Last identifier handed out
    sequence: u64,
}

/// Thread-safe table of `E` rows using RwLock.
#[derive(Debug)]
pub struct InMemoryStore<E: Entity> {
    table: Arc<RwLock<Table<E>>>,
}

impl<E: Entity> Clone for InMemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                sequence: 0,
            })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table<E>>, RepositoryError> {
        self.table.read().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table<E>>, RepositoryError> {
        self.table.write().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })
    }

    /// Insert or replace a row.
    ///
    /// A transient entity gets the next sequence value. A persisted one is
    /// stored under its own identifier and the sequence moves past it, so
    /// later inserts never collide.
    pub fn save(&self, mut entity: E) -> Result<E, RepositoryError> {
        let mut table = self.write()?;
        let id = match entity.id() {
            Some(id) => {
                table.sequence = table.sequence.max(id.into());
                debug!("update {} id={}", E::NAME, id);
                id
            }
            None => {
                table.sequence = table.sequence.checked_add(1).ok_or_else(|| {
                    RepositoryError::Persistence {
                        message: format!("{} id sequence exhausted", E::NAME),
                    }
                })?;
                let id = E::Id::from(table.sequence);
                entity.assign_id(id);
                debug!("insert {} id={}", E::NAME, id);
                id
            }
        };
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    pub fn find_by_id(&self, id: E::Id) -> Result<Option<E>, RepositoryError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    /// All rows in identifier order
    pub fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    /// Rows matching `predicate`, in identifier order
    pub fn find_where<P>(&self, predicate: P) -> Result<Vec<E>, RepositoryError>
    where
        P: Fn(&E) -> bool,
    {
        Ok(self
            .read()?
            .rows
            .values()
            .filter(|&row| predicate(row))
            .cloned()
            .collect())
    }

    pub fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.rows.len())
    }

    pub fn contains(&self, id: E::Id) -> Result<bool, RepositoryError> {
        Ok(self.read()?.rows.contains_key(&id))
    }

    /// Remove a row; returns whether it existed
    pub fn remove(&self, id: E::Id) -> Result<bool, RepositoryError> {
        let removed = self.write()?.rows.remove(&id).is_some();
        debug!("delete {} id={} removed={}", E::NAME, id, removed);
        Ok(removed)
    }

    /// Drop every row. The sequence keeps counting.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.write()?.rows.clear();
        Ok(())
    }
}
