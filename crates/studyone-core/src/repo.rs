//! Generic list repository over the key-value store.
//!
//! Every domain collection follows the same contract: load one JSON array
//! from its key (absent or unparsable means empty), mutate the in-memory
//! list, write the whole array back. One parameterized repository replaces
//! per-module copies of that logic.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, Result, ValidationError};
use crate::storage::Store;

/// A record persisted as one element of its collection's JSON array.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Store key owning this collection.
    const KEY: &'static str;

    /// Stable client-generated id.
    fn id(&self) -> &str;

    /// Ad hoc pre-create checks (non-empty name/title/text).
    fn validate(&self) -> Result<(), ValidationError>;
}

/// CRUD over one entity collection.
pub struct Repository<'s, T: Entity> {
    store: &'s Store,
    _marker: std::marker::PhantomData<T>,
}

impl<'s, T: Entity> Repository<'s, T> {
    pub fn new(store: &'s Store) -> Self {
        Self {
            store,
            _marker: std::marker::PhantomData,
        }
    }

    /// Load the whole collection. Absent or unparsable data is an empty
    /// list, never an error.
    ///
    /// # Errors
    /// Returns an error only if the store query itself fails.
    pub fn load(&self) -> Result<Vec<T>> {
        Ok(self.store.get_json(T::KEY)?)
    }

    /// Overwrite the whole collection.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn save(&self, items: &[T]) -> Result<()> {
        self.store.put_json(T::KEY, &items)?;
        Ok(())
    }

    /// Validate and append one record.
    ///
    /// # Errors
    /// Returns a validation error without writing when required fields are
    /// empty, or a store error if the write fails.
    pub fn create(&self, item: T) -> Result<T> {
        item.validate()?;
        let mut items = self.load()?;
        items.push(item.clone());
        self.save(&items)?;
        Ok(item)
    }

    /// Replace the record with the same id.
    ///
    /// # Errors
    /// Returns `NotFound` when no record carries the id, a validation error
    /// when the replacement is invalid; neither writes anything.
    pub fn update(&self, item: T) -> Result<T> {
        item.validate()?;
        let mut items = self.load()?;
        match items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => *slot = item.clone(),
            None => {
                return Err(CoreError::NotFound {
                    key: T::KEY,
                    id: item.id().to_string(),
                })
            }
        }
        self.save(&items)?;
        Ok(item)
    }

    /// Delete by id, rewriting the filtered array. Returns whether a record
    /// was actually removed.
    ///
    /// # Errors
    /// Returns an error if the rewrite fails.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    /// Returns an error only if the load fails.
    pub fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.load()?.into_iter().find(|item| item.id() == id))
    }
}
