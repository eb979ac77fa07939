use super::query_structs::PageQuery;
use anyhow::anyhow;
use caresignal_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
    collection
        .lock()
        .map_err(|_| anyhow!("In-memory collection lock was poisoned"))
}

/// Assigns the next id and stores the value created from it.
/// Values are never removed so the next id is the collection size + 1.
pub fn insert<T: Clone, F: FnOnce(ID) -> T>(
    collection: &Mutex<Vec<T>>,
    create: F,
) -> anyhow::Result<T> {
    let mut collection = lock(collection)?;
    let id = ID::from(collection.len() as i64 + 1);
    let val = create(id);
    collection.push(val.clone());
    Ok(val)
}

pub fn find_page<T: Clone>(collection: &Mutex<Vec<T>>, query: PageQuery) -> anyhow::Result<Vec<T>> {
    let collection = lock(collection)?;
    Ok(collection
        .iter()
        .skip(query.skip)
        .take(query.limit)
        .cloned()
        .collect())
}

pub fn find<T: Clone + Entity>(collection: &Mutex<Vec<T>>, id: &ID) -> Option<T> {
    lock(collection)
        .ok()?
        .iter()
        .find(|val| val.id() == id)
        .cloned()
}
