//! Entity aggregation over paginated API results.
//!
//! Every ranking in poprank has the same shape: walk a list of collections
//! (playlists, search queries), pull one entity reference out of each item
//! (first artist of a track, the video itself), count appearances per entity,
//! enrich each distinct entity with one detail fetch, filter on those details
//! and keep the best `top_n` by a numeric key.
//!
//! The per-variant rules live in an [`EntitySource`]; [`aggregate`] runs the
//! pipeline.
//!
//! Failure policy: configuration and authentication errors abort the run.
//! Request errors of a single collection or a single enrichment fetch are
//! logged and only drop that collection or entity.

use std::collections::HashMap;

use crate::{
    debug,
    error::ApiError,
    types::{Entity, EntityRef},
    warning,
};

/// Rules and data access for one kind of ranking.
#[allow(async_fn_in_trait)]
pub trait EntitySource {
    /// A container of raw items, e.g. a playlist or a search query.
    type Collection;
    /// A raw item inside a collection, e.g. a playlist track.
    type Item;
    /// Result of the enrichment fetch for one entity.
    type Details;

    /// Human readable label of a collection, used in log lines.
    fn describe(&self, collection: &Self::Collection) -> String;

    async fn fetch_items(
        &mut self,
        collection: &Self::Collection,
    ) -> Result<Vec<Self::Item>, ApiError>;

    /// Extracts the primary entity of an item, `None` for empty or deleted items.
    fn classify(&self, item: &Self::Item) -> Option<EntityRef>;

    async fn fetch_details(&mut self, entity_id: &str) -> Result<Self::Details, ApiError>;

    /// Copies tags and score from the details onto the entity.
    fn apply_details(&self, entity: &mut Entity, details: &Self::Details);
}

/// Appearance counts keyed by entity id, remembering first-seen order.
#[derive(Debug, Default)]
pub struct AggregateTable {
    index: HashMap<String, usize>,
    entities: Vec<Entity>,
}

impl AggregateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one observation and returns the entity's new count.
    ///
    /// The first observation stores the name; later ones only bump the count.
    pub fn observe(&mut self, entity: EntityRef) -> u32 {
        let slot = match self.index.get(&entity.id) {
            Some(slot) => *slot,
            None => {
                let slot = self.entities.len();
                self.index.insert(entity.id.clone(), slot);
                self.entities.push(Entity::new(entity.id, entity.name));
                slot
            }
        };

        let stored = &mut self.entities[slot];
        stored.count += 1;
        stored.count
    }

    pub fn get(&self, entity_id: &str) -> Option<&Entity> {
        self.index.get(entity_id).map(|slot| &self.entities[*slot])
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in first-seen order.
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}

/// Sorts by `rank_key` descending and keeps the first `top_n`.
///
/// The sort is stable, so entities with equal keys keep their input order.
pub fn rank<R>(mut entities: Vec<Entity>, rank_key: R, top_n: usize) -> Vec<Entity>
where
    R: Fn(&Entity) -> u64,
{
    entities.sort_by(|a, b| rank_key(b).cmp(&rank_key(a)));
    entities.truncate(top_n);
    entities
}

/// Runs the aggregation pipeline.
///
/// 1. Fetches the items of each collection; a failing collection is skipped.
/// 2. Counts the primary entity of every item.
/// 3. Fetches details once per distinct entity, in first-seen order; entities
///    without details are dropped.
/// 4. Keeps entities whose details pass `filter`.
/// 5. Ranks by `rank_key` and truncates to `top_n`.
///
/// # Errors
///
/// Only fatal errors ([`ApiError::is_fatal`]) are returned.
pub async fn aggregate<S, F, R>(
    source: &mut S,
    collections: &[S::Collection],
    filter: F,
    rank_key: R,
    top_n: usize,
) -> Result<Vec<Entity>, ApiError>
where
    S: EntitySource,
    F: Fn(&S::Details) -> bool,
    R: Fn(&Entity) -> u64,
{
    let mut table = AggregateTable::new();

    for collection in collections {
        let items = match source.fetch_items(collection).await {
            Ok(items) => items,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warning!("Skipping {}: {}", source.describe(collection), e);
                continue;
            }
        };

        debug!(
            "{} yielded {} items",
            source.describe(collection),
            items.len()
        );
        for item in &items {
            if let Some(entity) = source.classify(item) {
                table.observe(entity);
            }
        }
    }

    if table.is_empty() {
        return Ok(Vec::new());
    }

    let mut qualified = Vec::with_capacity(table.len());
    for mut entity in table.into_entities() {
        match source.fetch_details(&entity.id).await {
            Ok(details) => {
                if filter(&details) {
                    source.apply_details(&mut entity, &details);
                    qualified.push(entity);
                }
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => warning!("No details for {} ({}): {}", entity.name, entity.id, e),
        }
    }

    Ok(rank(qualified, rank_key, top_n))
}
