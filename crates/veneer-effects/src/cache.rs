//! Opt-in cache of compiled layers.
//!
//! Keys are content based: the drawable's fingerprint, the geometry config's
//! fingerprint and the target size. Equal keys always compile to equal
//! pixels, so a hit can be handed out as-is.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use veneer_engine::coords::PixelSize;
use veneer_engine::geometry::GeometryResolver;

use crate::compositor::{CompiledLayer, EffectDrawable};
use crate::error::EffectError;

/// The key for a cached layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerKey {
    pub drawable: u64,
    pub geometry: u64,
    pub size: PixelSize,
}

impl LayerKey {
    pub fn new(drawable: &EffectDrawable, resolver: &GeometryResolver, size: PixelSize) -> Self {
        Self { drawable: drawable.fingerprint(), geometry: resolver.config().fingerprint(), size }
    }
}

type Slot = Arc<OnceLock<Result<Arc<CompiledLayer>, EffectError>>>;

#[derive(Debug, Default)]
struct Entries {
    map: HashMap<LayerKey, Slot>,
    /// Insertion order, oldest first.
    order: VecDeque<LayerKey>,
}

/// Shared cache of compiled layers.
///
/// Lookups take a read lock. A miss inserts an empty slot under the write
/// lock and compiles outside of it, so each key compiles at most once and
/// concurrent requests for it wait on the same slot.
#[derive(Debug, Default)]
pub struct LayerCache {
    entries: RwLock<Entries>,
    /// `None` keeps every entry.
    capacity: Option<usize>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that evicts its oldest entry beyond `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity: Some(capacity.max(1)), ..Self::default() }
    }

    /// Compiled layer for `drawable` at `size`, compiling it on first use.
    pub fn get_or_compile(
        &self,
        drawable: &EffectDrawable,
        resolver: &GeometryResolver,
        size: PixelSize,
    ) -> Result<Arc<CompiledLayer>, EffectError> {
        let key = LayerKey::new(drawable, resolver, size);
        let slot = self.slot(key);
        slot.get_or_init(|| {
            log::debug!("layer cache miss for {:016x} at {size}", key.drawable);
            drawable.compile_with(resolver, size).map(Arc::new)
        })
        .clone()
    }

    fn slot(&self, key: LayerKey) -> Slot {
        let existing = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .get(&key)
            .cloned();
        if let Some(slot) = existing {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return slot;
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = entries.map.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(slot);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let slot = Slot::default();
        entries.map.insert(key, Arc::clone(&slot));
        entries.order.push_back(key);
        if let Some(capacity) = self.capacity {
            while entries.order.len() > capacity {
                if let Some(old) = entries.order.pop_front() {
                    entries.map.remove(&old);
                }
            }
        }
        slot
    }

    pub fn contains(&self, key: &LayerKey) -> bool {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.map.clear();
        entries.order.clear();
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits.load(Ordering::Relaxed), self.misses.load(Ordering::Relaxed))
    }
}
