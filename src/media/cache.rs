// SPDX-License-Identifier: MPL-2.0
//! LRU cache of decoded high-resolution images.
//!
//! Revisiting an item in the lightbox shows the cached image immediately
//! instead of fetching it again. Entries are keyed by file path, so an image
//! the lazy loader already decoded is reused by the lightbox.

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Counters describing cache effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Returns the hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Count-bounded LRU of decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, ImageData>,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Stores `image` for `path`, evicting the least recently used entry if full.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) {
        if let Some((evicted, _)) = self.cache.push(path.clone(), image) {
            // `push` also returns the old value when the key was already present.
            if evicted != path {
                self.stats.evictions += 1;
            }
        }
        self.stats.insertions += 1;
    }

    /// Returns the cached image for `path`, marking it most recently used.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        match self.cache.get(path) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks membership without touching LRU order or stats.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Total decoded bytes currently held.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.cache.iter().map(|(_, image)| image.size_bytes()).sum()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
    }

    fn path(n: usize) -> PathBuf {
        PathBuf::from(format!("/gallery/full/{n:02}.jpg"))
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(ImageCache::new(0).capacity(), 1);
    }

    #[test]
    fn insert_and_get_image() {
        let mut cache = ImageCache::new(4);
        cache.insert(path(1), image(10, 10));

        let hit = cache.get(&path(1)).expect("cached");
        assert_eq!(hit.width, 10);
        assert_eq!(cache.memory_usage(), 400);
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.insert(path(1), image(1, 1));
        cache.insert(path(2), image(1, 1));
        // Touch 1 so 2 becomes the eviction candidate.
        let _ = cache.get(&path(1));
        cache.insert(path(3), image(1, 1));

        assert!(cache.contains(&path(1)));
        assert!(!cache.contains(&path(2)));
        assert!(cache.contains(&path(3)));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn reinserting_same_path_is_not_an_eviction() {
        let mut cache = ImageCache::new(2);
        cache.insert(path(1), image(1, 1));
        cache.insert(path(1), image(2, 2));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 0);
        assert_eq!(cache.get(&path(1)).map(|img| img.width), Some(2));
    }

    #[test]
    fn stats_track_hits_and_misses() {
        let mut cache = ImageCache::new(2);
        cache.insert(path(1), image(1, 1));
        let _ = cache.get(&path(1));
        let _ = cache.get(&path(9));

        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
        assert!((stats.hit_rate() - 50.0).abs() < 0.01);
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = ImageCache::new(3);
        cache.insert(path(1), image(1, 1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
