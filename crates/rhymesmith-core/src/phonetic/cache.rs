//! Bounded word → key cache.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use crate::language::Language;

use super::PhoneticProvider;

type CacheKey = (Language, String);

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, String>,
    /// Insertion order, oldest first.
    order: VecDeque<CacheKey>,
}

/// Phonetic-key cache with a fixed entry cap.
///
/// When an insert pushes the size past the cap, the oldest half of the
/// entries (by insertion, not by access) is dropped. A capacity of zero
/// disables caching.
#[derive(Debug)]
pub struct PhoneticCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl PhoneticCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Maximum number of entries.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached key for `word`, if present.
    pub fn get(&self, language: Language, word: &str) -> Option<String> {
        self.lock()
            .entries
            .get(&(language, word.to_string()))
            .cloned()
    }

    /// Return the cached key, computing and storing it on a miss.
    ///
    /// `compute` runs without the lock held.
    pub fn get_or_insert_with(
        &self,
        language: Language,
        word: &str,
        compute: impl FnOnce() -> String,
    ) -> String {
        if self.capacity == 0 {
            return compute();
        }
        if let Some(hit) = self.get(language, word) {
            return hit;
        }
        let value = compute();
        self.insert(language, word, value.clone());
        value
    }

    fn insert(&self, language: Language, word: &str, value: String) {
        let mut state = self.lock();
        let key = (language, word.to_string());
        if state.entries.contains_key(&key) {
            return;
        }
        state.entries.insert(key.clone(), value);
        state.order.push_back(key);

        if state.entries.len() > self.capacity {
            let evict = state.entries.len().div_ceil(2);
            for _ in 0..evict {
                if let Some(oldest) = state.order.pop_front() {
                    state.entries.remove(&oldest);
                }
            }
            tracing::debug!(
                evicted = evict,
                remaining = state.entries.len(),
                "phonetic cache evicted oldest half"
            );
        }
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Wraps a provider so repeated rhyme keys come from a [`PhoneticCache`].
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    cache: PhoneticCache,
}

impl<P: PhoneticProvider> CachedProvider<P> {
    /// Cache up to `capacity` keys from `inner`.
    pub fn new(inner: P, capacity: usize) -> Self {
        Self {
            inner,
            cache: PhoneticCache::new(capacity),
        }
    }

    /// The underlying cache.
    pub const fn cache(&self) -> &PhoneticCache {
        &self.cache
    }
}

impl<P: PhoneticProvider> PhoneticProvider for CachedProvider<P> {
    fn transcribe(&self, word: &str, language: Language) -> String {
        self.inner.transcribe(word, language)
    }

    fn rhyme_key(&self, word: &str, language: Language) -> String {
        self.cache.get_or_insert_with(language, word, || {
            self.inner.rhyme_key(word, language)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl PhoneticProvider for CountingProvider {
        fn transcribe(&self, word: &str, _language: Language) -> String {
            word.to_string()
        }

        fn rhyme_key(&self, word: &str, _language: Language) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            word.chars().rev().take(2).collect()
        }
    }

    #[test]
    fn hit_skips_computation() {
        let cache = PhoneticCache::new(8);
        let first = cache.get_or_insert_with(Language::En, "night", || "aɪt".to_string());
        let second = cache.get_or_insert_with(Language::En, "night", || unreachable!());
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn languages_are_separate_entries() {
        let cache = PhoneticCache::new(8);
        cache.get_or_insert_with(Language::En, "mare", || "en".to_string());
        cache.get_or_insert_with(Language::It, "mare", || "it".to_string());
        assert_eq!(cache.get(Language::En, "mare").as_deref(), Some("en"));
        assert_eq!(cache.get(Language::It, "mare").as_deref(), Some("it"));
    }

    #[test]
    fn overflow_drops_oldest_half() {
        let cache = PhoneticCache::new(4);
        for word in ["one", "two", "three", "four", "five"] {
            cache.get_or_insert_with(Language::En, word, || word.to_string());
        }
        // Five entries exceeded the cap of four; the three oldest went.
        assert_eq!(cache.len(), 2);
        assert!(cache.get(Language::En, "one").is_none());
        assert!(cache.get(Language::En, "three").is_none());
        assert!(cache.get(Language::En, "four").is_some());
        assert!(cache.get(Language::En, "five").is_some());
    }

    #[test]
    fn eviction_ignores_access_order() {
        let cache = PhoneticCache::new(2);
        cache.get_or_insert_with(Language::En, "old", || "a".to_string());
        cache.get_or_insert_with(Language::En, "mid", || "b".to_string());
        // Reading "old" does not protect it.
        assert!(cache.get(Language::En, "old").is_some());
        cache.get_or_insert_with(Language::En, "new", || "c".to_string());
        assert!(cache.get(Language::En, "old").is_none());
        assert!(cache.get(Language::En, "new").is_some());
    }

    #[test]
    fn zero_capacity_disables_cache() {
        let cache = PhoneticCache::new(0);
        cache.get_or_insert_with(Language::En, "word", || "rd".to_string());
        assert!(cache.is_empty());
    }

    #[test]
    fn cached_provider_computes_once() {
        let inner = Arc::new(CountingProvider::default());
        let cached = CachedProvider::new(Arc::clone(&inner), 16);
        for _ in 0..3 {
            assert_eq!(cached.rhyme_key("night", Language::En), "th");
        }
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.cache().len(), 1);
    }

    #[test]
    fn cache_is_shareable_across_threads() {
        let cache = Arc::new(PhoneticCache::new(64));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..32 {
                        let word = format!("w{t}-{i}");
                        cache.get_or_insert_with(Language::En, &word, || word.clone());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.len() <= cache.capacity());
    }
}
