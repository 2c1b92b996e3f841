use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::EncodingError;

use super::{CorrectionLevel, MatrixGenerator, QrCodeGenerator, QrMatrix};

/// One memoized matrix and the key it was built from.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub text: String,
    pub level: CorrectionLevel,
    pub matrix: Arc<QrMatrix>,
}

impl CacheEntry {
    #[inline]
    fn matches(&self, text: &str, level: CorrectionLevel) -> bool {
        self.text == text && self.level == level
    }
}

/// Get-or-build memoization of generated matrices.
///
/// Keys compare by exact `text` and correction level; there is no
/// normalization. Entries are never evicted, so the cache lives as long as the
/// payload set it serves is small.
///
/// The lookup and the insert run under one lock, so two threads asking for
/// the same missing key trigger a single build.
#[derive(Debug)]
pub struct MatrixCache<G = QrCodeGenerator> {
    generator: G,
    entries: Mutex<Vec<CacheEntry>>,
}

impl Default for MatrixCache<QrCodeGenerator> {
    fn default() -> Self {
        Self::new(QrCodeGenerator)
    }
}

impl<G: MatrixGenerator> MatrixCache<G> {
    pub fn new(generator: G) -> Self {
        Self { generator, entries: Mutex::new(Vec::new()) }
    }

    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Returns the cached matrix for `(text, level)`, building it on a miss.
    ///
    /// Generator failures propagate unchanged and leave the cache untouched.
    pub fn get_or_build(
        &self,
        text: &str,
        level: CorrectionLevel,
    ) -> Result<Arc<QrMatrix>, EncodingError> {
        let mut entries = self.entries.lock();

        if let Some(entry) = entries.iter().find(|e| e.matches(text, level)) {
            log::debug!("matrix cache hit: level={level:?} len={}", text.len());
            return Ok(Arc::clone(&entry.matrix));
        }

        log::debug!("matrix cache miss: level={level:?} len={}", text.len());
        let matrix = Arc::new(self.generator.build(text, level)?);
        entries.push(CacheEntry {
            text: text.to_owned(),
            level,
            matrix: Arc::clone(&matrix),
        });
        Ok(matrix)
    }

    pub fn contains(&self, text: &str, level: CorrectionLevel) -> bool {
        self.entries.lock().iter().any(|e| e.matches(text, level))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    /// Counts builds and returns a tiny matrix whose top-left module encodes
    /// the correction level, so tests can tell matrices apart.
    #[derive(Default)]
    struct CountingGenerator {
        builds: AtomicUsize,
    }

    impl CountingGenerator {
        fn builds(&self) -> usize {
            self.builds.load(Ordering::SeqCst)
        }
    }

    impl MatrixGenerator for CountingGenerator {
        fn build(&self, text: &str, level: CorrectionLevel) -> Result<QrMatrix, EncodingError> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            if text.len() > 8 {
                return Err(EncodingError::DataTooLong { len: text.len(), level });
            }
            let dark = level == CorrectionLevel::High;
            QrMatrix::from_rows(text, level, &[&[dark, true], &[false, true]])
        }
    }

    const Q: CorrectionLevel = CorrectionLevel::Quartile;
    const L: CorrectionLevel = CorrectionLevel::Low;

    // ── hits and misses ───────────────────────────────────────────────────

    #[test]
    fn repeated_key_builds_once() {
        let cache = MatrixCache::new(CountingGenerator::default());
        let a = cache.get_or_build("HELLO", Q).unwrap();
        let b = cache.get_or_build("HELLO", Q).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.generator().builds(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn same_text_different_level_builds_again() {
        let cache = MatrixCache::new(CountingGenerator::default());
        let q = cache.get_or_build("SAME", Q).unwrap();
        let l = cache.get_or_build("SAME", L).unwrap();
        assert_eq!(cache.generator().builds(), 2);
        assert_eq!(q.correction_level(), Q);
        assert_eq!(l.correction_level(), L);
        assert!(cache.contains("SAME", Q) && cache.contains("SAME", L));
    }

    #[test]
    fn keys_are_not_normalized() {
        let cache = MatrixCache::new(CountingGenerator::default());
        cache.get_or_build("abc", Q).unwrap();
        cache.get_or_build("ABC", Q).unwrap();
        cache.get_or_build("abc ", Q).unwrap();
        assert_eq!(cache.generator().builds(), 3);
    }

    #[test]
    fn failures_propagate_and_are_not_cached() {
        let cache = MatrixCache::new(CountingGenerator::default());
        let err = cache.get_or_build("far too long", Q).unwrap_err();
        assert!(matches!(err, EncodingError::DataTooLong { len: 12, .. }));
        assert!(cache.is_empty());
        cache.get_or_build("far too long", Q).unwrap_err();
        assert_eq!(cache.generator().builds(), 2);
    }

    // ── sharing ───────────────────────────────────────────────────────────

    #[test]
    fn concurrent_callers_share_one_build() {
        let cache = Arc::new(MatrixCache::new(CountingGenerator::default()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_build("RACE", Q).unwrap())
            })
            .collect();
        let matrices: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.generator().builds(), 1);
        assert!(matrices.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn default_cache_uses_real_generator() {
        let cache = MatrixCache::default();
        let a = cache.get_or_build("HELLO", Q).unwrap();
        let b = MatrixCache::default().get_or_build("HELLO", Q).unwrap();
        assert!(a.same_modules(&b));
    }
}
