//! In-process state owned by the frontend: live attempts and a cache of
//! records already fetched from the backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ulid::Ulid;

use crate::attempt::Attempt;
use crate::models::QuizRecord;

/// Live attempts keyed by an unguessable token. One entry per in-progress
/// (or freshly graded) attempt; abandoning or retaking removes it. Entries
/// orphaned by plain navigation (the nav tabs never touch the store) are
/// swept by age on the next insert, which ULID tokens make cheap: the
/// timestamp is in the key.
#[derive(Clone, Default)]
pub struct AttemptStore {
    inner: Arc<Mutex<HashMap<Ulid, Attempt>>>,
}

const ATTEMPT_TTL_MS: u64 = 60 * 60 * 1000;

fn sweep(attempts: &mut HashMap<Ulid, Attempt>, now_ms: u64) {
    let cutoff = now_ms.saturating_sub(ATTEMPT_TTL_MS);
    attempts.retain(|token, _| token.timestamp_ms() >= cutoff);
}

impl AttemptStore {
    pub fn insert(&self, attempt: Attempt) -> Ulid {
        let token = Ulid::new();
        let mut attempts = self.inner.lock().expect("attempt store lock poisoned");
        sweep(&mut attempts, token.timestamp_ms());
        attempts.insert(token, attempt);
        token
    }

    /// Run `f` against the attempt behind `token`, if it is still live.
    pub fn with<R>(&self, token: Ulid, f: impl FnOnce(&mut Attempt) -> R) -> Option<R> {
        self.inner
            .lock()
            .expect("attempt store lock poisoned")
            .get_mut(&token)
            .map(f)
    }

    /// Drop the attempt behind `token`, returning it if it was still live.
    pub fn remove(&self, token: Ulid) -> Option<Attempt> {
        self.inner
            .lock()
            .expect("attempt store lock poisoned")
            .remove(&token)
    }
}

/// Records already fetched from the backend, keyed by id, so that detail,
/// review and take requests can resolve a record without another round trip.
///
/// The cache carries a generation counter. Callers snapshot the generation
/// before awaiting a fetch and pass it back to [`RecordCache::store`]; the
/// result is dropped if the cache was invalidated in the meantime. This is
/// the "apply the response only if the initiating context is still live"
/// guard: there is no request cancellation, so a stale response must never
/// overwrite fresher state.
#[derive(Clone, Default)]
pub struct RecordCache {
    inner: Arc<Mutex<CacheInner>>,
}

#[derive(Default)]
struct CacheInner {
    generation: u64,
    records: HashMap<i64, QuizRecord>,
}

impl RecordCache {
    pub fn generation(&self) -> u64 {
        self.inner.lock().expect("record cache lock poisoned").generation
    }

    /// Drop all cached records and start a new generation. Used when the
    /// user forces a regeneration, so a bypassed backend cache cannot be
    /// shadowed by a stale frontend one.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock().expect("record cache lock poisoned");
        inner.generation += 1;
        inner.records.clear();
    }

    /// Insert fetched records, unless the cache moved on past `generation`
    /// while the fetch was in flight. Returns whether they were applied.
    pub fn store(&self, generation: u64, records: impl IntoIterator<Item = QuizRecord>) -> bool {
        let mut inner = self.inner.lock().expect("record cache lock poisoned");
        if inner.generation != generation {
            return false;
        }
        for record in records {
            inner.records.insert(record.id, record);
        }
        true
    }

    pub fn get(&self, id: i64) -> Option<QuizRecord> {
        self.inner
            .lock()
            .expect("record cache lock poisoned")
            .records
            .get(&id)
            .cloned()
    }
}
