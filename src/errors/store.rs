//! Bounded storage of captured errors.

use dashmap::DashMap;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use super::record::{ErrorId, ErrorRecord};

/// Default number of records kept per store.
pub const DEFAULT_CAPACITY: usize = 50;

/// Insertion-ordered map of records holding at most `capacity` entries.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    capacity: usize,
    order: VecDeque<ErrorId>,
    records: HashMap<ErrorId, ErrorRecord>,
}

impl ErrorLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            order: VecDeque::new(),
            records: HashMap::new(),
        }
    }

    /// Add a record, evicting the oldest ones beyond capacity.
    /// Re-inserting a known id replaces it without moving it.
    pub fn insert(&mut self, record: ErrorRecord) {
        let id = record.id.clone();
        if self.records.insert(id.clone(), record).is_none() {
            self.order.push_back(id);
        }
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.records.remove(&oldest);
            }
        }
    }

    pub fn get(&self, id: &ErrorId) -> Option<&ErrorRecord> {
        self.records.get(id)
    }

    /// Ids from oldest to newest.
    pub fn ids(&self) -> impl Iterator<Item = &ErrorId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Where captured records live between the failing request and the viewer.
pub trait ErrorStore: Send + Sync {
    fn save(&self, record: ErrorRecord);

    fn find(&self, id: &ErrorId) -> Option<ErrorRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single process-wide log.
#[derive(Debug)]
pub struct MemoryErrorStore {
    log: Mutex<ErrorLog>,
}

impl MemoryErrorStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            log: Mutex::new(ErrorLog::new(capacity)),
        }
    }

    /// Copy of the current log.
    pub fn snapshot(&self) -> ErrorLog {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for MemoryErrorStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ErrorStore for MemoryErrorStore {
    fn save(&self, record: ErrorRecord) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record);
    }

    fn find(&self, id: &ErrorId) -> Option<ErrorRecord> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Default number of sessions holding records at once.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Default idle time after which a session's records are dropped.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(1440);

#[derive(Debug)]
struct SessionLog {
    log: ErrorLog,
    touched: Instant,
}

/// One bounded log per session id.
///
/// A session only gets a log once something is saved into it. Sessions idle
/// for longer than the TTL are dropped, and beyond `max_sessions` the least
/// recently touched one goes first.
#[derive(Debug, Clone)]
pub struct SessionErrorStores {
    capacity: usize,
    max_sessions: usize,
    idle_ttl: Duration,
    sessions: Arc<DashMap<String, SessionLog>>,
}

impl SessionErrorStores {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_ttl: DEFAULT_IDLE_TTL,
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn with_limits(mut self, max_sessions: usize, idle_ttl: Duration) -> Self {
        self.max_sessions = max_sessions.max(1);
        self.idle_ttl = idle_ttl;
        self
    }

    /// Store view limited to one session.
    pub fn scope(&self, session: impl Into<String>) -> SessionScope {
        SessionScope {
            stores: self.clone(),
            session: session.into(),
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Drop everything kept for a session.
    pub fn clear(&self, session: &str) {
        self.sessions.remove(session);
    }

    /// Drop idle sessions, then the least recently touched ones beyond the
    /// limit. `keep` is never evicted for size.
    fn evict(&self, keep: &str) {
        let idle_ttl = self.idle_ttl;
        self.sessions.retain(|_, entry| entry.touched.elapsed() < idle_ttl);

        while self.sessions.len() > self.max_sessions {
            let oldest = self
                .sessions
                .iter()
                .filter(|entry| entry.key() != keep)
                .min_by_key(|entry| entry.value().touched)
                .map(|entry| entry.key().clone());
            match oldest {
                Some(session) => {
                    tracing::debug!(session = %session, "Evicting session error log");
                    self.sessions.remove(&session);
                }
                None => break,
            }
        }
    }
}

/// [`ErrorStore`] for one session of a [`SessionErrorStores`].
#[derive(Debug, Clone)]
pub struct SessionScope {
    stores: SessionErrorStores,
    session: String,
}

impl SessionScope {
    pub fn session(&self) -> &str {
        &self.session
    }
}

impl ErrorStore for SessionScope {
    fn save(&self, record: ErrorRecord) {
        let capacity = self.stores.capacity;
        {
            let mut entry = self
                .stores
                .sessions
                .entry(self.session.clone())
                .or_insert_with(|| SessionLog {
                    log: ErrorLog::new(capacity),
                    touched: Instant::now(),
                });
            entry.log.insert(record);
            entry.touched = Instant::now();
        }
        self.stores.evict(&self.session);
    }

    fn find(&self, id: &ErrorId) -> Option<ErrorRecord> {
        let mut entry = self.stores.sessions.get_mut(&self.session)?;
        if entry.touched.elapsed() >= self.stores.idle_ttl {
            return None;
        }
        entry.touched = Instant::now();
        entry.log.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.stores
            .sessions
            .get(&self.session)
            .filter(|entry| entry.touched.elapsed() < self.stores.idle_ttl)
            .map_or(0, |entry| entry.log.len())
    }
}
