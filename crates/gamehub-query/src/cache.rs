//! Keyed query cache with staleness and scoped subscriptions.
//!
//! A [`QueryClient`] remembers the last value loaded for each key. Callers
//! register interest with [`QueryClient::fetch`], which starts a load on the
//! tokio runtime when the key has no data yet or its data has gone stale,
//! and read a synchronous [`QueryResult`] snapshot from the returned
//! [`Subscription`] on every render. Dropping the last subscription for a key
//! aborts its in-flight load; cached data is kept for the next subscriber.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use gamehub_core::QueryResult;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::QueryOutcome;

struct Entry<T> {
    data: Option<Arc<T>>,
    error: Option<String>,
    updated_at: Option<Instant>,
    invalidated: bool,
    in_flight: Option<JoinHandle<()>>,
    /// Bumped on every load start and abort; completions from older loads are
    /// discarded.
    generation: u64,
    subscribers: usize,
}

impl<T> Entry<T> {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            invalidated: false,
            in_flight: None,
            generation: 0,
            subscribers: 0,
        }
    }

    fn needs_load(&self, stale_after: Duration) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        match (&self.data, self.updated_at) {
            (Some(_), Some(updated_at)) => {
                self.invalidated || updated_at.elapsed() >= stale_after
            }
            _ => true,
        }
    }

    fn snapshot(&self) -> QueryResult<Arc<T>> {
        QueryResult {
            data: self.data.clone(),
            is_loading: self.in_flight.is_some() && self.data.is_none() && self.error.is_none(),
            error: self.error.clone(),
        }
    }
}

type Entries<K, T> = Arc<Mutex<HashMap<K, Entry<T>>>>;

fn lock<K, T>(entries: &Mutex<HashMap<K, Entry<T>>>) -> MutexGuard<'_, HashMap<K, Entry<T>>> {
    // Entries hold plain data, so a panic elsewhere cannot leave them torn.
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Query cache keyed by `K`, holding values of type `T`.
pub struct QueryClient<K, T>
where
    K: Eq + Hash,
{
    entries: Entries<K, T>,
    stale_after: Duration,
    runtime: Handle,
}

impl<K, T> QueryClient<K, T>
where
    K: Eq + Hash + Clone + fmt::Debug + Send + 'static,
    T: Send + Sync + 'static,
{
    /// Create a client whose loads run on `runtime` and whose data is
    /// reloaded once it is older than `stale_after`.
    pub fn new(runtime: Handle, stale_after: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            stale_after,
            runtime,
        }
    }

    /// Subscribe to `key`, loading it with `loader` if needed.
    ///
    /// `loader` is only called when the key has no cached data, its data is
    /// stale or invalidated, and no load is already running.
    pub fn fetch<F, Fut>(&self, key: K, loader: F) -> Subscription<K, T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = QueryOutcome<T>> + Send + 'static,
    {
        let mut entries = lock(&self.entries);
        let entry = entries.entry(key.clone()).or_insert_with(Entry::new);
        entry.subscribers += 1;

        if entry.needs_load(self.stale_after) {
            entry.generation += 1;
            let generation = entry.generation;
            log::debug!("Loading query {:?} (generation {})", key, generation);

            let future = loader();
            let shared = Arc::clone(&self.entries);
            let task_key = key.clone();
            entry.in_flight = Some(self.runtime.spawn(async move {
                let outcome = future.await;
                complete(&shared, &task_key, generation, outcome);
            }));
        } else {
            log::debug!("Query {:?} served from cache", key);
        }

        Subscription {
            key,
            entries: Arc::clone(&self.entries),
        }
    }

    /// Mark `key` stale so the next [`QueryClient::fetch`] reloads it.
    pub fn invalidate(&self, key: &K) {
        if let Some(entry) = lock(&self.entries).get_mut(key) {
            entry.invalidated = true;
        }
    }

    /// Last loaded value for `key`, regardless of staleness.
    pub fn cached(&self, key: &K) -> Option<Arc<T>> {
        lock(&self.entries).get(key).and_then(|e| e.data.clone())
    }

    /// Whether a load for `key` is currently running.
    pub fn is_fetching(&self, key: &K) -> bool {
        lock(&self.entries)
            .get(key)
            .is_some_and(|e| e.in_flight.is_some())
    }

    /// Number of live subscriptions for `key`.
    pub fn subscriber_count(&self, key: &K) -> usize {
        lock(&self.entries).get(key).map_or(0, |e| e.subscribers)
    }
}

fn complete<K, T>(entries: &Mutex<HashMap<K, Entry<T>>>, key: &K, generation: u64, outcome: QueryOutcome<T>)
where
    K: Eq + Hash + fmt::Debug,
{
    let mut entries = lock(entries);
    let Some(entry) = entries.get_mut(key) else {
        return;
    };
    if entry.generation != generation {
        log::debug!("Discarding superseded load of {:?}", key);
        return;
    }

    entry.in_flight = None;
    entry.updated_at = Some(Instant::now());
    match outcome {
        Ok(value) => {
            entry.data = Some(Arc::new(value));
            entry.error = None;
            entry.invalidated = false;
        }
        Err(e) => {
            log::warn!("Query {:?} failed: {}", key, e);
            entry.error = Some(e.to_string());
        }
    }
}

impl<K, T> Clone for QueryClient<K, T>
where
    K: Eq + Hash,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            stale_after: self.stale_after,
            runtime: self.runtime.clone(),
        }
    }
}

impl<K, T> fmt::Debug for QueryClient<K, T>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("keys", &lock(&self.entries).len())
            .field("stale_after", &self.stale_after)
            .finish_non_exhaustive()
    }
}

/// Interest in one query key.
///
/// Read the current state with [`Subscription::result`]. Dropping the last
/// subscription for a key cancels its in-flight load.
pub struct Subscription<K, T>
where
    K: Eq + Hash,
{
    key: K,
    entries: Entries<K, T>,
}

impl<K, T> Subscription<K, T>
where
    K: Eq + Hash,
{
    /// Snapshot of the query state for this render.
    pub fn result(&self) -> QueryResult<Arc<T>> {
        lock(&self.entries)
            .get(&self.key)
            .map_or_else(QueryResult::default, Entry::snapshot)
    }

    /// Wait until the query is no longer loading, checking every `interval`.
    ///
    /// Returns immediately when data or an error is already available. Wrap
    /// in [`tokio::time::timeout`] when the loader may never finish.
    pub async fn settled(&self, interval: Duration) -> QueryResult<Arc<T>> {
        loop {
            let result = self.result();
            if !result.is_loading {
                return result;
            }
            tokio::time::sleep(interval).await;
        }
    }
}

impl<K, T> Drop for Subscription<K, T>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        let mut entries = lock(&self.entries);
        let Some(entry) = entries.get_mut(&self.key) else {
            return;
        };
        entry.subscribers = entry.subscribers.saturating_sub(1);
        if entry.subscribers == 0 {
            if let Some(task) = entry.in_flight.take() {
                task.abort();
                entry.generation += 1;
            }
        }
    }
}

impl<K, T> fmt::Debug for Subscription<K, T>
where
    K: Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    async fn settle<K: Eq + Hash, T>(sub: &Subscription<K, T>) -> QueryResult<Arc<T>> {
        tokio::time::timeout(Duration::from_secs(1), sub.settled(Duration::from_millis(5)))
            .await
            .unwrap()
    }

    fn client(stale_after: Duration) -> QueryClient<&'static str, u32> {
        QueryClient::new(Handle::current(), stale_after)
    }

    fn counting_loader(
        calls: &Arc<AtomicUsize>,
        value: u32,
    ) -> impl FnOnce() -> std::future::Ready<QueryOutcome<u32>> {
        let calls = Arc::clone(calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            std::future::ready(Ok(value))
        }
    }

    #[tokio::test]
    async fn test_loading_then_success() {
        let client = client(Duration::from_secs(60));
        let (tx, rx) = oneshot::channel::<u32>();

        let sub = client.fetch("genres", move || async move {
            rx.await.map_err(|_| QueryError::Cancelled)
        });
        assert!(sub.result().is_loading);
        assert!(client.is_fetching(&"genres"));

        tx.send(7).unwrap();
        let result = settle(&sub).await;
        assert!(!result.is_loading);
        assert_eq!(result.data.as_deref(), Some(&7));
        assert!(result.error.is_none());
        assert!(!client.is_fetching(&"genres"));
    }

    #[tokio::test]
    async fn test_fresh_data_is_not_reloaded() {
        let client = client(Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        let first = client.fetch("genres", counting_loader(&calls, 1));
        settle(&first).await;
        let second = client.fetch("genres", counting_loader(&calls, 2));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.result().data.as_deref(), Some(&1));
        assert_eq!(client.subscriber_count(&"genres"), 2);
    }

    #[tokio::test]
    async fn test_stale_data_is_reloaded_and_shown_meanwhile() {
        let client = client(Duration::ZERO);
        let calls = Arc::new(AtomicUsize::new(0));

        let first = client.fetch("genres", counting_loader(&calls, 1));
        settle(&first).await;

        let (tx, rx) = oneshot::channel::<u32>();
        let second = client.fetch("genres", move || async move {
            rx.await.map_err(|_| QueryError::Cancelled)
        });

        let during = second.result();
        assert!(!during.is_loading);
        assert_eq!(during.data.as_deref(), Some(&1));
        assert!(client.is_fetching(&"genres"));

        tx.send(2).unwrap();
        for _ in 0..200 {
            if !client.is_fetching(&"genres") {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(second.result().data.as_deref(), Some(&2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let client = client(Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        let first = client.fetch("genres", counting_loader(&calls, 1));
        settle(&first).await;
        client.invalidate(&"genres");

        let second = client.fetch("genres", counting_loader(&calls, 2));
        for _ in 0..200 {
            if !client.is_fetching(&"genres") {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(second.result().data.as_deref(), Some(&2));
    }

    #[tokio::test]
    async fn test_failed_load_reports_error() {
        let client = client(Duration::from_secs(60));
        let sub = client.fetch("genres", || async {
            Err(QueryError::Source {
                source_name: "test".to_string(),
                message: "boom".to_string(),
            })
        });

        let result = settle(&sub).await;
        assert!(result.data.is_none());
        assert!(!result.is_loading);
        assert_eq!(result.error.as_deref(), Some("test failed: boom"));
    }

    #[tokio::test]
    async fn test_error_cleared_by_successful_reload() {
        let client = client(Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        let failed = client.fetch("genres", || async {
            Err(QueryError::Source {
                source_name: "test".to_string(),
                message: "boom".to_string(),
            })
        });
        assert!(settle(&failed).await.is_error());

        // No reload while the failed subscription is simply read again.
        assert!(failed.result().is_error());
        assert!(!client.is_fetching(&"genres"));

        let retried = client.fetch("genres", counting_loader(&calls, 4));
        for _ in 0..200 {
            if !client.is_fetching(&"genres") {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let result = retried.result();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(result.error.is_none());
        assert_eq!(result.data.as_deref(), Some(&4));
        assert!(failed.result().error.is_none());
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_dropping_last_subscription_cancels_load() {
        let client = client(Duration::from_secs(60));
        let dropped = Arc::new(AtomicBool::new(false));

        let flag = DropFlag(Arc::clone(&dropped));
        let sub = client.fetch("genres", move || async move {
            let _flag = flag;
            std::future::pending::<()>().await;
            Ok(0)
        });
        tokio::task::yield_now().await;
        assert!(client.is_fetching(&"genres"));

        drop(sub);
        assert!(!client.is_fetching(&"genres"));
        assert_eq!(client.subscriber_count(&"genres"), 0);

        for _ in 0..200 {
            if dropped.load(Ordering::SeqCst) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(dropped.load(Ordering::SeqCst));
        assert!(client.cached(&"genres").is_none());
    }

    #[tokio::test]
    async fn test_remaining_subscription_keeps_load_alive() {
        let client = client(Duration::from_secs(60));
        let (tx, rx) = oneshot::channel::<u32>();

        let first = client.fetch("genres", move || async move {
            rx.await.map_err(|_| QueryError::Cancelled)
        });
        let second = client.fetch("genres", || async { Ok(99) });
        drop(first);
        assert!(client.is_fetching(&"genres"));

        tx.send(5).unwrap();
        let result = settle(&second).await;
        assert_eq!(result.data.as_deref(), Some(&5));
    }

    #[tokio::test]
    async fn test_resubscribe_after_cancel_reloads() {
        let client = client(Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        let sub = client.fetch("genres", || async {
            std::future::pending::<()>().await;
            Ok(0)
        });
        drop(sub);

        let sub = client.fetch("genres", counting_loader(&calls, 3));
        let result = settle(&sub).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.data.as_deref(), Some(&3));
    }
}
