//! List and submission state for a page.
//!
//! One request per action: a second load or submit while one is in flight is
//! refused rather than queued. Nothing is retried; a failure keeps whatever
//! was on screen and records the message.

use std::fmt::Display;
use std::future::Future;
use tracing::debug;

/// Records shown by a list page.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    records: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { records: Vec::new(), loading: false, error: None }
    }
}

impl<T> ListState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a load as started. Returns `false` when one is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            debug!("Load already in flight, ignoring");
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Ends the running load. Success replaces the records; failure keeps them.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<T>, E>) {
        self.loading = false;
        match result {
            Ok(records) => self.records = records,
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Runs `fetch` as one load. Returns `false` without polling it when a load is running.
    pub async fn load<F, E>(&mut self, fetch: F) -> bool
    where
        F: Future<Output = Result<Vec<T>, E>>,
        E: Display,
    {
        if !self.begin_load() {
            return false;
        }
        let result = fetch.await;
        self.finish_load(result);
        true
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drops the stored error once it has been shown.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Submission gate for a single form.
#[derive(Debug, Default)]
pub struct Busy {
    busy: bool,
}

impl Busy {
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Claims the form until the returned guard drops. `None` while already claimed.
    pub fn try_start(&mut self) -> Option<BusyGuard<'_>> {
        if self.busy {
            return None;
        }
        self.busy = true;
        Some(BusyGuard { busy: &mut self.busy })
    }
}

/// Releases its [`Busy`] on drop, whether the submission succeeded or not.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    busy: &'a mut bool,
}

impl BusyGuard<'_> {
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        *self.busy
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_loads_are_refused() {
        let mut list = ListState::<u32>::new();
        assert!(list.begin_load());
        assert!(!list.begin_load());
        list.finish_load::<String>(Ok(vec![1, 2]));
        assert!(!list.is_loading());
        assert_eq!(list.records(), &[1, 2]);
    }

    #[test]
    fn failure_keeps_previous_records() {
        let mut list = ListState::new();
        list.begin_load();
        list.finish_load::<String>(Ok(vec!["a"]));

        list.begin_load();
        list.finish_load(Err("Recurso não encontrado."));
        assert_eq!(list.records(), &["a"]);
        assert_eq!(list.error(), Some("Recurso não encontrado."));

        list.begin_load();
        assert_eq!(list.error(), None);
    }

    #[test]
    fn busy_gate_releases_on_drop() {
        let mut busy = Busy::default();
        {
            let guard = busy.try_start().expect("first submit");
            assert!(guard.is_busy());
        }
        assert!(!busy.is_busy());
        assert!(busy.try_start().is_some());
    }
}
