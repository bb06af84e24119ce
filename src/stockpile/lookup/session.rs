use super::{LookupOutcome, ProductLookup};
use crate::model::{ProductHit, SearchResult};
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Identifies one submitted lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub item_code: String,
}

/// What a session reports for a ticket. Each ticket gets exactly one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    Finished(Ticket, LookupOutcome),
    /// A newer lookup was submitted (or the session was cancelled) before
    /// this one came back. Its outcome is dropped.
    Superseded(Ticket),
}

impl LookupEvent {
    pub fn ticket(&self) -> &Ticket {
        match self {
            LookupEvent::Finished(ticket, _) | LookupEvent::Superseded(ticket) => ticket,
        }
    }

    /// The caller-facing tag, or `None` for a superseded lookup.
    pub fn result(&self) -> Option<SearchResult> {
        match self {
            LookupEvent::Finished(_, outcome) => Some(outcome.result()),
            LookupEvent::Superseded(_) => None,
        }
    }
}

type Completion = (Ticket, LookupOutcome);

/// Runs lookups on background threads and delivers their results to the
/// thread that owns the session.
///
/// Only the owner mutates session state: results travel over a channel and are
/// applied in [`poll`](Self::poll) / [`wait`](Self::wait). Only the newest
/// submission counts; anything older is reported as superseded.
/// Successful hits are kept in a bounded history, oldest dropped first.
pub struct LookupSession {
    client: Arc<ProductLookup>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    latest: u64,
    pending: usize,
    history: VecDeque<ProductHit>,
    history_limit: usize,
}

impl LookupSession {
    pub fn new(client: ProductLookup) -> Self {
        let history_limit = client.config().history_limit;
        let (tx, rx) = mpsc::channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
            latest: 0,
            pending: 0,
            history: VecDeque::new(),
            history_limit,
        }
    }

    /// Starts a lookup for `item_code` in the background.
    pub fn submit(&mut self, item_code: &str) -> Ticket {
        self.latest += 1;
        self.pending += 1;
        let ticket = Ticket {
            generation: self.latest,
            item_code: item_code.to_string(),
        };

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let job = ticket.clone();
        let spawned = thread::Builder::new()
            .name(format!("lookup-{}", ticket.generation))
            .spawn(move || {
                let outcome = client.search_item(&job.item_code);
                // The session may be gone; nobody is left to tell.
                let _ = tx.send((job, outcome));
            });

        if let Err(e) = spawned {
            warn!(error = %e, "could not start lookup thread");
            let _ = self
                .tx
                .send((ticket.clone(), LookupOutcome::TransportError(e.to_string())));
        }

        debug!(generation = ticket.generation, code = item_code, "lookup submitted");
        ticket
    }

    /// Marks every in-flight lookup as superseded.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    /// Number of submitted lookups that have not been reported yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Successful hits, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ProductHit> {
        self.history.iter()
    }

    /// Applies every completion that has already arrived.
    pub fn poll(&mut self) -> Vec<LookupEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok((ticket, outcome)) => events.push(self.accept(ticket, outcome)),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }

    /// Blocks until the next completion. Returns `None` if nothing is pending.
    pub fn wait(&mut self) -> Option<LookupEvent> {
        if self.pending == 0 {
            return None;
        }
        let (ticket, outcome) = self.rx.recv().ok()?;
        Some(self.accept(ticket, outcome))
    }

    /// Like [`wait`](Self::wait) but gives up after `timeout`.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<LookupEvent> {
        if self.pending == 0 {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok((ticket, outcome)) => Some(self.accept(ticket, outcome)),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    fn accept(&mut self, ticket: Ticket, outcome: LookupOutcome) -> LookupEvent {
        self.pending = self.pending.saturating_sub(1);

        if ticket.generation < self.latest {
            debug!(generation = ticket.generation, latest = self.latest, "lookup superseded");
            return LookupEvent::Superseded(ticket);
        }

        if let LookupOutcome::Success(hit) = &outcome {
            self.history.push_back(hit.clone());
            while self.history.len() > self.history_limit {
                self.history.pop_front();
            }
        }
        LookupEvent::Finished(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupConfig;
    use chrono::Utc;

    fn session(limit: usize) -> LookupSession {
        let config = LookupConfig::new("http://127.0.0.1:9/search", "app-1")
            .unwrap()
            .with_history_limit(limit);
        LookupSession::new(ProductLookup::new(config))
    }

    fn ticket(generation: u64) -> Ticket {
        Ticket {
            generation,
            item_code: format!("code-{}", generation),
        }
    }

    fn hit(name: &str) -> LookupOutcome {
        LookupOutcome::Success(ProductHit {
            item_name: name.to_string(),
            image_url: None,
            image: None,
            fetched_at: Utc::now(),
        })
    }

    #[test]
    fn older_generations_are_superseded() {
        let mut s = session(8);
        s.latest = 2;
        s.pending = 2;

        let stale = s.accept(ticket(1), hit("Old Tea"));
        assert_eq!(stale, LookupEvent::Superseded(ticket(1)));
        assert_eq!(stale.result(), None);

        let fresh = s.accept(ticket(2), hit("New Tea"));
        assert_eq!(fresh.result(), Some(SearchResult::Success));

        let names: Vec<&str> = s.history().map(|h| h.item_name.as_str()).collect();
        assert_eq!(names, vec!["New Tea"]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn history_drops_oldest_past_limit() {
        let mut s = session(2);
        for (generation, name) in [(1, "A"), (2, "B"), (3, "C")] {
            s.latest = generation;
            s.pending += 1;
            s.accept(ticket(generation), hit(name));
        }
        let names: Vec<&str> = s.history().map(|h| h.item_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn failures_are_not_recorded() {
        let mut s = session(4);
        s.latest = 1;
        s.pending = 1;
        let event = s.accept(ticket(1), LookupOutcome::DecodeFailure("empty".into()));
        assert_eq!(event.result(), Some(SearchResult::Failure));
        assert_eq!(s.history().count(), 0);
    }

    #[test]
    fn wait_without_pending_returns_immediately() {
        let mut s = session(4);
        assert!(s.wait().is_none());
        assert!(s.wait_timeout(Duration::from_millis(10)).is_none());
        assert!(s.poll().is_empty());
    }

    #[test]
    fn cancel_supersedes_in_flight() {
        let mut s = session(4);
        s.latest = 1;
        s.pending = 1;
        s.cancel();
        let event = s.accept(ticket(1), hit("Late Tea"));
        assert!(matches!(event, LookupEvent::Superseded(_)));
        assert_eq!(s.history().count(), 0);
    }
}
