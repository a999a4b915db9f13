//! Holds the current search outcome for one consumer (a map view, a CLI run)
//! and discards results from searches that were superseded mid-flight.

use std::sync::Arc;

use jobmap_core::MapCenter;
use tokio::sync::Mutex;

use crate::aggregate::{aggregate, AggregateOptions, SearchOutcome, SearchRequest, SearchStatus};
use crate::client::JobProvider;

/// Lifecycle of the session's most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running,
    Succeeded,
    PartiallySucceeded,
    Failed,
}

impl From<SearchStatus> for SearchState {
    fn from(status: SearchStatus) -> Self {
        match status {
            SearchStatus::Succeeded => SearchState::Succeeded,
            SearchStatus::PartiallySucceeded => SearchState::PartiallySucceeded,
            SearchStatus::Failed => SearchState::Failed,
        }
    }
}

/// Identifies one submitted search. Only the newest ticket may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug)]
struct SessionInner {
    generation: u64,
    state: SearchState,
    center: MapCenter,
    outcome: Option<SearchOutcome>,
}

/// Shared, cloneable handle to the current search state.
#[derive(Debug, Clone)]
pub struct SearchSession {
    max_concurrent: usize,
    inner: Arc<Mutex<SessionInner>>,
}

impl SearchSession {
    #[must_use]
    pub fn new(center: MapCenter, max_concurrent: usize) -> Self {
        Self {
            max_concurrent,
            inner: Arc::new(Mutex::new(SessionInner {
                generation: 0,
                state: SearchState::Idle,
                center,
                outcome: None,
            })),
        }
    }

    /// Marks a new search as running and returns its ticket together with the
    /// center the search starts from. Any earlier ticket becomes stale.
    pub async fn begin(&self) -> (SearchTicket, MapCenter) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.state = SearchState::Running;
        (SearchTicket(inner.generation), inner.center)
    }

    /// Publishes `outcome` if `ticket` is still the newest search.
    ///
    /// Returns `false` and drops the outcome when a later search has begun.
    pub async fn complete(&self, ticket: SearchTicket, outcome: SearchOutcome) -> bool {
        let mut inner = self.inner.lock().await;
        if ticket.0 != inner.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = inner.generation,
                "discarding stale search outcome"
            );
            return false;
        }
        inner.state = outcome.status().into();
        inner.center = outcome.center;
        inner.outcome = Some(outcome);
        true
    }

    /// Runs one search and publishes its outcome.
    ///
    /// Returns `None` when another search began before this one finished; the
    /// late outcome is discarded and the newer search's state is kept.
    pub async fn search<P: JobProvider>(
        &self,
        provider: &P,
        request: &SearchRequest,
    ) -> Option<SearchOutcome> {
        let (ticket, center) = self.begin().await;
        let options = AggregateOptions {
            max_concurrent: self.max_concurrent,
            center,
        };
        let outcome = aggregate(provider, request, &options).await;
        self.complete(ticket, outcome.clone())
            .await
            .then_some(outcome)
    }

    pub async fn state(&self) -> SearchState {
        self.inner.lock().await.state
    }

    pub async fn center(&self) -> MapCenter {
        self.inner.lock().await.center
    }

    /// The most recently published outcome.
    pub async fn outcome(&self) -> Option<SearchOutcome> {
        self.inner.lock().await.outcome.clone()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(MapCenter::LONDON, AggregateOptions::default().max_concurrent)
    }
}
