//! Test utilities and mock collaborators for panelgrid development.
//!
//! Provides recording implementations of the collaborator traits
//! ([`VisualSurface`], [`Scheduler`]), a shared [`CallLog`] for asserting
//! on callback invocations, and configuration fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use panelgrid_core::{CooldownReset, Scheduler, VisualId, VisualProps, VisualSurface};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

// ── RecordingSurface ───────────────────────────────────────────────

/// A visual created through a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedVisual {
    pub x: f32,
    pub y: f32,
    pub asset: String,
    /// Last properties applied, if any.
    pub props: Option<VisualProps>,
    pub destroyed: bool,
}

/// Mock [`VisualSurface`] that remembers every call.
///
/// Handles are sequential from `VisualId(0)`. Inspect with
/// [`visual`](RecordingSurface::visual) and the counters.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    visuals: HashMap<VisualId, RecordedVisual>,
    next: u64,
    destroy_calls: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a visual that did not come from a panel (e.g. an
    /// occupant sprite) so that its release can be observed.
    pub fn spawn(&mut self, asset: &str) -> VisualId {
        self.create_visual(0.0, 0.0, asset)
    }

    pub fn visual(&self, id: VisualId) -> Option<&RecordedVisual> {
        self.visuals.get(&id)
    }

    pub fn created(&self) -> usize {
        self.visuals.len()
    }

    pub fn live(&self) -> usize {
        self.visuals.values().filter(|v| !v.destroyed).count()
    }

    /// Number of `destroy_visual` calls, including repeated ones.
    pub fn destroy_calls(&self) -> usize {
        self.destroy_calls
    }
}

impl VisualSurface for RecordingSurface {
    fn create_visual(&mut self, x: f32, y: f32, asset: &str) -> VisualId {
        let id = VisualId(self.next);
        self.next += 1;
        self.visuals.insert(
            id,
            RecordedVisual {
                x,
                y,
                asset: asset.to_string(),
                props: None,
                destroyed: false,
            },
        );
        id
    }

    fn configure_visual(&mut self, visual: VisualId, props: &VisualProps) {
        if let Some(v) = self.visuals.get_mut(&visual) {
            v.props = Some(props.clone());
        }
    }

    fn destroy_visual(&mut self, visual: VisualId) {
        self.destroy_calls += 1;
        if let Some(v) = self.visuals.get_mut(&visual) {
            v.destroyed = true;
        }
    }
}

// ── ManualScheduler ────────────────────────────────────────────────

/// Mock [`Scheduler`] that keeps every request for inspection.
///
/// Nothing fires on its own; tests read [`scheduled`](Self::scheduled)
/// or pull everything due at a given elapsed time with
/// [`take_due`](Self::take_due).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    scheduled: Vec<(Duration, CooldownReset)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pending request in scheduling order.
    pub fn scheduled(&self) -> &[(Duration, CooldownReset)] {
        &self.scheduled
    }

    /// Remove and return every request whose delay is at most `elapsed`.
    pub fn take_due(&mut self, elapsed: Duration) -> Vec<CooldownReset> {
        let (due, pending): (Vec<_>, Vec<_>) = self
            .scheduled
            .drain(..)
            .partition(|(delay, _)| *delay <= elapsed);
        self.scheduled = pending;
        due.into_iter().map(|(_, reset)| reset).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration, reset: CooldownReset) {
        self.scheduled.push((delay, reset));
    }
}

// ── CallLog ────────────────────────────────────────────────────────

/// Shared, cloneable record of callback invocations.
///
/// Clone one handle into a callback closure and keep the other for
/// assertions.
#[derive(Debug)]
pub struct CallLog<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone> CallLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: T) {
        self.calls.borrow_mut().push(call);
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Copy of every recorded call.
    pub fn snapshot(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    /// Return and forget every recorded call.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}
