use crate::schedule::TransitLine;

use crossbeam::deque::{Injector, Steal};
use log::{info, warn};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Receives a notification for every routed transit route.
pub trait Progress: Sync {
    fn update(&self);
}

impl Progress for () {
    fn update(&self) {}
}

/// Logs progress every tenth of the expected routes.
#[derive(Debug)]
pub struct LoggedProgress {
    total: usize,
    done: AtomicUsize,
}

impl LoggedProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            done: AtomicUsize::new(0),
        }
    }

    pub fn completed(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }
}

impl Progress for LoggedProgress {
    fn update(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.total == 0 {
            return;
        }

        if done * 10 / self.total > (done - 1) * 10 / self.total {
            info!(
                "Pseudo-routing: {}% ({done}/{} routes)",
                done * 100 / self.total,
                self.total
            );
        }
    }
}

/// Hands out transit lines to routing workers.
///
/// Every line is handed out exactly once. Once any worker fails the
/// dispatcher is aborted, and hands out nothing further.
pub struct Dispatcher<'a> {
    queue: Injector<&'a TransitLine>,
    progress: &'a dyn Progress,

    aborted: AtomicBool,
    warned_zero_travel_cost: AtomicBool,
}

impl<'a> Dispatcher<'a> {
    pub fn new(progress: &'a dyn Progress) -> Self {
        Self {
            queue: Injector::new(),
            progress,
            aborted: AtomicBool::new(false),
            warned_zero_travel_cost: AtomicBool::new(false),
        }
    }

    pub fn add_transit_line(&self, line: &'a TransitLine) {
        self.queue.push(line);
    }

    pub fn extend(&self, lines: impl IntoIterator<Item = &'a TransitLine>) {
        lines.into_iter().for_each(|line| self.queue.push(line));
    }

    /// The next line to route, or `None` once the queue is drained
    /// or the run was aborted.
    pub fn poll(&self) -> Option<&'a TransitLine> {
        if self.is_aborted() {
            return None;
        }

        loop {
            match self.queue.steal() {
                Steal::Success(line) => return Some(line),
                Steal::Empty => return None,
                Steal::Retry => continue,
            }
        }
    }

    /// Lines not yet handed out.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    pub fn route_completed(&self) {
        self.progress.update();
    }

    /// Warns that two stops have a minimal travel cost of zero. Only the
    /// first call of a run logs, returning `true`.
    pub fn warn_zero_travel_cost(&self, line: &TransitLine, from_stop: &str, to_stop: &str) -> bool {
        let first = !self.warned_zero_travel_cost.swap(true, Ordering::Relaxed);

        if first {
            warn!(
                "Minimal travel cost between \"{from_stop}\" and \"{to_stop}\" on line {} is zero. \
                 Every network path between them will be replaced by an artificial link. \
                 Further occurrences are not reported.",
                line.id
            );
        }

        first
    }
}
