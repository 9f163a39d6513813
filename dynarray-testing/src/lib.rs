//! Fixtures shared by the integration tests and benchmarks.

use std::{cell::Cell, rc::Rc};

/// A shared counter that outlives the elements reporting to it.
pub type Counter = Rc<Cell<usize>>;

/// An element that reports clones and drops to shared counters.
///
/// The default value reports to nothing, so the spare slots an array fills
/// with `Tracked::default()` never show up in the counts.
#[derive(Debug, Default)]
pub struct Tracked {
    pub value: i32,
    counters: Option<Counters>,
}

#[derive(Debug, Clone)]
struct Counters {
    clones: Counter,
    drops: Counter,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(counters) = &self.counters {
            counters.clones.set(counters.clones.get() + 1);
        }
        Self {
            value: self.value,
            counters: self.counters.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counters) = &self.counters {
            counters.drops.set(counters.drops.get() + 1);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Hands out [`Tracked`] elements that all report to the same counters.
#[derive(Debug, Default)]
pub struct Tracker {
    clones: Counter,
    drops: Counter,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            counters: Some(Counters {
                clones: self.clones.clone(),
                drops: self.drops.clone(),
            }),
        }
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

#[test]
fn tracker_counts() {
    let tracker = Tracker::new();
    let a = tracker.track(1);
    let b = a.clone();
    assert_eq!(tracker.clones(), 1);
    drop(a);
    drop(b);
    assert_eq!(tracker.drops(), 2);
    drop(Tracked::default());
    assert_eq!(tracker.drops(), 2);
}
