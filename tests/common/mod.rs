//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use rillflow::{LinkId, OutputHub, Tag};
use std::cell::RefCell;
use std::rc::Rc;

/// Initialize test logging (no-op if already initialized).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records every `(value, tag)` pair an output hub delivers to it.
#[derive(Clone)]
pub struct Collector<V> {
    seen: Rc<RefCell<Vec<(V, Option<Tag>)>>>,
}

impl<V: Clone + 'static> Collector<V> {
    pub fn new() -> Self {
        Self {
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Subscribe this collector to a hub.
    pub fn attach(&self, hub: &OutputHub<V>) -> LinkId {
        let sink = Rc::clone(&self.seen);
        hub.subscribe(move |value, tag| sink.borrow_mut().push((value, tag)))
    }

    /// Everything received so far, in delivery order.
    pub fn entries(&self) -> Vec<(V, Option<Tag>)> {
        self.seen.borrow().clone()
    }

    /// Received values without their tags.
    pub fn values(&self) -> Vec<V> {
        self.seen.borrow().iter().map(|(v, _)| v.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

impl<V: Clone + 'static> Default for Collector<V> {
    fn default() -> Self {
        Self::new()
    }
}
