//! Sampler node: forwards the last stored value on a sampling signal.

use crate::hub::OutputHub;
use crate::node::{create_node, Node};
use crate::port::{InputPort, PortDescriptor};
use std::cell::RefCell;
use std::rc::Rc;

static PORTS: &[PortDescriptor] = &[
    PortDescriptor::input("value"),
    PortDescriptor::input("sample"),
    PortDescriptor::output("value"),
];

/// Input ports of a [`Sampler`].
#[derive(Clone)]
pub struct SamplerInputs<V> {
    /// Value to be sampled. Stored into the slot; nothing is emitted.
    pub value: InputPort<V>,
    /// Sampling signal. Emits the held value with this push's own tag.
    pub sample: InputPort<()>,
}

/// Output ports of a [`Sampler`].
#[derive(Clone)]
pub struct SamplerOutputs<V> {
    /// Sampled value.
    pub value: OutputHub<V>,
}

impl<V> Default for SamplerOutputs<V> {
    fn default() -> Self {
        Self {
            value: OutputHub::new(),
        }
    }
}

/// Holds the most recent `value` input in a single slot and emits it when
/// the `sample` signal fires. The emission carries the sampling signal's
/// tag, not the stored value's. A signal that arrives before any value has
/// been stored emits nothing.
pub type Sampler<V> = Node<SamplerInputs<V>, SamplerOutputs<V>>;

impl<V: Clone + 'static> Node<SamplerInputs<V>, SamplerOutputs<V>> {
    /// Create a sampler with an empty slot.
    pub fn new() -> Self {
        create_node(|o: &SamplerOutputs<V>| {
            let slot: Rc<RefCell<Option<V>>> = Rc::new(RefCell::new(None));
            let store = Rc::clone(&slot);
            let out = o.value.clone();
            SamplerInputs {
                value: InputPort::new(move |value, _tag| {
                    *store.borrow_mut() = Some(value);
                }),
                sample: InputPort::new(move |_signal, tag| {
                    // Release the slot borrow before pushing: a downstream
                    // handler may write back into this sampler.
                    let held = slot.borrow().clone();
                    match held {
                        Some(value) => out.push(value, tag),
                        None => tracing::debug!("sample signal before first value; nothing emitted"),
                    }
                }),
            }
        })
    }

    /// Port metadata for introspection.
    pub fn ports(&self) -> &'static [PortDescriptor] {
        PORTS
    }
}

impl<V: Clone + 'static> Default for Node<SamplerInputs<V>, SamplerOutputs<V>> {
    fn default() -> Self {
        Self::new()
    }
}
