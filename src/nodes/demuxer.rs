//! Demuxer node: routes a tagged union to the output named by its field.
//!
//! The field set is fixed at construction; dispatch is a plain map lookup
//! from field to output hub. A value naming an unconfigured field is a
//! contract violation by the producer: it is dropped with a warning and
//! counted, never panicked on.

use crate::error::{FlowError, FlowResult};
use crate::hub::OutputHub;
use crate::node::{create_node_with, Node};
use crate::port::{InputPort, PortDescriptor};
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

static PORTS: &[PortDescriptor] = &[PortDescriptor::input("mux")];

/// A multiplexed value: a routing field plus the payload for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Muxed<K, V> {
    pub field: K,
    pub value: V,
}

/// Input ports of a [`Demuxer`].
#[derive(Clone)]
pub struct DemuxerInputs<K, V> {
    /// Multiplexed input value.
    pub mux: InputPort<Muxed<K, V>>,
    missed: Rc<Cell<u64>>,
}

/// Output ports of a [`Demuxer`]: one hub per configured field.
#[derive(Clone)]
pub struct DemuxerOutputs<K, V> {
    hubs: HashMap<K, OutputHub<V>>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone + fmt::Debug, V> DemuxerOutputs<K, V> {
    fn new(fields: impl IntoIterator<Item = K>) -> FlowResult<Self> {
        let mut hubs = HashMap::new();
        let mut order = Vec::new();
        for field in fields {
            if hubs.insert(field.clone(), OutputHub::new()).is_some() {
                return Err(FlowError::DuplicateField(format!("{:?}", field)));
            }
            order.push(field);
        }
        Ok(Self { hubs, order })
    }

    /// The hub for one configured field, if it exists.
    pub fn output(&self, field: &K) -> Option<&OutputHub<V>> {
        self.hubs.get(field)
    }

    /// Configured fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

/// De-multiplexes input values: pushes each payload, with the incoming tag,
/// to the output hub named by its routing field.
pub type Demuxer<K, V> = Node<DemuxerInputs<K, V>, DemuxerOutputs<K, V>>;

impl<K, V> Node<DemuxerInputs<K, V>, DemuxerOutputs<K, V>>
where
    K: Eq + Hash + Clone + fmt::Debug + 'static,
    V: Clone + 'static,
{
    /// Create a demuxer over a fixed, ordered set of routing fields.
    ///
    /// Fails if the same field appears twice.
    pub fn new(fields: impl IntoIterator<Item = K>) -> FlowResult<Self> {
        let outputs = DemuxerOutputs::new(fields)?;
        // Hubs are shallow handles: this table and `outputs` share them.
        let table = outputs.hubs.clone();
        let missed: Rc<Cell<u64>> = Rc::new(Cell::new(0));
        let miss_counter = Rc::clone(&missed);

        Ok(create_node_with(outputs, move |_| DemuxerInputs {
            mux: InputPort::new(move |muxed: Muxed<K, V>, tag| {
                match table.get(&muxed.field) {
                    Some(hub) => hub.push(muxed.value, tag),
                    None => {
                        miss_counter.set(miss_counter.get() + 1);
                        tracing::warn!(
                            field = ?muxed.field,
                            "demuxer received unconfigured field; value dropped"
                        );
                    }
                }
            }),
            missed,
        }))
    }

    /// Number of inputs dropped for naming an unconfigured field.
    pub fn missed(&self) -> u64 {
        self.i.missed.get()
    }

    /// Port metadata for introspection. Covers the fixed input side only;
    /// the outputs are sized per instance and enumerated by
    /// [`DemuxerOutputs::fields`].
    pub fn ports(&self) -> &'static [PortDescriptor] {
        PORTS
    }
}
