//! ChannelSink node: bridges the synchronous graph to a consumer thread.
//!
//! The substrate itself never blocks or yields, so the bridge is a
//! non-blocking `try_send` over a crossbeam channel. Pushes the receiver
//! cannot keep up with are dropped and counted; the graph keeps running.

use crate::node::{create_node_with, Node};
use crate::port::{InputPort, PortDescriptor};
use crate::tag::Tag;
use crossbeam_channel::{Sender, TrySendError};
use std::cell::Cell;
use std::rc::Rc;

static PORTS: &[PortDescriptor] = &[PortDescriptor::input("value")];

/// Input ports of a [`ChannelSink`].
#[derive(Clone)]
pub struct ChannelSinkInputs<V> {
    /// Value to be forwarded out of the graph, with its tag.
    pub value: InputPort<V>,
    dropped: Rc<Cell<u64>>,
}

/// Terminal consumer forwarding pushes into a crossbeam channel.
pub type ChannelSink<V> = Node<ChannelSinkInputs<V>, ()>;

impl<V: 'static> Node<ChannelSinkInputs<V>, ()> {
    /// Wrap a channel sender as a sink node.
    pub fn new(tx: Sender<(V, Option<Tag>)>) -> Self {
        let dropped: Rc<Cell<u64>> = Rc::new(Cell::new(0));
        let counter = Rc::clone(&dropped);
        // Warn on the first drop of a burst only; every drop is counted.
        let in_burst = Cell::new(false);

        create_node_with((), move |_| ChannelSinkInputs {
            value: InputPort::new(move |value, tag| match tx.try_send((value, tag)) {
                Ok(()) => in_burst.set(false),
                Err(TrySendError::Full(_)) => {
                    counter.set(counter.get() + 1);
                    if !in_burst.replace(true) {
                        tracing::warn!(
                            dropped = counter.get(),
                            "channel sink full; pushes dropped"
                        );
                    }
                }
                Err(TrySendError::Disconnected(_)) => {
                    counter.set(counter.get() + 1);
                    if !in_burst.replace(true) {
                        tracing::warn!("channel sink receiver gone; pushes dropped");
                    }
                }
            }),
            dropped,
        })
    }

    /// Number of pushes dropped because the channel was full or closed.
    pub fn dropped(&self) -> u64 {
        self.i.dropped.get()
    }

    /// Port metadata for introspection.
    pub fn ports(&self) -> &'static [PortDescriptor] {
        PORTS
    }
}
