//! Node construction and wiring.
//!
//! A node is a pair of port sets: input ports (`i`) holding the behavior's
//! handlers, and output hubs (`o`) for downstream subscription. The factory
//! builds the output set first, hands push handles to the behavior's build
//! closure exactly once, and assembles the finished node. All graph
//! execution happens through these ports; a node's private state is only
//! reachable from its own handlers.

use crate::hub::{LinkId, OutputHub};
use crate::port::IntoHandler;

/// A unit exposing named input ports and output hubs.
///
/// The port sets are plain structs, so the set of ports — and the value
/// type flowing through each — is fixed at construction time by the type
/// system. Cloning a node yields shallow handles onto the same underlying
/// node: clones share state and wiring.
#[derive(Clone)]
pub struct Node<I, O> {
    /// Input ports: behavior-specific handlers closing over private state.
    pub i: I,
    /// Output ports: multicast hubs downstream consumers subscribe to.
    pub o: O,
}

/// Build a node whose output set has a canonical empty form.
///
/// Constructs `O::default()` (one fresh hub per output port), calls `build`
/// exactly once with handles to the outputs, and wires the returned input
/// handlers into the finished node.
pub fn create_node<I, O: Default>(build: impl FnOnce(&O) -> I) -> Node<I, O> {
    create_node_with(O::default(), build)
}

/// Build a node from an explicitly constructed output set.
///
/// Used by behaviors whose outputs are sized at runtime (the demuxer's
/// per-field hubs) or that have no outputs at all.
pub fn create_node_with<I, O>(outputs: O, build: impl FnOnce(&O) -> I) -> Node<I, O> {
    let inputs = build(&outputs);
    Node {
        i: inputs,
        o: outputs,
    }
}

/// Wiring operator: subscribe a downstream to an upstream output port.
///
/// The downstream is either another node's input port or a bare callback
/// of the same shape (anything implementing [`IntoHandler`]). Any number
/// of downstreams may be connected to one output (fan-out). Returns a
/// [`LinkId`] accepted by [`disconnect`].
pub fn connect<V>(output: &OutputHub<V>, downstream: impl IntoHandler<V>) -> LinkId {
    output.attach(downstream.into_handler())
}

/// Remove a connection previously made with [`connect`] or
/// [`OutputHub::subscribe`]. Returns `false` if the link is unknown.
pub fn disconnect<V>(output: &OutputHub<V>, link: LinkId) -> bool {
    output.unsubscribe(link)
}
