//! # rillflow: push-based dataflow nodes
//!
//! A minimal push-based dataflow substrate. Nodes expose named input and
//! output ports; pushing a value into an input port runs the node's handler
//! synchronously, which may push out of any of its output hubs, each fanning
//! out to every connected downstream — all on the caller's stack, with no
//! queue, scheduler, or asynchrony.
//!
//! ```text
//! [source] ──► [Filter] ──► [Gate] ──► [ChannelSink]
//!                     └───► [StdOut]
//! ```
//!
//! ## Design
//!
//! - **Typed ports** — port names are struct fields; pushing to an
//!   undeclared port is a compile error, not a runtime one.
//! - **Shallow handles** — ports, hubs, and nodes clone as handles onto the
//!   same underlying state, so wiring never copies a node.
//! - **Deterministic fan-out** — per hub, subscribers observe pushes in push
//!   order and, within one push, in subscription order.
//! - **Causality tags** — every push carries an optional opaque [`Tag`]
//!   threaded through, never interpreted.
//! - **Failure as signal** — recoverable failures leave on dedicated output
//!   ports (see [`Filter`]'s bounce pair) instead of unwinding across node
//!   boundaries.
//!
//! ## Example
//!
//! ```
//! use rillflow::{Filter, Tag};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let filter = Filter::<i64>::new(|value, _tag| Ok(*value > 5));
//!
//! let seen: Rc<RefCell<Vec<i64>>> = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! filter.o.forwarded.subscribe(move |value, _tag| sink.borrow_mut().push(value));
//!
//! filter.i.value.push(3, None);
//! filter.i.value.push(8, Some(Tag::from("req-1")));
//!
//! assert_eq!(*seen.borrow(), vec![8]);
//! ```

pub mod error;
pub mod hub;
pub mod node;
pub mod nodes;
pub mod port;
pub mod tag;

pub use error::{FlowError, FlowResult};
pub use hub::{LinkId, OutputHub};
pub use node::{connect, create_node, create_node_with, disconnect, Node};
pub use nodes::{
    ChannelSink, Demuxer, Filter, Gate, Gated, Muxed, Sampler, StdOut,
};
pub use port::{Handler, InputPort, IntoHandler, PortDescriptor, PortDirection};
pub use tag::Tag;
