//! StdOut node: singleton terminal sink writing to standard output.
//!
//! The process has one stdout, so the node wrapping it is a singleton:
//! repeated construction returns the same instance. The substrate is
//! single-threaded (ports are `Rc`-backed), so the memoized factory lives
//! in a `thread_local` cell rather than a process-wide lock.

use crate::node::{create_node_with, Node};
use crate::port::{InputPort, PortDescriptor};
use std::cell::RefCell;
use std::io::Write;

static PORTS: &[PortDescriptor] = &[PortDescriptor::input("value")];

/// Input ports of the [`StdOut`] node.
#[derive(Clone)]
pub struct StdOutInputs {
    /// Text to be written to stdout, as-is.
    pub value: InputPort<String>,
}

/// Terminal consumer wrapping the process stdout. One input, no outputs.
pub type StdOut = Node<StdOutInputs, ()>;

thread_local! {
    static INSTANCE: RefCell<Option<StdOut>> = const { RefCell::new(None) };
}

impl Node<StdOutInputs, ()> {
    /// The stdout node, created lazily on first call.
    ///
    /// Subsequent calls return a handle to the same instance (identity, not
    /// a copy): handles share the one underlying writer port. Write
    /// failures are logged, never propagated into the graph.
    pub fn instance() -> Self {
        INSTANCE.with(|cell| {
            cell.borrow_mut()
                .get_or_insert_with(|| {
                    create_node_with((), |_| StdOutInputs {
                        value: InputPort::new(|text: String, _tag| {
                            let mut out = std::io::stdout();
                            if let Err(err) =
                                out.write_all(text.as_bytes()).and_then(|()| out.flush())
                            {
                                tracing::warn!(%err, "stdout write failed; value lost");
                            }
                        }),
                    })
                })
                .clone()
        })
    }

    /// Port metadata for introspection.
    pub fn ports(&self) -> &'static [PortDescriptor] {
        PORTS
    }
}
