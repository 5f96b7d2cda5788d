//! Gate node: gated pass-through with joined or independent inputs.
//!
//! The independent `value` and `open` ports read and write a stored flag;
//! between two pushes the flag may change, so a producer that must evaluate
//! a state change and a value together atomically uses the joined
//! `combined` port instead, which carries both in one push.

use crate::hub::OutputHub;
use crate::node::{create_node, Node};
use crate::port::{InputPort, PortDescriptor};
use std::cell::Cell;
use std::rc::Rc;

static PORTS: &[PortDescriptor] = &[
    PortDescriptor::input("value"),
    PortDescriptor::input("open"),
    PortDescriptor::input("combined"),
    PortDescriptor::output("value"),
];

/// A joined gate input: the value and the open flag to judge it by,
/// delivered atomically in one push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gated<V> {
    pub value: V,
    pub open: bool,
}

/// Input ports of a [`Gate`].
#[derive(Clone)]
pub struct GateInputs<V> {
    /// Value to be forwarded, judged by the stored flag at fire time.
    pub value: InputPort<V>,
    /// Overwrites the stored flag. Emits nothing.
    pub open: InputPort<bool>,
    /// Joined input: forwards iff the flag carried in this same push is
    /// true. The stored flag is neither read nor written.
    pub combined: InputPort<Gated<V>>,
}

/// Output ports of a [`Gate`].
#[derive(Clone)]
pub struct GateOutputs<V> {
    /// Forwarded value.
    pub value: OutputHub<V>,
}

impl<V> Default for GateOutputs<V> {
    fn default() -> Self {
        Self {
            value: OutputHub::new(),
        }
    }
}

/// Forwards input values while open.
pub type Gate<V> = Node<GateInputs<V>, GateOutputs<V>>;

impl<V: Clone + 'static> Node<GateInputs<V>, GateOutputs<V>> {
    /// Create a gate with the given initial open state.
    pub fn new(open: bool) -> Self {
        create_node(|o: &GateOutputs<V>| {
            let flag = Rc::new(Cell::new(open));
            let read = Rc::clone(&flag);
            let out = o.value.clone();
            let out_joined = o.value.clone();
            GateInputs {
                value: InputPort::new(move |value, tag| {
                    if read.get() {
                        out.push(value, tag);
                    }
                }),
                open: InputPort::new(move |state, _tag| flag.set(state)),
                combined: InputPort::new(move |gated: Gated<V>, tag| {
                    if gated.open {
                        out_joined.push(gated.value, tag);
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

impl<V: Clone + 'static> Default for Node<GateInputs<V>, GateOutputs<V>> {
    /// A gate starts closed unless told otherwise.
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;
    use std::cell::RefCell;

    fn collect(hub: &OutputHub<&'static str>) -> Rc<RefCell<Vec<(&'static str, Option<Tag>)>>> {
        let seen: Rc<RefCell<Vec<(&'static str, Option<Tag>)>>> =
            Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        hub.subscribe(move |value, tag| sink.borrow_mut().push((value, tag)));
        seen
    }

    #[test]
    fn test_closed_gate_swallows_values() {
        let gate = Gate::<&str>::new(false);
        let seen = collect(&gate.o.value);

        gate.i.value.push("a", None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_opening_lets_values_through() {
        let gate = Gate::<&str>::new(false);
        let seen = collect(&gate.o.value);

        gate.i.value.push("a", None);
        gate.i.open.push(true, None);
        gate.i.value.push("b", Some(Tag::from("t")));

        assert_eq!(*seen.borrow(), vec![("b", Some(Tag::from("t")))]);
    }

    #[test]
    fn test_closing_again_stops_flow() {
        let gate = Gate::<&str>::new(true);
        let seen = collect(&gate.o.value);

        gate.i.value.push("a", None);
        gate.i.open.push(false, None);
        gate.i.value.push("b", None);

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_combined_ignores_stored_flag() {
        let gate = Gate::<&str>::new(true);
        let seen = collect(&gate.o.value);

        // Carried flag wins even though the gate is open.
        gate.i.combined.push(
            Gated {
                value: "c",
                open: false,
            },
            None,
        );
        assert!(seen.borrow().is_empty());

        // And a carried true forwards even on a closed gate.
        gate.i.open.push(false, None);
        gate.i.combined.push(
            Gated {
                value: "d",
                open: true,
            },
            Some(Tag::from(3u64)),
        );
        assert_eq!(*seen.borrow(), vec![("d", Some(Tag::from(3u64)))]);
    }

    #[test]
    fn test_combined_does_not_write_stored_flag() {
        let gate = Gate::<&str>::new(false);
        let seen = collect(&gate.o.value);

        gate.i.combined.push(
            Gated {
                value: "x",
                open: true,
            },
            None,
        );
        // The stored flag is still closed for the independent port.
        gate.i.value.push("y", None);

        assert_eq!(*seen.borrow(), vec![("x", None)]);
    }
}
