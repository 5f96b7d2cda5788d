//! Input ports and port metadata.
//!
//! An input port is a named callback endpoint: pushing a value into it runs
//! the node's handler synchronously on the caller's stack. Port names are
//! struct fields on each node's input/output set, so the set of ports is
//! fixed at construction and pushing to an undeclared port is a compile
//! error rather than a runtime one.

use crate::tag::Tag;
use std::rc::Rc;

/// The callback behind an input port.
///
/// Handlers receive the pushed value by value and the optional causality
/// tag. They perform no validation of the value at this layer; type safety
/// is the generic parameter's job.
pub type Handler<V> = Rc<dyn Fn(V, Option<Tag>)>;

/// A named callback endpoint accepting a value and an optional causality tag.
///
/// Ports are shallow handles: cloning one yields another handle to the same
/// underlying handler, so a node can be wired from several places without
/// duplicating its state.
pub struct InputPort<V> {
    handler: Handler<V>,
}

impl<V> Clone for InputPort<V> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<V> InputPort<V> {
    /// Wrap a handler closure as an input port.
    pub fn new(handler: impl Fn(V, Option<Tag>) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Push a value (and optional tag) into this port.
    ///
    /// Runs the handler, and everything it triggers downstream, to
    /// completion before returning.
    #[inline]
    pub fn push(&self, value: V, tag: Option<Tag>) {
        (self.handler)(value, tag);
    }

    /// A shared handle to the underlying handler.
    pub fn handler(&self) -> Handler<V> {
        Rc::clone(&self.handler)
    }

    /// Whether two ports share the same underlying handler.
    ///
    /// This is identity, not equivalence: two separately constructed nodes
    /// with identical configuration compare unequal.
    pub fn same_handler(&self, other: &InputPort<V>) -> bool {
        Rc::ptr_eq(&self.handler, &other.handler)
    }
}

/// Conversion into a push handler.
///
/// The wiring operator accepts any downstream that converts: another
/// node's input port, or a bare closure of the same shape.
pub trait IntoHandler<V> {
    fn into_handler(self) -> Handler<V>;
}

impl<V, F> IntoHandler<V> for F
where
    F: Fn(V, Option<Tag>) + 'static,
{
    fn into_handler(self) -> Handler<V> {
        Rc::new(self)
    }
}

impl<V> IntoHandler<V> for &InputPort<V> {
    fn into_handler(self) -> Handler<V> {
        self.handler()
    }
}

/// Whether a port is an input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// Static descriptor for a node's port.
///
/// Behaviors expose these for introspection and logging; the descriptors
/// mirror the port fields but carry no behavior of their own.
#[derive(Debug, Clone)]
pub struct PortDescriptor {
    pub name: &'static str,
    pub direction: PortDirection,
}

impl PortDescriptor {
    pub const fn input(name: &'static str) -> Self {
        Self {
            name,
            direction: PortDirection::Input,
        }
    }

    pub const fn output(name: &'static str) -> Self {
        Self {
            name,
            direction: PortDirection::Output,
        }
    }
}
