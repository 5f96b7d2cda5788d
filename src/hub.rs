//! Output hubs — the multicast mechanism behind one output port.
//!
//! A hub owns an ordered list of downstream handlers. Pushing a value into
//! the hub invokes every handler that was subscribed at the time of the
//! push, in subscription order, synchronously on the caller's stack. A hub
//! with no subscribers silently discards pushes.

use crate::port::Handler;
use crate::tag::Tag;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Identifier of one hub-to-downstream connection.
///
/// Returned by [`OutputHub::subscribe`] and [`connect`](crate::connect);
/// pass it back to [`OutputHub::unsubscribe`] to detach.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(pub u32);

impl LinkId {
    pub const INVALID: LinkId = LinkId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl fmt::Debug for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "LinkId(INVALID)")
        } else {
            write!(f, "LinkId({})", self.0)
        }
    }
}

struct HubInner<V> {
    subscribers: RefCell<Vec<(LinkId, Handler<V>)>>,
    next_link: Cell<u32>,
}

/// Multicast point behind one named output port.
///
/// Hubs are shallow handles: clones share the same subscriber list, so the
/// node pushing into a hub and the callers subscribing to it observe one
/// connection set.
pub struct OutputHub<V> {
    inner: Rc<HubInner<V>>,
}

impl<V> Clone for OutputHub<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V> Default for OutputHub<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OutputHub<V> {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(HubInner {
                subscribers: RefCell::new(Vec::new()),
                next_link: Cell::new(0),
            }),
        }
    }

    /// Append a downstream handler. Handlers are invoked in subscription
    /// order on every subsequent push.
    pub fn subscribe(&self, handler: impl Fn(V, Option<Tag>) + 'static) -> LinkId {
        self.attach(Rc::new(handler))
    }

    pub(crate) fn attach(&self, handler: Handler<V>) -> LinkId {
        let id = LinkId(self.inner.next_link.get());
        self.inner.next_link.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push((id, handler));
        id
    }

    /// Detach a previously subscribed handler. Returns `false` if the link
    /// is unknown (already detached, or from another hub).
    pub fn unsubscribe(&self, link: LinkId) -> bool {
        let mut subs = self.inner.subscribers.borrow_mut();
        let before = subs.len();
        subs.retain(|(id, _)| *id != link);
        subs.len() != before
    }

    /// Number of currently connected downstream handlers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl<V: Clone> OutputHub<V> {
    /// Push a value (and optional tag) to every current subscriber.
    ///
    /// Subscribers present at the start of the push each receive the value
    /// exactly once, in subscription order. The subscriber list is snapshot
    /// first, so a handler may subscribe, unsubscribe, or push into this
    /// same hub reentrantly; handlers attached mid-push see only later
    /// pushes. Pushing to an empty hub is a no-op. A panicking subscriber
    /// is not caught here — containment is the producing node's job.
    pub fn push(&self, value: V, tag: Option<Tag>) {
        let snapshot: Vec<Handler<V>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        let Some((last, rest)) = snapshot.split_last() else {
            return;
        };
        for handler in rest {
            handler(value.clone(), tag.clone());
        }
        last(value, tag);
    }
}
