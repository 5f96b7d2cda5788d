//! Filter node: predicate filtering with failure bouncing.
//!
//! The predicate is a fallible user callback. A failing predicate never
//! unwinds across the node boundary; the failure is converted into an
//! observable pair of signals (the untouched input on `bounced`, the
//! failure text on `error`) that downstream consumers can recover from.
//! This exception-to-signal conversion is the idiom other behaviors are
//! expected to follow.

use crate::hub::OutputHub;
use crate::node::{create_node, Node};
use crate::port::{InputPort, PortDescriptor};
use crate::tag::Tag;

static PORTS: &[PortDescriptor] = &[
    PortDescriptor::input("value"),
    PortDescriptor::output("forwarded"),
    PortDescriptor::output("bounced"),
    PortDescriptor::output("error"),
];

/// Input ports of a [`Filter`].
#[derive(Clone)]
pub struct FilterInputs<V> {
    /// Value to be filtered.
    pub value: InputPort<V>,
}

/// Output ports of a [`Filter`].
#[derive(Clone)]
pub struct FilterOutputs<V> {
    /// Values the predicate accepted, unchanged, with their original tag.
    pub forwarded: OutputHub<V>,
    /// Inputs bounced back because the predicate failed.
    pub bounced: OutputHub<V>,
    /// Textual description of each predicate failure.
    pub error: OutputHub<String>,
}

impl<V> Default for FilterOutputs<V> {
    fn default() -> Self {
        Self {
            forwarded: OutputHub::new(),
            bounced: OutputHub::new(),
            error: OutputHub::new(),
        }
    }
}

/// Forwards values accepted by a predicate; bounces values the predicate
/// fails on. A rejected value (`Ok(false)`) emits nothing at all.
pub type Filter<V> = Node<FilterInputs<V>, FilterOutputs<V>>;

impl<V: Clone + 'static> Node<FilterInputs<V>, FilterOutputs<V>> {
    /// Create a filter from a predicate callback.
    ///
    /// The predicate sees the value and its tag. Returning `Err` routes the
    /// original value to `bounced` and the error text to `error`, both
    /// carrying the input's tag; nothing reaches `forwarded`.
    pub fn new(
        predicate: impl Fn(&V, Option<&Tag>) -> anyhow::Result<bool> + 'static,
    ) -> Self {
        create_node(|o: &FilterOutputs<V>| {
            let forwarded = o.forwarded.clone();
            let bounced = o.bounced.clone();
            let error = o.error.clone();
            FilterInputs {
                value: InputPort::new(move |value: V, tag: Option<Tag>| {
                    match predicate(&value, tag.as_ref()) {
                        Ok(true) => forwarded.push(value, tag),
                        Ok(false) => {}
                        Err(err) => {
                            bounced.push(value, tag.clone());
                            error.push(err.to_string(), tag);
                        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn over_five() -> Filter<i64> {
        Filter::new(|value, _tag| {
            if *value == i64::MAX {
                Err(anyhow!("refusing sentinel value"))
            } else {
                Ok(*value > 5)
            }
        })
    }

    fn collect<V: Clone + 'static>(hub: &OutputHub<V>) -> Rc<RefCell<Vec<(V, Option<Tag>)>>> {
        let seen: Rc<RefCell<Vec<(V, Option<Tag>)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        hub.subscribe(move |value, tag| sink.borrow_mut().push((value, tag)));
        seen
    }

    #[test]
    fn test_accepted_value_is_forwarded_with_tag() {
        let filter = over_five();
        let forwarded = collect(&filter.o.forwarded);

        filter.i.value.push(8, Some(Tag::from("t1")));
        assert_eq!(*forwarded.borrow(), vec![(8, Some(Tag::from("t1")))]);
    }

    #[test]
    fn test_rejected_value_emits_nothing() {
        let filter = over_five();
        let forwarded = collect(&filter.o.forwarded);
        let bounced = collect(&filter.o.bounced);
        let errors = collect(&filter.o.error);

        filter.i.value.push(3, None);

        assert!(forwarded.borrow().is_empty());
        assert!(bounced.borrow().is_empty());
        assert!(errors.borrow().is_empty());
    }

    #[test]
    fn test_predicate_failure_bounces_with_error_signal() {
        let filter = over_five();
        let forwarded = collect(&filter.o.forwarded);
        let bounced = collect(&filter.o.bounced);
        let errors = collect(&filter.o.error);

        filter.i.value.push(i64::MAX, Some(Tag::from("t9")));

        assert!(forwarded.borrow().is_empty());
        assert_eq!(*bounced.borrow(), vec![(i64::MAX, Some(Tag::from("t9")))]);

        let errs = errors.borrow();
        assert_eq!(errs.len(), 1);
        assert!(!errs[0].0.is_empty());
        assert_eq!(errs[0].1, Some(Tag::from("t9")));
    }

    #[test]
    fn test_filter_keeps_running_after_failure() {
        let filter = over_five();
        let forwarded = collect(&filter.o.forwarded);

        filter.i.value.push(i64::MAX, None);
        filter.i.value.push(6, None);

        assert_eq!(forwarded.borrow().len(), 1);
        assert_eq!(forwarded.borrow()[0].0, 6);
    }

    #[test]
    fn test_predicate_sees_the_tag() {
        let filter: Filter<u32> =
            Filter::new(|_value, tag| Ok(matches!(tag, Some(Tag::Text(_)))));
        let forwarded = collect(&filter.o.forwarded);

        filter.i.value.push(1, None);
        filter.i.value.push(2, Some(Tag::from("yes")));

        assert_eq!(forwarded.borrow().len(), 1);
        assert_eq!(forwarded.borrow()[0].0, 2);
    }
}
