//! Group bus: synchronous publish/subscribe keyed by group name.
//!
//! Carousels sharing a group mirror each other's `slide_to` calls. The payload is
//! the raw, unclamped target index; each receiver clamps it against its own range.
//! Receivers apply the move with `is_group_source = false`, so a delivery never
//! triggers another publish.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Opaque subscription handle returned by [`GroupBus::subscribe`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

type Handler = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    topics: HashMap<String, Vec<(SubscriptionId, Handler)>>,
}

/// Topic name used for a group.
pub fn topic(group: &str) -> String {
    format!("slideGroup:{group}")
}

/// Cloneable handle to a subscriber registry. Clones share the registry.
///
/// Construct a fresh bus per test; hosts wanting one process-wide channel use
/// [`GroupBus::shared`].
#[derive(Clone, Default)]
pub struct GroupBus {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for GroupBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reg = self.registry.borrow();
        let mut map = f.debug_map();
        for (name, subs) in reg.topics.iter() {
            map.entry(name, &subs.len());
        }
        map.finish()
    }
}

thread_local! {
    static SHARED: GroupBus = GroupBus::new();
}

impl GroupBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// The thread's shared bus.
    pub fn shared() -> Self {
        SHARED.with(|bus| bus.clone())
    }

    pub fn subscribe(&self, group: &str, handler: impl Fn(f64) + 'static) -> SubscriptionId {
        let mut reg = self.registry.borrow_mut();
        let id = SubscriptionId(reg.next_id);
        reg.next_id = reg.next_id.wrapping_add(1);
        reg.topics
            .entry(topic(group))
            .or_default()
            .push((id, Rc::new(handler)));
        debug!("group bus: {id:?} subscribed to {group}");
        id
    }

    /// Remove a subscription. Returns false when it was not registered.
    pub fn unsubscribe(&self, group: &str, id: SubscriptionId) -> bool {
        let mut reg = self.registry.borrow_mut();
        let key = topic(group);
        let Some(subs) = reg.topics.get_mut(&key) else {
            return false;
        };
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        let removed = subs.len() != before;
        if subs.is_empty() {
            reg.topics.remove(&key);
        }
        if removed {
            debug!("group bus: {id:?} unsubscribed from {group}");
        }
        removed
    }

    /// Deliver `index` to every subscriber of `group` except `from`.
    /// Returns the number of handlers invoked.
    pub fn publish(&self, group: &str, from: Option<SubscriptionId>, index: f64) -> usize {
        // Snapshot handlers so they may (un)subscribe while running.
        let handlers: Vec<Handler> = {
            let reg = self.registry.borrow();
            match reg.topics.get(&topic(group)) {
                Some(subs) => subs
                    .iter()
                    .filter(|(sid, _)| Some(*sid) != from)
                    .map(|(_, h)| Rc::clone(h))
                    .collect(),
                None => Vec::new(),
            }
        };
        for handler in &handlers {
            handler(index);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, group: &str) -> usize {
        self.registry
            .borrow()
            .topics
            .get(&topic(group))
            .map_or(0, Vec::len)
    }
}
