/// Subscriber to selection changes: receives the new selection.
type SelectionSubscriber = Box<dyn FnMut(Option<usize>)>;

/// Subscriber to store changes: receives the patch counter.
type StoreSubscriber = Box<dyn FnMut(u64)>;

/// Decouples the reconciler and selection changes from the projections.
///
/// Two independently-triggerable channels: `selection_changed` drives the
/// candlestick projection, `store_changed` drives the allocation
/// projection. Delivery is synchronous and in-order per channel — no
/// reordering, no dropped events — but the two channels carry no ordering
/// guarantee relative to each other.
///
/// Subscribers are plain `FnMut` closures without a `Send` bound: edits
/// and selection changes arrive from a single-threaded event-dispatch
/// context, so the bus never crosses threads.
pub struct ChangeBus {
    selection_subscribers: Vec<SelectionSubscriber>,
    store_subscribers: Vec<StoreSubscriber>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self {
            selection_subscribers: Vec::new(),
            store_subscribers: Vec::new(),
        }
    }

    /// Subscribe to the `selection_changed` channel.
    pub fn on_selection_changed(&mut self, subscriber: impl FnMut(Option<usize>) + 'static) {
        self.selection_subscribers.push(Box::new(subscriber));
    }

    /// Subscribe to the `store_changed` channel.
    pub fn on_store_changed(&mut self, subscriber: impl FnMut(u64) + 'static) {
        self.store_subscribers.push(Box::new(subscriber));
    }

    /// Publish a selection change to all subscribers, in subscription order.
    pub fn publish_selection_changed(&mut self, selection: Option<usize>) {
        for subscriber in &mut self.selection_subscribers {
            subscriber(selection);
        }
    }

    /// Publish a store change (the current patch counter) to all
    /// subscribers, in subscription order.
    pub fn publish_store_changed(&mut self, patch_count: u64) {
        for subscriber in &mut self.store_subscribers {
            subscriber(patch_count);
        }
    }

    pub fn selection_subscriber_count(&self) -> usize {
        self.selection_subscribers.len()
    }

    pub fn store_subscriber_count(&self) -> usize {
        self.store_subscribers.len()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeBus")
            .field("selection_subscribers", &self.selection_subscribers.len())
            .field("store_subscribers", &self.store_subscribers.len())
            .finish()
    }
}
