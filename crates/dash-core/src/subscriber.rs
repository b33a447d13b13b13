/// Observer notified whenever a collection's observable state changes.
///
/// Subscribers are held weakly; a dropped subscriber is pruned on the next
/// notification pass. The subscriber pulls the state it needs from the
/// controller rather than receiving a payload.
pub trait CollectionSubscriber: Send + Sync {
    fn on_collection_change(&self);
}
