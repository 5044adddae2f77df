/// A domain-agnostic notification event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - **renderable** (`Display` yields the human-readable notification line)
pub trait Event: Clone + core::fmt::Debug + core::fmt::Display + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}
