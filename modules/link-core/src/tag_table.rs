use alloc::collections::BTreeMap;

use crate::tag_handle::TagHandle;


/// Ordered index of outstanding tag commands awaiting hardware acks.
///
/// Entries live for the duration of a single quiesce call: inserted before
/// the tag command is issued, removed by the ack path or by the issuing
/// call's failure handling.
pub struct TagTable<S> {
  entries: BTreeMap<TagHandle, S>,
}

impl<S> TagTable<S> {
  /// Creates an empty table.
  #[must_use]
  pub const fn new() -> Self {
    Self { entries: BTreeMap::new() }
  }

  /// Registers the signal for an outgoing tag. Handles are allocator-unique,
  /// so a collision indicates a logic error upstream.
  pub fn insert(&mut self, tag: TagHandle, signal: S) {
    let previous = self.entries.insert(tag, signal);
    debug_assert!(previous.is_none(), "duplicate {tag}");
  }

  /// Removes and returns the signal registered for `tag`, if any.
  pub fn remove(&mut self, tag: TagHandle) -> Option<S> {
    self.entries.remove(&tag)
  }

  /// Number of tags still awaiting their ack.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// `true` when no tag is outstanding.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<S> Default for TagTable<S> {
  fn default() -> Self {
    Self::new()
  }
}
