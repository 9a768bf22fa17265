//! Authoritative raw value storage with dirty tracking.

/// Holds the authoritative raw markup value for one widget instance.
///
/// The store owns three pieces of state:
/// - the committed value (the text the form sees),
/// - a dirty flag, set on every user edit and cleared when a change
///   notification fires,
/// - the seed captured at connection time, used by form reset.
///
/// A monotonic revision counter increments on every committed change; hosts
/// can use it for cache invalidation.
#[derive(Clone, Debug, Default)]
pub struct ValueStore {
    value: String,
    value_rev: u64,
    dirty: bool,
    seed: Option<String>,
}

impl ValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the store has never held a non-empty value and no
    /// commit has occurred.
    pub fn is_unset(&self) -> bool {
        self.value.is_empty() && self.value_rev == 0
    }

    /// Monotonic revision counter for the committed value.
    ///
    /// Increments on any commit. Useful for cache invalidation.
    pub fn revision(&self) -> u64 {
        self.value_rev
    }

    /// Commit a new value, bumping the revision.
    ///
    /// Returns `true` if the committed text differs from the previous value.
    pub fn commit(&mut self, value: String) -> bool {
        let changed = self.value != value;
        self.value = value;
        self.value_rev = self.value_rev.wrapping_add(1);
        changed
    }

    /// Mark the value as edited by the user since the last change
    /// notification.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` if an edit occurred since the last notification.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    ///
    /// Called when a change notification fires; the flag's lifecycle
    /// guarantees at most one notification per dirty-then-blur cycle.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Record the seed content captured at connection time.
    pub fn capture_seed(&mut self, seed: String) {
        self.seed = Some(seed);
    }

    /// The seed captured at connection, if any.
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_reports_whether_value_changed() {
        let mut store = ValueStore::new();
        assert!(store.commit("a".to_string()));
        assert!(!store.commit("a".to_string()));
        assert!(store.commit("b".to_string()));
        assert_eq!(store.value(), "b");
    }

    #[test]
    fn revision_increments_on_every_commit() {
        let mut store = ValueStore::new();
        assert_eq!(store.revision(), 0);
        store.commit("a".to_string());
        store.commit("a".to_string());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn take_dirty_clears_and_reports() {
        let mut store = ValueStore::new();
        assert!(!store.take_dirty());
        store.mark_dirty();
        assert!(store.is_dirty());
        assert!(store.take_dirty());
        assert!(!store.is_dirty());
        assert!(!store.take_dirty());
    }

    #[test]
    fn unset_until_first_commit() {
        let mut store = ValueStore::new();
        assert!(store.is_unset());
        store.commit(String::new());
        assert!(!store.is_unset());
    }

    #[test]
    fn seed_is_remembered() {
        let mut store = ValueStore::new();
        assert_eq!(store.seed(), None);
        store.capture_seed("# Hi".to_string());
        assert_eq!(store.seed(), Some("# Hi"));
    }
}
