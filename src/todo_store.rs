use crate::todo::{EntryId, TodoEntry};
use chrono::Local;
use log::{debug, info};
use std::rc::Rc;

/// Warning shown by the front end when `add` reports a duplicate.
pub const DUPLICATE_WARNING: &str =
    "The entry is identical with an existing todo. Do you want to keep it?";

/// Immutable view of the list at one point in time.
pub type Snapshot = Rc<[TodoEntry]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(EntryId),
    Duplicate,
    /// Description or date was blank. Nothing changed.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// In-memory ordered todo list owned by a single UI session.
pub struct TodoStore {
    entries: Vec<TodoEntry>,
    snapshot: Snapshot,
    next_id: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            snapshot: Rc::from(Vec::new()),
            next_id: 1,
            next_subscription: 0,
            listeners: Vec::new(),
        }
    }

    pub fn add(&mut self, description: &str, date: &str) -> AddOutcome {
        if description.trim().is_empty() || date.trim().is_empty() {
            debug!("rejected blank entry (description={description:?}, date={date:?})");
            return AddOutcome::Rejected;
        }
        if self.contains_duplicate(description, date) {
            info!("duplicate entry {description:?} on {date:?} not added");
            return AddOutcome::Duplicate;
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(TodoEntry {
            id,
            description: description.to_string(),
            date: date.to_string(),
            added_at: Local::now(),
        });
        debug!("added {id} ({} entries)", self.entries.len());
        self.publish();
        AddOutcome::Added(id)
    }

    /// Removes the entry with `id`. Returns `false` and leaves the list alone
    /// when no such entry exists.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            debug!("remove {id}: no such entry");
            return false;
        };
        self.entries.remove(index);
        debug!("removed {id} ({} entries)", self.entries.len());
        self.publish();
        true
    }

    pub fn list(&self) -> &[TodoEntry] {
        &self.entries
    }

    pub fn snapshot(&self) -> Snapshot {
        Rc::clone(&self.snapshot)
    }

    pub fn get(&self, id: EntryId) -> Option<&TodoEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains_duplicate(&self, description: &str, date: &str) -> bool {
        self.entries.iter().any(|e| e.matches(description, date))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers `listener` to receive a fresh snapshot after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn publish(&mut self) {
        self.snapshot = Rc::from(self.entries.clone());
        for (_, listener) in &mut self.listeners {
            listener(&self.snapshot);
        }
    }
}
