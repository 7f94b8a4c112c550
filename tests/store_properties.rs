use proptest::prelude::*;
use todo_table::{AddOutcome, EntryId, TodoStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String, String),
    /// Index into the ids handed out so far; out of range means an unknown id.
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => ("[ a-c]{0,3}", "[ 1-2]{0,2}").prop_map(|(d, t)| Op::Add(d, t)),
        2 => (0usize..12).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn list_length_tracks_successful_mutations(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = TodoStore::new();
        let mut issued: Vec<EntryId> = Vec::new();
        let mut added = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Add(description, date) => {
                    let blank = description.trim().is_empty() || date.trim().is_empty();
                    let duplicate = store.contains_duplicate(&description, &date);
                    let before = store.len();
                    match store.add(&description, &date) {
                        AddOutcome::Added(id) => {
                            prop_assert!(!blank && !duplicate);
                            prop_assert_eq!(store.len(), before + 1);
                            issued.push(id);
                            added += 1;
                        }
                        AddOutcome::Duplicate => {
                            prop_assert!(!blank && duplicate);
                            prop_assert_eq!(store.len(), before);
                        }
                        AddOutcome::Rejected => {
                            prop_assert!(blank);
                            prop_assert_eq!(store.len(), before);
                        }
                    }
                }
                Op::Remove(i) => {
                    let id = issued.get(i).copied().unwrap_or(EntryId(u64::MAX));
                    let present = store.get(id).is_some();
                    let before: Vec<_> = store.list().to_vec();
                    if store.remove(id) {
                        prop_assert!(present);
                        prop_assert_eq!(store.len(), before.len() - 1);
                        prop_assert!(store.get(id).is_none());
                        removed += 1;
                    } else {
                        prop_assert!(!present);
                        prop_assert_eq!(store.list(), before.as_slice());
                    }
                }
            }

            prop_assert_eq!(store.len(), added - removed);
            for entry in store.list() {
                prop_assert!(!entry.description.trim().is_empty());
                prop_assert!(!entry.date.trim().is_empty());
            }
        }
    }

    #[test]
    fn remaining_entries_keep_insertion_order(count in 1usize..20, victim in 0usize..20) {
        let mut store = TodoStore::new();
        let ids: Vec<EntryId> = (0..count)
            .filter_map(|i| match store.add(&format!("task {i}"), "2024-12-01") {
                AddOutcome::Added(id) => Some(id),
                _ => None,
            })
            .collect();

        store.remove(ids[victim % count]);

        let remaining: Vec<EntryId> = store.list().iter().map(|e| e.id).collect();
        let expected: Vec<EntryId> = ids
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != victim % count)
            .map(|(_, id)| *id)
            .collect();
        prop_assert_eq!(remaining, expected);
    }
}
