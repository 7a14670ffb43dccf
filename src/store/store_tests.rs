//! Tests for the item store.

use super::*;
use crate::model::{builtin_seed, ItemKind};
use proptest::prelude::*;

// ===== Test Helpers =====

fn id(s: &str) -> ItemId {
    ItemId::new(s).expect("valid test id")
}

/// Built-in sample with readable ids: c0 r1 c2 c3 r4.
fn sample_store() -> ItemStore {
    let names = ["c0", "r1", "c2", "c3", "r4"];
    let seed: Vec<SeedEntry> = builtin_seed()
        .into_iter()
        .zip(names)
        .map(|(entry, name)| entry.with_id(name))
        .collect();
    ItemStore::initialize(&seed).expect("sample seed is valid")
}

fn ids(store: &ItemStore) -> Vec<ItemId> {
    store.iter().map(|item| item.id().clone()).collect()
}

/// Check the expansion-consistency invariant over the whole sequence.
fn assert_blocks_consistent(store: &ItemStore) {
    let items = store.items();
    for (index, item) in items.iter().enumerate() {
        let Some(state) = item.comment_state() else {
            continue;
        };
        let owned = items[index + 1..]
            .iter()
            .take_while(|row| row.is_reply_of(item.id()))
            .count();
        let expected = if state.is_expanded { state.reply_count } else { 0 };
        assert_eq!(
            owned,
            expected,
            "Comment {} at {} should own {} replies",
            item.id(),
            index,
            expected
        );
    }
}

// ===== initialize =====

#[test]
fn initialize_builds_sequence_in_seed_order() {
    let store = sample_store();
    assert_eq!(store.len(), 5);
    assert_eq!(
        ids(&store),
        vec![id("c0"), id("r1"), id("c2"), id("c3"), id("r4")]
    );
    assert!(store.get(1).is_some_and(Item::is_reply));
    assert!(matches!(
        store.get(4).map(Item::kind),
        Some(ItemKind::Reply { parent: None })
    ));
}

#[test]
fn initialize_starts_everything_collapsed() {
    let store = ItemStore::initialize(&builtin_seed()).expect("valid seed");
    assert!(store.iter().all(|item| !item.is_expanded()));
}

#[test]
fn initialize_assigns_fresh_unique_ids() {
    let store = ItemStore::initialize(&builtin_seed()).expect("valid seed");
    let mut unique = ids(&store);
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);
}

#[test]
fn initialize_empty_seed_is_empty_store() {
    let store = ItemStore::initialize(&[]).expect("empty seed is valid");
    assert!(store.is_empty());
}

#[test]
fn initialize_rejects_empty_id() {
    let seed = vec![
        SeedEntry::comment(true, 1).with_id("ok"),
        SeedEntry::comment(true, 1).with_id(""),
    ];
    match ItemStore::initialize(&seed) {
        Err(ListError::InvalidSeed { reason }) => assert!(reason.contains("entry 1")),
        other => panic!("Expected InvalidSeed, got {:?}", other),
    }
}

#[test]
fn initialize_rejects_duplicate_ids() {
    let seed = vec![
        SeedEntry::comment(true, 1).with_id("dup"),
        SeedEntry::reply().with_id("dup"),
    ];
    match ItemStore::initialize(&seed) {
        Err(ListError::InvalidSeed { reason }) => assert!(reason.contains("dup")),
        other => panic!("Expected InvalidSeed, got {:?}", other),
    }
}

// ===== locate =====

#[test]
fn locate_finds_current_position() {
    let store = sample_store();
    assert_eq!(store.locate(&id("c3")), Ok(3));
}

#[test]
fn locate_unknown_id_fails() {
    let store = sample_store();
    assert_eq!(
        store.locate(&id("nope")),
        Err(ListError::ItemNotFound(id("nope")))
    );
}

#[test]
fn locate_reflects_shift_after_expand() {
    let mut store = sample_store();
    store.expand(&id("c0")).expect("expand c0");
    assert_eq!(store.locate(&id("r1")), Ok(4));
    assert_eq!(store.locate(&id("c3")), Ok(6));
}

#[test]
fn locate_removed_reply_is_not_found() {
    let mut store = sample_store();
    store.expand(&id("c0")).expect("expand c0");
    let stale = store.get(2).expect("materialized reply").id().clone();

    store.collapse(&id("c0")).expect("collapse c0");

    assert_eq!(store.locate(&stale), Err(ListError::ItemNotFound(stale)));
}

// ===== expand =====

#[test]
fn expand_first_comment_inserts_three_after_it() {
    let mut store = sample_store();

    let inserted = store.expand(&id("c0")).expect("expand c0");

    assert_eq!(inserted, vec![1, 2, 3]);
    assert_eq!(store.len(), 8);
    assert!(store.get(0).is_some_and(Item::is_expanded));
    for index in 1..=3 {
        assert!(
            store.get(index).is_some_and(|row| row.is_reply_of(&id("c0"))),
            "Row {} should be a reply of c0",
            index
        );
    }
    // Pre-existing reply shifted down by the block
    assert_eq!(store.get(4).map(|item| item.id().clone()), Some(id("r1")));
    assert_blocks_consistent(&store);
}

#[test]
fn expand_later_comment_uses_its_current_position() {
    let mut store = sample_store();

    let inserted = store.expand(&id("c3")).expect("expand c3");

    assert_eq!(inserted, vec![4, 5]);
    assert_eq!(store.len(), 7);
    assert_eq!(store.get(6).map(|item| item.id().clone()), Some(id("r4")));
}

#[test]
fn expand_after_upstream_expand_recomputes_indices() {
    let mut store = sample_store();
    store.expand(&id("c0")).expect("expand c0");

    let inserted = store.expand(&id("c3")).expect("expand c3");

    // c3 moved from 3 to 6
    assert_eq!(inserted, vec![7, 8]);
    assert_eq!(store.len(), 10);
    assert_blocks_consistent(&store);
}

#[test]
fn expand_twice_is_noop() {
    let mut store = sample_store();
    store.expand(&id("c0")).expect("expand c0");
    let before = ids(&store);

    let second = store.expand(&id("c0")).expect("re-entrant expand");

    assert!(second.is_empty());
    assert_eq!(ids(&store), before);
    assert!(store.get(0).is_some_and(Item::is_expanded));
}

#[test]
fn expand_comment_without_replies_fails_without_mutation() {
    let mut store = sample_store();
    let before = ids(&store);

    let result = store.expand(&id("c2"));

    assert_eq!(result, Err(ListError::NotExpandable(id("c2"))));
    assert_eq!(ids(&store), before);
    assert!(!store.get(2).is_some_and(Item::is_expanded));
}

#[test]
fn expand_reply_fails() {
    let mut store = sample_store();
    assert_eq!(
        store.expand(&id("r1")),
        Err(ListError::NotExpandable(id("r1")))
    );
}

#[test]
fn expand_unknown_id_fails() {
    let mut store = sample_store();
    assert_eq!(
        store.expand(&id("ghost")),
        Err(ListError::ItemNotFound(id("ghost")))
    );
}

#[test]
fn expand_zero_replies_marks_expanded_without_rows() {
    let seed = vec![SeedEntry::comment(true, 0).with_id("empty")];
    let mut store = ItemStore::initialize(&seed).expect("valid seed");

    let inserted = store.expand(&id("empty")).expect("expand empty");

    assert!(inserted.is_empty());
    assert_eq!(store.len(), 1);
    assert!(store.get(0).is_some_and(Item::is_expanded));

    let removed = store.collapse(&id("empty")).expect("collapse empty");
    assert!(removed.is_empty());
    assert!(!store.get(0).is_some_and(Item::is_expanded));
}

#[test]
fn expand_last_comment_appends_at_end() {
    let seed = vec![
        SeedEntry::reply().with_id("r"),
        SeedEntry::comment(true, 2).with_id("tail"),
    ];
    let mut store = ItemStore::initialize(&seed).expect("valid seed");

    assert_eq!(store.expand(&id("tail")), Ok(vec![2, 3]));
    assert_eq!(store.len(), 4);
}

#[test]
fn materialized_replies_get_unique_ids() {
    let mut store = sample_store();
    store.expand(&id("c0")).expect("expand c0");
    store.expand(&id("c3")).expect("expand c3");

    let mut all = ids(&store);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), store.len());
}

// ===== collapse =====

#[test]
fn collapse_restores_original_sequence() {
    let mut store = sample_store();
    let before = ids(&store);
    store.expand(&id("c0")).expect("expand c0");

    let removed = store.collapse(&id("c0")).expect("collapse c0");

    assert_eq!(removed, vec![1, 2, 3]);
    assert_eq!(ids(&store), before);
    assert!(!store.get(0).is_some_and(Item::is_expanded));
}

#[test]
fn collapse_only_removes_own_block() {
    let mut store = sample_store();
    store.expand(&id("c0")).expect("expand c0");
    store.expand(&id("c3")).expect("expand c3");

    let removed = store.collapse(&id("c3")).expect("collapse c3");

    assert_eq!(removed, vec![7, 8]);
    assert_eq!(store.len(), 8);
    assert!(store.get(0).is_some_and(Item::is_expanded));
    assert_blocks_consistent(&store);
}

#[test]
fn collapse_when_collapsed_is_noop() {
    let mut store = sample_store();
    let before = ids(&store);

    assert_eq!(store.collapse(&id("c0")), Ok(Vec::new()));
    assert_eq!(ids(&store), before);
}

#[test]
fn collapse_comment_without_replies_fails() {
    let mut store = sample_store();
    assert_eq!(
        store.collapse(&id("c2")),
        Err(ListError::NotExpandable(id("c2")))
    );
}

#[test]
fn collapse_refuses_broken_block() {
    let mut store = sample_store();
    store.expand(&id("c0")).expect("expand c0");
    // Simulate a foreign row inside the block
    store.items[2] = Item::reply(id("intruder"), None);
    let before = ids(&store);

    let result = store.collapse(&id("c0"));

    assert_eq!(result, Err(ListError::BrokenReplyBlock(id("c0"))));
    assert_eq!(ids(&store), before, "Refused collapse must not mutate");
    assert!(store.get(0).is_some_and(Item::is_expanded));
}

// ===== toggle =====

#[test]
fn toggle_alternates_direction() {
    let mut store = sample_store();

    let first = store.toggle(&id("c3")).expect("first toggle");
    let second = store.toggle(&id("c3")).expect("second toggle");
    let third = store.toggle(&id("c3")).expect("third toggle");

    assert_eq!(first.direction, ToggleDirection::Expanded);
    assert_eq!(first.changed, vec![4, 5]);
    assert_eq!(second.direction, ToggleDirection::Collapsed);
    assert_eq!(second.changed, vec![4, 5]);
    assert_eq!(third.direction, ToggleDirection::Expanded);
}

#[test]
fn toggle_reply_fails() {
    let mut store = sample_store();
    assert_eq!(
        store.toggle(&id("r4")),
        Err(ListError::NotExpandable(id("r4")))
    );
}

// ===== Property-based tests =====

/// Seed of comments only; each is (has_replies, reply_count).
fn arb_comments() -> impl Strategy<Value = Vec<(bool, usize)>> {
    prop::collection::vec((any::<bool>(), 0usize..=8), 1..12)
}

proptest! {
    /// expand inserts exactly reply_count rows at parent+1..=parent+k
    #[test]
    fn prop_expand_inserts_contiguous_block(
        comments in arb_comments(),
        pick in any::<prop::sample::Index>()
    ) {
        let seed: Vec<SeedEntry> = comments
            .iter()
            .map(|&(has, count)| SeedEntry::comment(has, count))
            .collect();
        let mut store = ItemStore::initialize(&seed).expect("valid seed");
        let target = pick.index(store.len());
        let target_id = store.get(target).expect("in range").id().clone();
        let (has, count) = comments[target];
        let before_len = store.len();

        match store.expand(&target_id) {
            Ok(inserted) => {
                prop_assert!(has);
                let expected: Vec<usize> = (target + 1..=target + count).collect();
                prop_assert_eq!(inserted, expected);
                prop_assert_eq!(store.len(), before_len + count);
            }
            Err(err) => {
                prop_assert!(!has);
                prop_assert_eq!(err, ListError::NotExpandable(target_id));
                prop_assert_eq!(store.len(), before_len);
            }
        }
    }

    /// Any toggle sequence keeps blocks consistent, and toggling every
    /// comment back restores the original ordering
    #[test]
    fn prop_toggle_sequences_preserve_invariants(
        comments in arb_comments(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..30)
    ) {
        let seed: Vec<SeedEntry> = comments
            .iter()
            .map(|&(has, count)| SeedEntry::comment(has, count))
            .collect();
        let mut store = ItemStore::initialize(&seed).expect("valid seed");
        let original = ids(&store);

        for pick in picks {
            let comment_id = original[pick.index(original.len())].clone();
            let was_expanded = store
                .get(store.locate(&comment_id).expect("comments persist"))
                .is_some_and(Item::is_expanded);
            match store.toggle(&comment_id) {
                Ok(toggled) => {
                    let expected = if was_expanded {
                        ToggleDirection::Collapsed
                    } else {
                        ToggleDirection::Expanded
                    };
                    prop_assert_eq!(toggled.direction, expected);
                }
                Err(err) => prop_assert_eq!(err, ListError::NotExpandable(comment_id)),
            }
            assert_blocks_consistent(&store);
        }

        for comment_id in &original {
            let _ = store.collapse(comment_id);
        }
        prop_assert_eq!(ids(&store), original);
    }
}
