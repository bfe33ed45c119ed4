use super::{compute_changes, split_changes, ChangeSet, RouteChange};
use crate::error::ConfigError;
use crate::models::{Route, RoutingSet};
use std::collections::BTreeSet;

fn changes(n: usize) -> ChangeSet {
    (0..n)
        .map(|i| {
            let change = if i % 3 == 0 {
                RouteChange::Delete
            } else {
                RouteChange::Set(Route::new(format!("user{i}@example.net")))
            };
            (format!("k{i:03}@example.org"), change)
        })
        .collect()
}

fn assert_partition(input: &ChangeSet, batches: &[ChangeSet], limit: usize) {
    let mut seen = BTreeSet::new();
    for batch in batches {
        assert!(!batch.is_empty(), "empty batch emitted");
        assert!(batch.len() <= limit, "batch of {} exceeds limit {}", batch.len(), limit);
        for (alias, change) in batch {
            assert!(seen.insert(alias.clone()), "{alias} appears in more than one batch");
            assert_eq!(input.get(alias), Some(change), "{alias} changed while batching");
        }
    }
    assert_eq!(seen.len(), input.len(), "some entries were dropped");
}

#[test]
fn test_empty_input_yields_no_batches() {
    let batches = split_changes(&ChangeSet::new(), 10).unwrap();
    assert!(batches.is_empty());
}

#[test]
fn test_smaller_than_limit_is_single_batch() {
    let input = changes(4);

    let batches = split_changes(&input, 5).unwrap();

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0], input);
}

#[test]
fn test_five_by_two() {
    let input = changes(5);

    let batches = split_changes(&input, 2).unwrap();

    let sizes: Vec<usize> = batches.iter().map(ChangeSet::len).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert_partition(&input, &batches, 2);
}

#[test]
fn test_exact_multiple_has_no_trailing_batch() {
    let input = changes(6);

    let batches = split_changes(&input, 3).unwrap();

    let sizes: Vec<usize> = batches.iter().map(ChangeSet::len).collect();
    assert_eq!(sizes, vec![3, 3]);
}

#[test]
fn test_size_equal_to_limit_is_one_full_batch() {
    let input = changes(4);

    let batches = split_changes(&input, 4).unwrap();

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0], input);
}

#[test]
fn test_limit_of_one() {
    let input = changes(3);

    let batches = split_changes(&input, 1).unwrap();

    assert_eq!(batches.len(), 3);
    assert_partition(&input, &batches, 1);
}

#[test]
fn test_zero_limit_is_rejected() {
    let err = split_changes(&changes(3), 0).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "limit"));
}

#[test]
fn test_zero_limit_is_rejected_even_for_empty_input() {
    assert!(split_changes(&ChangeSet::new(), 0).is_err());
}

#[test]
fn test_partition_holds_across_sizes() {
    for size in [1, 2, 7, 99, 100, 101, 250] {
        let input = changes(size);
        for limit in [1, 2, 3, 10, 100] {
            let batches = split_changes(&input, limit).unwrap();

            assert_partition(&input, &batches, limit);
            assert_eq!(batches.len(), size.div_ceil(limit));
            for batch in &batches[..batches.len() - 1] {
                assert_eq!(batch.len(), limit);
            }
        }
    }
}

#[test]
fn test_batching_preserves_delete_markers() {
    let current: RoutingSet =
        (0..5).map(|i| (format!("old{i}@example.org"), Route::new("x@x.com"))).collect();

    let diff = compute_changes(&current, &RoutingSet::new());
    let batches = split_changes(&diff, 2).unwrap();

    assert_eq!(batches.len(), 3);
    assert!(batches.iter().flat_map(|b| b.iter()).all(|(_, change)| change.is_delete()));
}

#[test]
fn test_batches_are_reproducible() {
    let input = changes(10);

    let first = split_changes(&input, 3).unwrap();
    let second = split_changes(&input.clone(), 3).unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].aliases().next(), Some("k000@example.org"));
}
