// tests/task_source.rs

use std::collections::HashSet;
use std::sync::Mutex;
use std::thread;

use fork_cmd::engine::TaskSource;
use fork_cmd::types::TaskId;
use proptest::prelude::*;

/// Drain `source` from `consumers` threads at once; returns what each got.
fn drain_concurrently(source: &TaskSource, consumers: usize) -> Vec<Vec<TaskId>> {
    let taken = Mutex::new(Vec::new());

    thread::scope(|s| {
        for _ in 0..consumers {
            s.spawn(|| {
                let mut mine = Vec::new();
                while let Some(id) = source.next() {
                    mine.push(id);
                }
                taken.lock().unwrap().push(mine);
            });
        }
    });

    taken.into_inner().unwrap()
}

#[test]
fn empty_source_is_exhausted_immediately() {
    let source = TaskSource::new(0);
    assert!(source.is_exhausted());
    assert_eq!(source.next(), None);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn single_consumer_gets_ids_in_order() {
    let source = TaskSource::new(3);
    let ids: Vec<_> = std::iter::from_fn(|| source.next()).collect();
    assert_eq!(ids, vec![TaskId::new(0), TaskId::new(1), TaskId::new(2)]);
}

#[test]
fn stays_exhausted_after_last_id() {
    let source = TaskSource::new(2);
    source.next();
    source.next();

    for _ in 0..100 {
        assert_eq!(source.next(), None);
    }
    assert_eq!(source.remaining(), 0);
    assert_eq!(source.total(), 2);
}

#[test]
fn remaining_counts_down() {
    let source = TaskSource::new(4);
    assert_eq!(source.remaining(), 4);
    source.next();
    assert_eq!(source.remaining(), 3);
}

#[test]
fn more_consumers_than_ids() {
    let source = TaskSource::new(3);
    let per_consumer = drain_concurrently(&source, 16);

    assert_eq!(per_consumer.len(), 16);
    let total: usize = per_consumer.iter().map(Vec::len).sum();
    assert_eq!(total, 3);
}

proptest! {
    #[test]
    fn every_id_is_handed_out_exactly_once(total in 0usize..500, consumers in 1usize..12) {
        let source = TaskSource::new(total);
        let per_consumer = drain_concurrently(&source, consumers);

        let all: Vec<TaskId> = per_consumer.into_iter().flatten().collect();
        let unique: HashSet<TaskId> = all.iter().copied().collect();

        prop_assert_eq!(all.len(), total);
        prop_assert_eq!(unique.len(), total);
        prop_assert!(all.iter().all(|id| id.index() < total));
        prop_assert!(source.is_exhausted());
    }
}
