use std::sync::Arc;
use std::thread;

use codeclub::ui::mvi::{Intent, Reducer, StateStore, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
struct Pair {
    left: u32,
    right: u32,
}

impl UiState for Pair {}

struct SetBoth(u32);

impl Intent for SetBoth {}

struct PairReducer;

impl Reducer for PairReducer {
    type State = Pair;
    type Intent = SetBoth;

    fn reduce(_state: Pair, intent: SetBoth) -> Pair {
        Pair {
            left: intent.0,
            right: intent.0,
        }
    }
}

#[test]
fn concurrent_dispatches_never_mix_fields() {
    let store = Arc::new(StateStore::<PairReducer>::new());
    let receiver = store.subscribe();

    let writers: Vec<_> = (1..=8)
        .map(|writer| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for step in 0..500 {
                    let published = store.dispatch(SetBoth(writer * 1000 + step));
                    assert_eq!(published.left, published.right);
                }
            })
        })
        .collect();

    for _ in 0..1000 {
        let seen = receiver.borrow().clone();
        assert_eq!(seen.left, seen.right);
    }

    for writer in writers {
        writer.join().unwrap();
    }

    let last = store.state();
    assert_eq!(last.left, last.right);
    assert_eq!(last.left % 1000, 499);
}

#[test]
fn last_applied_dispatch_wins() {
    let store = StateStore::<PairReducer>::new();
    store.dispatch(SetBoth(1));
    store.dispatch(SetBoth(2));
    assert_eq!(store.state(), Pair { left: 2, right: 2 });
}
