//! Property-based tests for the store and reducer composition.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use reducto::{Action, CombineReducers, Reducer, Store};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
enum ListAction {
    Push(i32),
    Pop,
    Reverse,
    Noop,
}

impl Action for ListAction {
    fn kind(&self) -> &str {
        match self {
            Self::Push(_) => "PUSH",
            Self::Pop => "POP",
            Self::Reverse => "REVERSE",
            Self::Noop => "NOOP",
        }
    }
}

fn list(state: Option<&Vec<i32>>, action: &ListAction) -> Vec<i32> {
    let mut next = state.cloned().unwrap_or_default();
    match action {
        ListAction::Push(value) => next.push(*value),
        ListAction::Pop => {
            next.pop();
        }
        ListAction::Reverse => next.reverse(),
        ListAction::Noop => {}
    }
    next
}

prop_compose! {
    fn arbitrary_action()(variant in 0..4u8, value in -100i32..100) -> ListAction {
        match variant {
            0 => ListAction::Push(value),
            1 => ListAction::Pop,
            2 => ListAction::Reverse,
            _ => ListAction::Noop,
        }
    }
}

proptest! {
    #[test]
    fn state_follows_reducer_after_every_dispatch(
        actions in prop::collection::vec(arbitrary_action(), 0..32)
    ) {
        let store = Store::new(list);
        let mut expected: Option<Vec<i32>> = None;

        for action in actions {
            let next = list(expected.as_ref(), &action);
            let returned = store.dispatch(action).unwrap();

            prop_assert_eq!(&*returned, &next);
            let current = store.get_state();
            prop_assert_eq!(current.as_deref(), Some(&next));
            expected = Some(next);
        }
    }

    #[test]
    fn every_dispatch_notifies_every_listener_once(
        actions in prop::collection::vec(arbitrary_action(), 0..16),
        listeners in 0usize..5
    ) {
        let store = Store::new(list);
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..listeners {
            let calls = Arc::clone(&calls);
            store.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        let dispatched = actions.len();
        for action in actions {
            store.dispatch(action).unwrap();
        }

        prop_assert_eq!(calls.load(Ordering::SeqCst), dispatched * listeners);
        prop_assert_eq!(store.dispatch_count(), dispatched as u64);
    }

    #[test]
    fn notification_order_matches_registration_order(count in 1usize..8) {
        let store = Store::new(list);
        let order = Arc::new(Mutex::new(Vec::new()));

        for id in 0..count {
            let order = Arc::clone(&order);
            store.subscribe(move || order.lock().unwrap().push(id));
        }

        store.dispatch(ListAction::Noop).unwrap();

        let expected: Vec<usize> = (0..count).collect();
        prop_assert_eq!(order.lock().unwrap().clone(), expected);
    }

    #[test]
    fn unsubscribing_removes_exactly_one_registration(
        count in 1usize..6,
        victim in 0usize..6,
        repeats in 1usize..4
    ) {
        let victim = victim % count;
        let store = Store::new(list);
        let hits = Arc::new(Mutex::new(vec![0usize; count]));
        let shared: Arc<dyn Fn() + Send + Sync> = {
            let hits = Arc::clone(&hits);
            Arc::new(move || hits.lock().unwrap()[0] += 1)
        };

        let subscriptions: Vec<_> = (0..count)
            .map(|_| store.subscribe_shared(Arc::clone(&shared)))
            .collect();

        for _ in 0..repeats {
            subscriptions[victim].unsubscribe();
        }
        store.dispatch(ListAction::Noop).unwrap();

        prop_assert_eq!(store.listener_count(), count - 1);
        prop_assert_eq!(hits.lock().unwrap()[0], count - 1);
        for (index, subscription) in subscriptions.iter().enumerate() {
            prop_assert_eq!(subscription.is_active(), index != victim);
        }
    }

    #[test]
    fn combined_slices_match_standalone_reducers(
        actions in prop::collection::vec(arbitrary_action(), 0..16)
    ) {
        let combined = CombineReducers::new()
            .slice("left", list)
            .slice("right", list)
            .build();

        let mut composite = None;
        let mut standalone: Option<Vec<i32>> = None;
        for action in &actions {
            composite = Some(combined.reduce(composite.as_ref(), action).unwrap());
            standalone = Some(list(standalone.as_ref(), action));
        }

        if let Some(composite) = composite {
            prop_assert_eq!(composite.get("left"), standalone.as_ref());
            prop_assert_eq!(composite.get("right"), standalone.as_ref());
        }
    }
}
