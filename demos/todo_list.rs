//! Todo List Store
//!
//! This example demonstrates a single store driven by one reducer.
//!
//! Key concepts:
//! - Lazy initialisation (the reducer supplies the default state)
//! - Listeners reading the new state after every dispatch
//! - Unsubscribing a listener
//!
//! Run with: cargo run --example todo_list

use reducto::{Action, Store};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct Todo {
    id: u32,
    name: String,
    complete: bool,
}

#[derive(Debug)]
enum TodoAction {
    Add(Todo),
    Remove(u32),
    Toggle(u32),
}

impl Action for TodoAction {
    fn kind(&self) -> &str {
        match self {
            Self::Add(_) => "ADD_TODO",
            Self::Remove(_) => "REMOVE_TODO",
            Self::Toggle(_) => "TOGGLE_TODO",
        }
    }
}

fn todos(state: Option<&Vec<Todo>>, action: &TodoAction) -> Vec<Todo> {
    let todos = state.cloned().unwrap_or_default();
    match action {
        TodoAction::Add(todo) => {
            let mut next = todos;
            next.push(todo.clone());
            next
        }
        TodoAction::Remove(id) => todos.into_iter().filter(|t| t.id != *id).collect(),
        TodoAction::Toggle(id) => todos
            .into_iter()
            .map(|todo| {
                if todo.id == *id {
                    Todo {
                        complete: !todo.complete,
                        ..todo
                    }
                } else {
                    todo
                }
            })
            .collect(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Todo List Store Example ===\n");

    let store = Store::new(todos);
    println!("State before any dispatch: {:?}\n", store.get_state());

    let observed = store.downgrade();
    let subscription = store.subscribe(move || {
        if let Some(store) = observed.upgrade() {
            println!("The new state is: {:?}", store.get_state());
        }
    });

    store
        .dispatch(TodoAction::Add(Todo {
            id: 0,
            name: "Learn reducers".to_string(),
            complete: false,
        }))
        .unwrap();

    store
        .dispatch(TodoAction::Add(Todo {
            id: 1,
            name: "Read a book".to_string(),
            complete: true,
        }))
        .unwrap();

    store.dispatch(TodoAction::Toggle(0)).unwrap();

    println!("\nUnsubscribing the logger");
    subscription.unsubscribe();

    store.dispatch(TodoAction::Remove(1)).unwrap();
    println!("Final state: {:?}", store.get_state());

    println!("\n=== Example Complete ===");
}
