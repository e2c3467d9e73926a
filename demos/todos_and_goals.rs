//! Todos and Goals
//!
//! This example demonstrates combining two slice reducers into one store.
//!
//! Key concepts:
//! - `combine_reducers!` for a typed composite state
//! - Every slice reducer sees every action
//! - Store configuration through the builder
//!
//! Run with: cargo run --example todos_and_goals

use reducto::{combine_reducers, Action, Store};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct Todo {
    id: u32,
    name: String,
    complete: bool,
}

#[derive(Clone, Debug)]
struct Goal {
    id: u32,
    name: String,
}

#[derive(Debug)]
enum AppAction {
    AddTodo(Todo),
    RemoveTodo(u32),
    AddGoal(Goal),
    RemoveGoal(u32),
    Init,
}

impl Action for AppAction {
    fn kind(&self) -> &str {
        match self {
            Self::AddTodo(_) => "ADD_TODO",
            Self::RemoveTodo(_) => "REMOVE_TODO",
            Self::AddGoal(_) => "ADD_GOAL",
            Self::RemoveGoal(_) => "REMOVE_GOAL",
            Self::Init => "@@INIT",
        }
    }
}

fn add_todo(todo: Todo) -> AppAction {
    AppAction::AddTodo(todo)
}

fn add_goal(goal: Goal) -> AppAction {
    AppAction::AddGoal(goal)
}

fn todos(state: Option<&Vec<Todo>>, action: &AppAction) -> Vec<Todo> {
    let todos = state.cloned().unwrap_or_default();
    match action {
        AppAction::AddTodo(todo) => {
            let mut next = todos;
            next.push(todo.clone());
            next
        }
        AppAction::RemoveTodo(id) => todos.into_iter().filter(|t| t.id != *id).collect(),
        _ => todos,
    }
}

fn goals(state: Option<&Vec<Goal>>, action: &AppAction) -> Vec<Goal> {
    let goals = state.cloned().unwrap_or_default();
    match action {
        AppAction::AddGoal(goal) => {
            let mut next = goals;
            next.push(goal.clone());
            next
        }
        AppAction::RemoveGoal(id) => goals.into_iter().filter(|g| g.id != *id).collect(),
        _ => goals,
    }
}

combine_reducers! {
    #[derive(Clone, Debug)]
    struct AppState for AppAction {
        todos: Vec<Todo> = todos,
        goals: Vec<Goal> = goals,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Todos and Goals Example ===\n");

    let store = Store::builder()
        .name("app")
        .reducer(AppState::reducer())
        .prime_with(AppAction::Init)
        .log_capacity(8)
        .build()
        .unwrap();

    println!("Primed state: {:?}\n", store.get_state());

    let observed = store.downgrade();
    store.subscribe(move || {
        if let Some(state) = observed.upgrade().and_then(|store| store.get_state()) {
            println!(
                "todos: {:?}",
                state.todos.iter().map(|t| (&t.name, t.complete)).collect::<Vec<_>>()
            );
            println!(
                "goals: {:?}\n",
                state.goals.iter().map(|g| (g.id, &g.name)).collect::<Vec<_>>()
            );
        }
    });

    store
        .dispatch(add_todo(Todo {
            id: 0,
            name: "Walk the dog".to_string(),
            complete: false,
        }))
        .unwrap();
    store
        .dispatch(add_todo(Todo {
            id: 1,
            name: "Read a book".to_string(),
            complete: true,
        }))
        .unwrap();
    store
        .dispatch(add_goal(Goal {
            id: 0,
            name: "Learn reducers".to_string(),
        }))
        .unwrap();
    store.dispatch(AppAction::RemoveTodo(0)).unwrap();
    store.dispatch(AppAction::RemoveGoal(42)).unwrap();

    println!("Dispatch log:");
    for record in store.dispatch_log() {
        println!("  #{} {} at {}", record.sequence, record.action, record.timestamp);
    }

    println!("\n=== Example Complete ===");
}
