//! Macro for statically typed reducer composition.

/// Declare a composite state struct whose fields are reduced independently.
///
/// Each field names its slice type and the reducer responsible for it. The
/// macro generates the struct plus two associated functions:
///
/// - `reduce(state: Option<&Self>, action: &A) -> Result<Self, ReducerError>`
///   runs every slice reducer (in declaration order) on its own field and
///   assembles a fresh struct. Slice failures come back wrapped in
///   `ReducerError::Slice` with the field name as key.
/// - `reducer()` returns `reduce` as a value that can be handed to a store.
///
/// # Example
///
/// ```
/// use reducto::{combine_reducers, Action, Store};
///
/// #[derive(Debug)]
/// enum AppAction {
///     AddTodo(String),
///     AddGoal(String),
/// }
///
/// impl Action for AppAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::AddTodo(_) => "ADD_TODO",
///             Self::AddGoal(_) => "ADD_GOAL",
///         }
///     }
/// }
///
/// fn todos(state: Option<&Vec<String>>, action: &AppAction) -> Vec<String> {
///     let mut next = state.cloned().unwrap_or_default();
///     if let AppAction::AddTodo(todo) = action {
///         next.push(todo.clone());
///     }
///     next
/// }
///
/// fn goals(state: Option<&Vec<String>>, action: &AppAction) -> Vec<String> {
///     let mut next = state.cloned().unwrap_or_default();
///     if let AppAction::AddGoal(goal) = action {
///         next.push(goal.clone());
///     }
///     next
/// }
///
/// combine_reducers! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub struct AppState for AppAction {
///         pub todos: Vec<String> = todos,
///         pub goals: Vec<String> = goals,
///     }
/// }
///
/// let store = Store::new(AppState::reducer());
/// store.dispatch(AppAction::AddGoal("ship it".into())).unwrap();
///
/// let state = store.get_state().unwrap();
/// assert!(state.todos.is_empty());
/// assert_eq!(state.goals, vec!["ship it".to_string()]);
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $action:ty {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $slice:ty = $reducer:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $slice,
            )*
        }

        impl $name {
            /// Reduce every slice into a freshly built composite.
            #[allow(unused_variables)]
            $vis fn reduce(
                state: ::core::option::Option<&Self>,
                action: &$action,
            ) -> ::core::result::Result<Self, $crate::core::ReducerError> {
                ::core::result::Result::Ok(Self {
                    $(
                        $field: $crate::core::Reducer::<$slice, $action>::reduce(
                            &$reducer,
                            state.map(|composite| &composite.$field),
                            action,
                        )
                        .map_err(|err| err.in_slice(::core::stringify!($field)))?,
                    )*
                })
            }

            /// `reduce` packaged as a reducer value.
            $vis fn reducer() -> $crate::core::Fallible<$crate::core::ReduceFn<Self, $action>> {
                $crate::core::fallible(Self::reduce as $crate::core::ReduceFn<Self, $action>)
            }
        }
    };
}
