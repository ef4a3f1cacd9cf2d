//! Declarative macros for ergonomic effect construction
//!
//! These macros reduce boilerplate when creating `Effect` variants, particularly
//! for storage operations.

/// Create an `Effect::Storage` with a `SetItem` operation
///
/// # Example
///
/// ```rust,ignore
/// use todomvc_core::set_item;
///
/// set_item! {
///     storage: env.storage,
///     key: "todos",
///     value: serialized,
///     on_error: |error| Some(TodoAction::PersistFailed { error: error.to_string() })
/// }
/// ```
#[macro_export]
macro_rules! set_item {
    (
        storage: $storage:expr,
        key: $key:expr,
        value: $value:expr,
        on_error: |$error_param:ident| $error_body:expr
    ) => {
        $crate::effect::Effect::Storage(
            $crate::effect::StorageOperation::SetItem {
                storage: ::std::sync::Arc::clone(&$storage),
                key: ::std::string::ToString::to_string(&$key),
                value: $value,
                on_error: ::std::boxed::Box::new(move |$error_param| $error_body),
            }
        )
    };
}

/// Create an `Effect::Storage` with a `GetItem` operation
///
/// # Example
///
/// ```rust,ignore
/// use todomvc_core::get_item;
///
/// get_item! {
///     storage: env.storage,
///     key: "todos",
///     on_complete: |result| Some(TodoAction::ItemsLoaded { items: decode(result) })
/// }
/// ```
#[macro_export]
macro_rules! get_item {
    (
        storage: $storage:expr,
        key: $key:expr,
        on_complete: |$result_param:ident| $complete_body:expr
    ) => {
        $crate::effect::Effect::Storage(
            $crate::effect::StorageOperation::GetItem {
                storage: ::std::sync::Arc::clone(&$storage),
                key: ::std::string::ToString::to_string(&$key),
                on_complete: ::std::boxed::Box::new(move |$result_param| $complete_body),
            }
        )
    };
}
