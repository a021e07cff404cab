use std::fmt::Debug;

pub mod env_args;

/// Log the error it is given, then return `value_to_return`.
/// Meant to be used with `map_err`.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Same as [log_error_and_return], with a message explaining what went wrong.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
