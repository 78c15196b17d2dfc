//! Action trait for typed view messages

use std::fmt::Debug;

/// Marker trait for actions that can be submitted to a dispatcher
///
/// Actions describe an intent raised by a view. They should be:
/// - Clone: Actions may be logged, recorded, or handed to several listeners
/// - Debug: For debugging and logging
/// - Send + 'static: For delivery through an async mailbox
///
/// Use `#[derive(Action)]` from `view-dispatch-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name used on the wire and for log filtering
    fn name(&self) -> &'static str;

    /// One-line representation for logs
    ///
    /// Defaults to the `Debug` output.
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}

/// Actions grouped under a category (e.g. the store family they address)
///
/// Generated by `#[derive(Action)]` when a container or variant carries
/// `#[action(category = "...")]`.
pub trait ActionCategory: Action {
    /// Get the action's category, if it has one
    fn category(&self) -> Option<&'static str>;
}
