//! Small reusable pieces: status displays, toasts and the fetch hook.

pub mod error;
pub mod fetch_hook;
pub mod loading;
pub mod toast;
