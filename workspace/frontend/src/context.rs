//! Providers wrapped around the route tree.

pub mod nic;
pub mod sidebar;
pub mod theme;

pub use nic::{NicContext, NicProvider};
pub use sidebar::{SidebarContext, SidebarProvider};
pub use theme::{ThemeContext, ThemeProvider};
