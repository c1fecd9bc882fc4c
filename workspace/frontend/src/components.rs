pub mod layout;
pub mod weather;
