pub mod initdb;
pub mod seed;
pub mod serve;

pub use initdb::{init_database, run_migrations};
pub use seed::seed;
pub use serve::serve;
