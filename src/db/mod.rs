pub mod connection;
pub mod queries;
pub mod schema;
pub mod state;

pub use connection::Database;
pub use state::{COMPANIES_KEY, STATUSES_KEY};
