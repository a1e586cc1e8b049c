pub use database::Database;
pub use error::RecordsError;
pub use structs::person::{Gender, Person};
pub use structs::record::PersonRow;

mod structs;
pub mod configuration;
pub mod database;
pub mod error;
pub mod menu;
pub mod telemetry;
