pub mod config;
pub mod record;

pub use config::{AppConfig, Messages};
pub use record::{RecordAction, ResultRecord, HINT_EXAMPLE};
