pub mod detector;
pub mod query_engine;
pub mod swatch_cache;

pub use detector::{detect, parse_color, ParsedToken};
pub use query_engine::{run_query, InfoRecords, QueryEngine, QueryMode};
pub use swatch_cache::CacheStore;
