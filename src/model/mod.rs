mod config;
mod query;
mod search_result;

pub use self::config::*;
pub use self::query::*;
pub use self::search_result::*;
