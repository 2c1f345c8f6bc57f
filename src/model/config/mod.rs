mod app_config;
mod log;
mod normalizer;
mod page;
mod search;

pub use self::app_config::*;
pub use self::log::*;
pub use self::normalizer::*;
pub use self::page::*;
pub use self::search::*;
