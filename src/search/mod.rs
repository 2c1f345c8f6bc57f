mod backend;
mod client;
mod errors;
mod fallback;

pub use self::backend::SearchBackend;
pub use self::client::*;
pub use self::errors::*;
pub use self::fallback::*;
