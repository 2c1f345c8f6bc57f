mod nicotube_error;

pub use self::nicotube_error::*;
