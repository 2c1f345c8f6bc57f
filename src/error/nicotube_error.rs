use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! config_err {
    ($($arg:tt)*) => {
        $crate::error::NicotubeError::new($crate::error::NicotubeErrorKind::Config, format!($($arg)*))
    };
}

pub use config_err;

#[macro_export]
macro_rules! config_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::NicotubeError::new($crate::error::NicotubeErrorKind::Config, format!($($arg)*)))
    };
}

pub use config_err_res;

#[macro_export]
macro_rules! transport_err {
    ($($arg:tt)*) => {
        $crate::error::NicotubeError::new($crate::error::NicotubeErrorKind::Transport, format!($($arg)*))
    };
}

pub use transport_err;

#[macro_export]
macro_rules! status_err {
    ($($arg:tt)*) => {
        $crate::error::NicotubeError::new($crate::error::NicotubeErrorKind::Status, format!($($arg)*))
    };
}

pub use status_err;

#[macro_export]
macro_rules! status_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::NicotubeError::new($crate::error::NicotubeErrorKind::Status, format!($($arg)*)))
    };
}

pub use status_err_res;

#[macro_export]
macro_rules! decode_err {
    ($($arg:tt)*) => {
        $crate::error::NicotubeError::new($crate::error::NicotubeErrorKind::Decode, format!($($arg)*))
    };
}

pub use decode_err;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NicotubeErrorKind {
    // config file or cli arguments unusable
    Config,
    // request could not be sent or the body not read
    Transport,
    // non 2xx answer from the remote side
    Status,
    // body is not the expected json
    Decode,
}

#[derive(Debug)]
pub struct NicotubeError {
    pub kind: NicotubeErrorKind,
    pub message: String,
}

impl NicotubeError {
    pub const fn new(kind: NicotubeErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for NicotubeError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Nicotube error: {}", self.message)
    }
}

impl Error for NicotubeError {}
