#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod model;
pub mod normalize;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod search;
pub mod utils;
