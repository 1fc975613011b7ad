#![doc = include_str!("../README.md")]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Error, Result};

mod sample;
pub use sample::{Integer, Sample};

mod statistics;

mod summary;
pub use summary::Summary;

mod app;
pub use app::{INVALID_INPUT, PROMPT, read_sample, run};
