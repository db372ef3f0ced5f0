pub mod quote;

pub use quote::{Quote, DEFAULT_AUTHOR};
