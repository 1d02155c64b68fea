//documentation
#![doc = include_str!("../README.md")]

//module tree
mod client_config;
mod client_setup;
mod defaults;
mod request_utils;

//API exports
pub use crate::client_config::*;
pub use crate::client_setup::*;
pub use crate::defaults::*;
pub use crate::request_utils::*;
