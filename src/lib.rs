#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod game;
mod hunt;
mod setup;
mod ship;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
pub mod http;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use hunt::*;
pub use setup::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LogSink};
