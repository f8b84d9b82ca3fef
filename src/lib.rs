#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs, missing_debug_implementations)]
extern crate alloc;
mod config;
mod despawner;
mod error;
mod factory;
mod handle;
mod object_pool;
mod scene_sink;

pub use config::*;
pub use despawner::*;
pub use error::*;
pub use factory::*;
pub use handle::PoolHandle;
pub use object_pool::*;
pub use scene_sink::*;
