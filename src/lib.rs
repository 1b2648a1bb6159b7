#![warn(rust_2018_idioms)]
#[allow(unused_imports)]
#[cfg(feature = "log")]
#[macro_use]
extern crate log;

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod collection;
pub mod options;
pub mod report;
pub mod units;

pub use collection::{memory, MemorySnapshot};
pub use units::Unit;
pub use utils::error::{KernelRequest, MemsnapError, Result};
