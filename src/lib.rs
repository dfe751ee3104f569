#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod config;
pub mod error;
pub mod lanes;
pub mod mapping;
pub mod network;
pub mod schedule;
pub mod util;

#[doc(inline)]
pub use config::MappingConfig;
#[doc(inline)]
pub use error::MappingError;
#[doc(inline)]
pub use mapping::mapper::{MappingOutcome, TransitMapper};
#[doc(inline)]
pub use network::Network;

pub type Result<T> = std::result::Result<T, MappingError>;
