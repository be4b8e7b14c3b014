//! Client for the Apple System Management Controller (SMC).
//!
//! Temperature-class sensors live behind a privileged IOKit channel that
//! speaks a fixed-layout call structure. This crate packs FourCC keys,
//! drives the two-phase key-info/read-bytes protocol and decodes the
//! controller's signed fixed-point value encoding into degrees.
//!
//! [`reader::BatchValueReader`] is the entry point: given an ordered set of
//! keys it returns the ordered set of decoded readings, one session per
//! batch, with per-key failures isolated to their position.

pub mod error;
pub mod key;
pub mod reader;
pub mod resolver;
pub mod sensors;
pub mod transport;
pub mod wire;

#[cfg(target_os = "macos")]
pub mod iokit;

pub use error::SmcError;
pub use key::SensorKey;
pub use reader::{BatchValueReader, Reading};
