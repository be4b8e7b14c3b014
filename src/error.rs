use thiserror::Error;

use crate::key::SensorKey;

/// Everything that can go wrong between a key string and a decoded reading.
///
/// Transport-level failures carry the raw `kern_return_t` style status code
/// reported by the service; nothing in this crate retries on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmcError {
    #[error("key must be exactly 4 ASCII characters, got {0:?}")]
    InvalidKeyFormat(String),

    #[error("no SMC service is registered with the kernel")]
    ServiceNotFound,

    #[error("SMC service rejected the open handshake (status {0:#010x})")]
    ServiceOpenFailed(i32),

    #[error("SMC call for {key} failed (status {code:#010x})")]
    Transport { key: SensorKey, code: i32 },

    #[error("write to {key} carries {given} bytes but the key reports {reported}")]
    SizeMismatch {
        key: SensorKey,
        given: u32,
        reported: u32,
    },

    #[error("{0} is reported by the SMC with no data")]
    KeyUnavailable(SensorKey),
}
