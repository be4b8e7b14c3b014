use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::error::SmcError;
use crate::key::{self, SensorKey};
use crate::transport::Transport;
use crate::wire::{KeyData, KeyInfoData, Opcode};

/// Metadata describing how one key's raw bytes must be interpreted.
///
/// Fetched fresh for every read; firmware variants may change a key's size
/// or type between sessions, so nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    pub data_size: u32,
    pub data_type: u32,
    pub attributes: u8,
}

impl KeyInfo {
    pub(crate) fn from_wire(raw: &KeyInfoData) -> Self {
        Self {
            data_size: raw.data_size,
            data_type: raw.data_type,
            attributes: raw.data_attributes,
        }
    }

    /// The data type rendered as its 4-character tag, e.g. `sp78`.
    pub fn type_tag(&self) -> String {
        key::type_tag(self.data_type)
    }
}

/// Issues `ReadKeyInfo` calls under a lock.
///
/// Metadata resolution is the one sub-operation invoked from more than one
/// logical caller, and the channel underneath is a single shared resource.
/// The lock covers exactly the metadata call; it is released before the
/// value bytes are read or written.
#[derive(Debug, Default)]
pub struct KeyInfoResolver {
    lock: Mutex<()>,
}

impl KeyInfoResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve<T: Transport>(
        &self,
        session: &T,
        key: SensorKey,
    ) -> Result<KeyInfo, SmcError> {
        let _held = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let input = KeyData::request(key.code(), Opcode::ReadKeyInfo);
        let output = session.call(&input)?;
        let info = KeyInfo::from_wire(&output.key_info);
        debug!(%key, size = info.data_size, tag = %info.type_tag(), "resolved key info");
        Ok(info)
    }
}
