//! Fixed-layout structures exchanged verbatim with the SMC user client.
//!
//! Field order and total size are dictated by the kernel service and must
//! not change. Reserved sub-structures travel zeroed on every call; the
//! controller inspects them even when they are irrelevant to the opcode.

use zerocopy::{FromZeros, Immutable, KnownLayout};

/// Function index selecting the SMC handler inside the user client.
pub const KERNEL_INDEX_SMC: u32 = 2;

/// Byte length of the value payload buffer.
pub const PAYLOAD_LEN: usize = 32;

const KEY_DATA_SIZE: usize = 80;

/// Command written into the `data8` slot of [`KeyData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    ReadBytes = 5,
    WriteBytes = 6,
    ReadKeyInfo = 9,
}

#[derive(Debug, Clone, Copy, FromZeros, Immutable, KnownLayout)]
#[repr(C)]
pub struct KeyDataVers {
    pub major: u8,
    pub minor: u8,
    pub build: u8,
    pub reserved: u8,
    pub release: u16,
}

#[derive(Debug, Clone, Copy, FromZeros, Immutable, KnownLayout)]
#[repr(C)]
pub struct PLimitData {
    pub version: u16,
    pub length: u16,
    pub cpu_p_limit: u32,
    pub gpu_p_limit: u32,
    pub mem_p_limit: u32,
}

#[derive(Debug, Clone, Copy, FromZeros, Immutable, KnownLayout)]
#[repr(C)]
pub struct KeyInfoData {
    pub data_size: u32,
    pub data_type: u32,
    pub data_attributes: u8,
}

/// The structure submitted to and received from every SMC call.
#[derive(Debug, Clone, Copy, FromZeros, Immutable, KnownLayout)]
#[repr(C)]
pub struct KeyData {
    pub key: u32,
    pub vers: KeyDataVers,
    pub p_limit_data: PLimitData,
    pub key_info: KeyInfoData,
    pub result: u8,
    pub status: u8,
    pub data8: u8,
    pub data32: u32,
    pub bytes: [u8; PAYLOAD_LEN],
}

impl KeyData {
    /// Zero-initialized request targeting `key` with the given opcode.
    pub fn request(key: u32, opcode: Opcode) -> Self {
        let mut data = Self::new_zeroed();
        data.key = key;
        data.data8 = opcode as u8;
        data
    }
}

// Compile-time layout verification
const _: () = {
    assert!(
        std::mem::size_of::<KeyData>() == KEY_DATA_SIZE,
        "KeyData must match the SMC call layout exactly"
    );
};
