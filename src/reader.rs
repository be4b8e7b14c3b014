use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::sleep;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::SmcError;
use crate::key::{SensorKey, TEMP_FRACTIONAL_BITS, decode_fixed_point};
use crate::resolver::{KeyInfo, KeyInfoResolver};
use crate::transport::{Controller, Transport};
use crate::wire::{KeyData, Opcode, PAYLOAD_LEN};

/// Case indicator key toggled by the blink utility.
pub const INDICATOR_KEY: SensorKey = SensorKey::from_bytes(*b"LSOO");

/// One decoded reading, or the failure that took its place.
pub type Reading = Result<f64, SmcError>;

/// A key's current value bytes paired with the metadata that sized them.
#[derive(Debug, Clone, Copy)]
pub struct RawValue {
    pub info: KeyInfo,
    pub bytes: [u8; PAYLOAD_LEN],
}

impl RawValue {
    /// The `data_size`-long prefix actually holding the value.
    pub fn payload(&self) -> &[u8] {
        let len = (self.info.data_size as usize).min(PAYLOAD_LEN);
        &self.bytes[..len]
    }
}

/// Reads ordered batches of sensor keys, one session per batch.
///
/// Opening the privileged channel is comparatively expensive and the handle
/// is not safely reusable across unrelated concurrent batches, so all reads
/// of one invocation share a single session. Each key is resolved, read and
/// decoded in input order; one key's failure never aborts its siblings, but
/// a failure to open the session is fatal to the whole batch.
pub struct BatchValueReader<C: Controller> {
    controller: C,
    resolver: KeyInfoResolver,
}

impl<C: Controller> BatchValueReader<C> {
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            resolver: KeyInfoResolver::new(),
        }
    }

    /// Decodes every key in order, one result per input position.
    pub fn read_all(&self, keys: &[SensorKey]) -> Result<Vec<Reading>, SmcError> {
        let session = self.controller.connect()?;
        let mut readings = Vec::with_capacity(keys.len());
        for &key in keys {
            let reading = self.read_in_session(&session, key);
            if let Err(err) = &reading {
                warn!(%key, %err, "sensor read failed");
            }
            readings.push(reading);
        }
        Ok(readings)
    }

    /// Reads a single key in a session of its own.
    pub fn read_key(&self, key: SensorKey) -> Result<f64, SmcError> {
        let session = self.controller.connect()?;
        self.read_in_session(&session, key)
    }

    /// Writes a value to a non-sensor control key in a session of its own.
    pub fn write_key(&self, key: SensorKey, bytes: &[u8]) -> Result<(), SmcError> {
        let session = self.controller.connect()?;
        self.write_in_session(&session, key, bytes)
    }

    /// Toggles the case indicator until `stop` is raised, leaving it off.
    ///
    /// The flag is checked only between writes; a call in flight is never
    /// interrupted.
    pub fn blink_indicator(&self, stop: &AtomicBool, period: Duration) -> Result<(), SmcError> {
        let session = self.controller.connect()?;
        let mut lit = false;
        while !stop.load(Ordering::Relaxed) {
            lit = !lit;
            self.write_in_session(&session, INDICATOR_KEY, &[lit as u8])?;
            sleep(period);
        }
        if lit {
            self.write_in_session(&session, INDICATOR_KEY, &[0])?;
        }
        Ok(())
    }

    fn read_in_session(&self, session: &C::Session, key: SensorKey) -> Result<f64, SmcError> {
        let raw = self.read_raw(session, key)?;
        let value = decode_fixed_point(raw.payload(), TEMP_FRACTIONAL_BITS);
        debug!(%key, value, "decoded reading");
        Ok(value)
    }

    fn read_raw(&self, session: &C::Session, key: SensorKey) -> Result<RawValue, SmcError> {
        let info = self.resolver.resolve(session, key)?;
        if info.data_size == 0 {
            return Err(SmcError::KeyUnavailable(key));
        }
        let mut input = KeyData::request(key.code(), Opcode::ReadBytes);
        input.key_info.data_size = info.data_size;
        let output = session.call(&input)?;
        Ok(RawValue {
            info,
            bytes: output.bytes,
        })
    }

    fn write_in_session(
        &self,
        session: &C::Session,
        key: SensorKey,
        bytes: &[u8],
    ) -> Result<(), SmcError> {
        let info = self.resolver.resolve(session, key)?;
        if info.data_size as usize != bytes.len() || bytes.len() > PAYLOAD_LEN {
            return Err(SmcError::SizeMismatch {
                key,
                given: bytes.len() as u32,
                reported: info.data_size,
            });
        }
        let mut input = KeyData::request(key.code(), Opcode::WriteBytes);
        input.key_info.data_size = info.data_size;
        input.bytes[..bytes.len()].copy_from_slice(bytes);
        session.call(&input)?;
        debug!(%key, len = bytes.len(), "wrote key");
        Ok(())
    }
}
