//! IOKit binding to the AppleSMC user client.
//!
//! The SMC is reachable only through `IOConnectCallStructMethod` on a
//! connection opened against the single registered `AppleSMC` service.

use std::ffi::{CStr, c_char, c_void};
use std::mem;

use tracing::{debug, info};
use zerocopy::FromZeros;

use crate::error::SmcError;
use crate::key::SensorKey;
use crate::transport::{Controller, Transport};
use crate::wire::{KERNEL_INDEX_SMC, KeyData};

const SMC_SERVICE_NAME: &CStr = c"AppleSMC";

#[link(name = "IOKit", kind = "framework")]
unsafe extern "C" {
    fn mach_task_self() -> u32;
    fn IOServiceMatching(name: *const c_char) -> *mut c_void;
    fn IOServiceGetMatchingService(master_port: u32, matching: *mut c_void) -> u32;
    fn IOServiceOpen(device: u32, owning_task: u32, conn_type: u32, conn: *mut u32) -> i32;
    fn IOServiceClose(conn: u32) -> i32;
    fn IOObjectRelease(object: u32) -> i32;
    fn IOConnectCallStructMethod(
        conn: u32,
        selector: u32,
        input: *const c_void,
        input_size: usize,
        output: *mut c_void,
        output_size: *mut usize,
    ) -> i32;
}

/// Locates the AppleSMC service and opens sessions against it.
#[derive(Debug, Default)]
pub struct IoKitController;

impl IoKitController {
    pub fn new() -> Self {
        Self
    }
}

impl Controller for IoKitController {
    type Session = IoKitSession;

    fn connect(&self) -> Result<IoKitSession, SmcError> {
        unsafe {
            let matching = IOServiceMatching(SMC_SERVICE_NAME.as_ptr());
            if matching.is_null() {
                return Err(SmcError::ServiceNotFound);
            }

            // The matching dictionary is consumed by the lookup.
            let device = IOServiceGetMatchingService(0, matching);
            if device == 0 {
                return Err(SmcError::ServiceNotFound);
            }

            let mut conn: u32 = 0;
            let result = IOServiceOpen(device, mach_task_self(), 0, &mut conn);
            IOObjectRelease(device);
            if result != 0 {
                return Err(SmcError::ServiceOpenFailed(result));
            }

            info!(conn, "SMC connection established");
            Ok(IoKitSession { conn })
        }
    }
}

/// One open connection handle; closed exactly once when dropped.
pub struct IoKitSession {
    conn: u32,
}

impl Transport for IoKitSession {
    fn call(&self, input: &KeyData) -> Result<KeyData, SmcError> {
        let mut output = KeyData::new_zeroed();
        let mut output_size = mem::size_of::<KeyData>();

        let result = unsafe {
            IOConnectCallStructMethod(
                self.conn,
                KERNEL_INDEX_SMC,
                input as *const KeyData as *const c_void,
                mem::size_of::<KeyData>(),
                &mut output as *mut KeyData as *mut c_void,
                &mut output_size,
            )
        };
        if result != 0 {
            return Err(SmcError::Transport {
                key: SensorKey::from_code(input.key),
                code: result,
            });
        }
        Ok(output)
    }
}

impl Drop for IoKitSession {
    fn drop(&mut self) {
        let result = unsafe { IOServiceClose(self.conn) };
        debug!(conn = self.conn, result, "SMC connection closed");
    }
}
