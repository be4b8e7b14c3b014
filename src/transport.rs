use crate::error::SmcError;
use crate::wire::KeyData;

/// The single privileged primitive: one fixed-layout structure in, one out.
///
/// Calls block on the kernel-mediated transfer and carry no timeout; a
/// caller needing bounded latency must wrap the call externally. Failures
/// surface as [`SmcError::Transport`] with the service status code and are
/// never retried here.
pub trait Transport {
    fn call(&self, input: &KeyData) -> Result<KeyData, SmcError>;
}

/// Opens sessions against one controller service.
///
/// A session is the bounded lifetime of one connection handle: every call
/// made through it happens between a successful `connect` and the drop of
/// the returned session, which releases the handle exactly once on every
/// exit path. The handle is a single shared privileged resource, so only
/// one session should be open at a time process-wide.
pub trait Controller {
    type Session: Transport;

    fn connect(&self) -> Result<Self::Session, SmcError>;
}
