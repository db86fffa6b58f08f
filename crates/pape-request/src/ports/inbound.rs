//! Inbound Ports (Driving Ports)
//!
//! The host message framework drives the extension through these two hooks.
//! They are a symmetric transformation pair, not an event system.

use crate::domain::PolicyRequest;
use crate::error::PapeError;
use crate::ports::outbound::ExtensionBag;

/// Before-send / after-receive contract for the PAPE request (Driving Port)
pub trait PapeExtensionApi {
    /// Write `request` into `bag`.
    ///
    /// Runs after application code has finished setting fields. Re-running
    /// on the same bag replaces earlier output instead of accumulating it.
    /// On error the bag is left unchanged.
    fn before_send(&self, request: &PolicyRequest, bag: &mut dyn ExtensionBag)
        -> Result<(), PapeError>;

    /// Populate `request` from `bag`.
    ///
    /// `request` is reset first, so a reused entity carries nothing over
    /// from an earlier message.
    fn after_receive(
        &self,
        request: &mut PolicyRequest,
        bag: &dyn ExtensionBag,
    ) -> Result<(), PapeError>;
}
