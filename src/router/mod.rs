//! `PacketRouter`: the public facade over the registries, dispatcher,
//! sequence allocator, REMB elector, and feedback router, all behind a
//! single mutex.
mod dispatch;
mod feedback;
mod registry;
mod remb;
mod sequence;
mod state;
#[cfg(test)]
mod test_support;

use std::sync::{Arc, Mutex};

use crate::clock::{Clock, SystemClock};
use crate::config::RouterConfig;
use crate::error::{LockResultExt, Result};
use crate::rtp_module::RtpModule;
use crate::types::{PacedPacketInfo, Ssrc, TransportFeedback};

use state::RouterState;

/// The Packet Router: dispatch and feedback hub between a pacer/estimator
/// and the per-stream RTP/RTCP modules it fans out to.
///
/// `PacketRouter` is the one externally visible object this crate exposes:
/// there is no wire protocol, CLI, or persisted state beyond what it
/// routes. All public methods acquire the internal mutex for their full
/// body, including calls back into registered [`RtpModule`]s, which is
/// sound because those callbacks are documented non-blocking and
/// non-reentrant.
pub struct PacketRouter {
    state: Mutex<RouterState>,
    config: RouterConfig,
    clock: Box<dyn Clock>,
}

impl PacketRouter {
    /// Creates a router with the default configuration and the system
    /// wall clock.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Creates a router with an explicit configuration.
    pub fn with_config(config: RouterConfig) -> Self {
        Self::with_config_and_clock(config, Box::new(SystemClock))
    }

    /// Creates a router with an explicit configuration and clock source.
    /// Tests use this to inject a [`crate::clock::FakeClock`] so REMB
    /// throttling scenarios can advance time deterministically instead of
    /// sleeping.
    pub fn with_config_and_clock(config: RouterConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(RouterState::new()),
            config,
            clock,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, RouterState>> {
        self.state.lock().map_lock_err("PacketRouter state")
    }

    /// Registers a send module. Double registration is a programmer
    /// error: a debug build asserts against it immediately via
    /// `debug_assert!`, so the `Err` path below is only ever reachable in
    /// a release build, where it degrades to a no-op that leaves the
    /// registry untouched instead of silently corrupting it.
    pub fn add_send_rtp_module(&self, handle: Arc<dyn RtpModule>, remb_candidate: bool) -> Result<()> {
        self.lock()?.add_send_module(handle, remb_candidate)
    }

    /// Registers a receive module. Same double-registration handling as
    /// [`PacketRouter::add_send_rtp_module`].
    pub fn add_receive_rtp_module(&self, handle: Arc<dyn RtpModule>, remb_candidate: bool) -> Result<()> {
        self.lock()?.add_receive_module(handle, remb_candidate)
    }

    /// Unregisters a send module.
    pub fn remove_send_rtp_module(&self, handle: &Arc<dyn RtpModule>) -> Result<()> {
        self.lock()?.remove_send_module(handle)
    }

    /// Unregisters a receive module.
    pub fn remove_receive_rtp_module(&self, handle: &Arc<dyn RtpModule>) -> Result<()> {
        self.lock()?.remove_receive_module(handle)
    }

    /// Resets the transport-wide sequence number, typically at the start
    /// of a call.
    pub fn set_transport_wide_sequence_number(&self, n: u16) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.set_transport_wide_sequence_number(n);
    }

    /// Allocates the next transport-wide sequence number.
    pub fn allocate_sequence_number(&self) -> u16 {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.allocate_sequence_number()
    }

    /// Asks the router whether and to whom a pacer-driven send decision
    /// for `ssrc` should dispatch.
    pub fn time_to_send_packet(
        &self,
        ssrc: Ssrc,
        sequence_number: u16,
        capture_time_ms: i64,
        is_retransmit: bool,
        paced_info: PacedPacketInfo,
    ) -> bool {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.time_to_send_packet(ssrc, sequence_number, capture_time_ms, is_retransmit, paced_info)
    }

    /// Requests up to `requested_bytes` of padding across eligible send
    /// modules, in cached priority order. Returns the total bytes sent.
    pub fn time_to_send_padding(&self, requested_bytes: usize, paced_info: PacedPacketInfo) -> usize {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.time_to_send_padding(requested_bytes, paced_info)
    }

    /// Reports a new receive-side bandwidth estimate, forwarding it to the
    /// active REMB module subject to throttling.
    pub fn on_receive_bitrate_changed(&self, ssrcs: &[Ssrc], bitrate_bps: u64) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let interval = self.config.remb_interval();
        state.on_receive_bitrate_changed(ssrcs, bitrate_bps, self.clock.as_ref(), interval);
    }

    /// Offers `feedback` to registered modules, send side first, until one
    /// accepts it.
    pub fn send_transport_feedback(&self, feedback: &TransportFeedback) -> bool {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.send_transport_feedback(feedback)
    }
}

impl Default for PacketRouter {
    fn default() -> Self {
        Self::new()
    }
}
