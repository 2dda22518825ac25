//! The capability the router depends on, realized as a trait object.
//!
//! One trait covers both send and receive modules: the router invokes it
//! polymorphically over two collections of the same shape, through a
//! shared reference with no lifetime tying it to a single call.
use crate::types::{PacedPacketInfo, RtxSendStatus, Ssrc, TransportFeedback};

/// An RTP/RTCP send or receive module the router can dispatch to.
///
/// The router owns no `RtpModule`, callers retain ownership and register
/// a shared handle (`Arc<dyn RtpModule>`) that is borrowed until a matching
/// removal call. Implementations must be safe to call while the router's
/// internal lock is held: every method here is required to be
/// non-blocking and non-reentrant with respect to the router.
pub trait RtpModule: Send + Sync {
    /// Synchronization source of the stream this module currently sends
    /// or receives. May change over the module's lifetime.
    fn ssrc(&self) -> Ssrc;

    /// Whether the module is currently sending media. May change over
    /// time independent of registration state.
    fn sending_media(&self) -> bool;

    /// Dispatch a pacer-driven send decision for `ssrc`. Returns whether
    /// the module handled it.
    fn time_to_send_packet(
        &self,
        ssrc: Ssrc,
        sequence_number: u16,
        capture_time_ms: i64,
        is_retransmit: bool,
        paced_info: PacedPacketInfo,
    ) -> bool;

    /// Ask the module to emit up to `bytes` of padding. Returns the number
    /// of bytes actually sent, which may be less than requested, zero, or
    /// (for some padding schemes) more.
    fn time_to_send_padding(&self, bytes: usize, paced_info: PacedPacketInfo) -> usize;

    /// Whether this module's padding carries the header extensions needed
    /// to contribute to transport-wide bandwidth estimation. A module that
    /// returns `false` here is never offered padding by the router.
    fn has_bwe_extensions(&self) -> bool;

    /// Current retransmission mode, sampled once at registration and used
    /// to order padding candidates.
    fn rtx_send_status(&self) -> RtxSendStatus;

    /// Whether the module currently advertises REMB as active.
    fn remb(&self) -> bool;

    /// Enable or disable REMB advertisement on the module. Called by the
    /// elector whenever the Active REMB Module changes.
    fn set_remb_status(&self, active: bool);

    /// Emit a REMB RTCP packet for the given estimate and contributing
    /// SSRCs. Only ever called on the single Active REMB Module.
    fn set_remb_data(&self, bitrate_bps: u64, ssrcs: &[Ssrc]);

    /// Attempt to send a transport-wide feedback packet. Returns whether
    /// the module sent it.
    fn send_feedback_packet(&self, feedback: &TransportFeedback) -> bool;
}
