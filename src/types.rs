//! Plain data types shared between the router and the `RtpModule`s it
//! dispatches to.
//!
//! None of these carry wire-format logic, parsing and constructing RTP or
//! RTCP payloads is out of scope here; the router only needs enough shape
//! to describe *which* packet a dispatch call concerns.

use std::time::Duration;

/// Synchronization source identifier, a 32-bit RTP stream id.
pub type Ssrc = u32;

/// Retransmission-stream mode of a send module, sampled once at
/// registration time and used to order padding candidates.
///
/// Ordered from most to least preferred for padding: `RedundantPayloads`
/// first, then `WithPayload`, then `Off` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtxSendStatus {
    /// The module does not retransmit lost packets.
    Off,
    /// The module retransmits lost packets by resending the original
    /// payload on the RTX stream.
    WithPayload,
    /// The module retransmits lost packets using redundant-payload RTX
    /// framing (multiple original payloads per retransmitted packet).
    RedundantPayloads,
}

impl RtxSendStatus {
    /// Padding priority rank: lower sorts earlier.
    pub(crate) fn padding_rank(self) -> u8 {
        match self {
            RtxSendStatus::RedundantPayloads => 0,
            RtxSendStatus::WithPayload => 1,
            RtxSendStatus::Off => 2,
        }
    }
}

/// Pacer-supplied context accompanying a send or padding decision.
///
/// The pacer computes this; the router only forwards it to the chosen
/// module unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PacedPacketInfo {
    /// Size of the probe cluster this packet/padding belongs to, if the
    /// pacer is running a bandwidth probe. `None` outside of a probe.
    pub probe_cluster_bytes: Option<usize>,
    /// Target send bitrate the pacer is probing at for this cluster.
    pub send_bitrate_bps: Option<u64>,
}

impl PacedPacketInfo {
    /// Context for a packet that is not part of any bandwidth probe.
    pub fn not_probing() -> Self {
        Self::default()
    }
}

/// Opaque transport-wide feedback payload routed, not interpreted, by the
/// feedback router. The router never retains or retries this value; the
/// caller owns it for the duration of the call.
#[derive(Debug, Clone)]
pub struct TransportFeedback {
    /// Base sequence number the feedback report covers.
    pub base_sequence_number: u16,
    /// Wall-clock span of packets covered by this report.
    pub report_span: Duration,
    /// Opaque, pre-serialized RTCP feedback payload bytes.
    pub payload: Vec<u8>,
}
