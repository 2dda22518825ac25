//! # packet-router
//!
//! The Packet Router: the dispatch and feedback hub that sits between a
//! real-time media system's pacer/estimator and the per-stream RTP/RTCP
//! senders and receivers.
//!
//! It multiplexes pacer-driven send decisions (media packets, padding) to
//! the correct outbound RTP module by synchronization source (SSRC),
//! allocates monotonically advancing transport-wide sequence numbers
//! shared across all outbound modules, and routes receiver-side bandwidth
//! feedback (REMB) and transport-wide feedback (RTCP) through a single
//! designated module selected by a deterministic priority policy.
//!
//! The router does not buffer packets, does not schedule time, does not
//! compute bitrate estimates, and does not parse or construct RTP
//! payloads - it only routes decisions made elsewhere.
//!
//! ## Concurrency
//!
//! [`PacketRouter`] is called from several threads in a typical
//! deployment: a pacer thread drives send dispatch, padding, and sequence
//! allocation; a receive thread reports bandwidth changes; an RTCP
//! scheduling thread requests feedback transmission; a stream lifecycle
//! thread registers and removes modules. A single internal mutex
//! serializes all of it, including the calls the router makes back into
//! registered [`RtpModule`]s, and those callbacks are required to be
//! non-blocking and non-reentrant with respect to the router.

pub mod clock;
pub mod config;
pub mod error;
mod router;
pub mod rtp_module;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use config::{RouterConfig, RouterConfigBuilder};
pub use error::{Result, RouterError};
pub use router::PacketRouter;
pub use rtp_module::RtpModule;
pub use types::{PacedPacketInfo, RtxSendStatus, Ssrc, TransportFeedback};
