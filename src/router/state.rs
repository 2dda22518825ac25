//! The mutable state protected by `PacketRouter`'s single mutex.
//!
//! One non-recursive mutex serializes *all* mutable state here: both
//! registries, the sequence counter, the active REMB module pointer, and
//! the throttling state, plus the callbacks into `RtpModule`s that run
//! while that lock is held. Bundling everything into one struct behind one `Mutex`
//! (rather than, say, a `Mutex` per registry) is what makes that guarantee
//! a type-level fact instead of a convention to remember.
use std::sync::Arc;
use std::time::Instant;

use crate::rtp_module::RtpModule;
use crate::types::RtxSendStatus;

/// A registered send module.
pub(crate) struct SendEntry {
    pub(crate) handle: Arc<dyn RtpModule>,
    pub(crate) remb_candidate: bool,
    /// Sampled once at registration time.
    pub(crate) rtx_status: RtxSendStatus,
}

/// A registered receive module.
pub(crate) struct ReceiveEntry {
    pub(crate) handle: Arc<dyn RtpModule>,
    pub(crate) remb_candidate: bool,
}

/// The currently active REMB emitter, tracked as a weak-in-spirit
/// reference into one of the two registries: always cleared before any
/// removal can invalidate it. We hold a strong `Arc` clone rather than a
/// true `Weak` because the router never outlives its own registry entries:
/// the clone is dropped the instant the module is removed or superseded.
pub(crate) struct ActiveRemb {
    pub(crate) handle: Arc<dyn RtpModule>,
}

/// Throttling state for REMB emission.
#[derive(Default)]
pub(crate) struct RembThrottle {
    pub(crate) last_send_time: Option<Instant>,
    pub(crate) last_bitrate_bps: Option<u64>,
}

pub(crate) struct RouterState {
    pub(crate) send_modules: Vec<SendEntry>,
    pub(crate) receive_modules: Vec<ReceiveEntry>,
    /// Indices into `send_modules`, kept sorted by padding priority.
    /// Recomputed on every registry mutation so the hot send path performs
    /// no allocation or sorting.
    pub(crate) padding_order: Vec<usize>,
    pub(crate) active_remb: Option<ActiveRemb>,
    pub(crate) sequence_number: u16,
    pub(crate) remb_throttle: RembThrottle,
}

impl RouterState {
    pub(crate) fn new() -> Self {
        Self {
            send_modules: Vec::new(),
            receive_modules: Vec::new(),
            padding_order: Vec::new(),
            active_remb: None,
            sequence_number: 0,
            remb_throttle: RembThrottle::default(),
        }
    }
}
