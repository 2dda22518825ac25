//! Minimal fake [`RtpModule`] shared by this module's own unit tests.
//! Kept separate from the heavier `tests/support` fixture used by the
//! crate's end-to-end scenario tests: internal `#[cfg(test)]` fixtures
//! stay small and local rather than importing a shared test harness for
//! simple cases.
#![cfg(test)]

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::rtp_module::RtpModule;
use crate::types::{PacedPacketInfo, RtxSendStatus, Ssrc, TransportFeedback};

pub(crate) struct FakeModule {
    pub(crate) ssrc: AtomicU32,
    pub(crate) sending_media: AtomicBool,
    pub(crate) has_bwe_extensions: AtomicBool,
    pub(crate) rtx_send_status: Mutex<RtxSendStatus>,
    pub(crate) remb: AtomicBool,
    pub(crate) padding_to_return: AtomicUsize,
    pub(crate) time_to_send_packet_result: AtomicBool,
    pub(crate) send_feedback_result: AtomicBool,
    pub(crate) padding_calls: Mutex<Vec<usize>>,
    pub(crate) set_remb_data_calls: Mutex<Vec<(u64, Vec<Ssrc>)>>,
}

impl FakeModule {
    pub(crate) fn new(ssrc: Ssrc) -> Self {
        Self {
            ssrc: AtomicU32::new(ssrc),
            sending_media: AtomicBool::new(true),
            has_bwe_extensions: AtomicBool::new(true),
            rtx_send_status: Mutex::new(RtxSendStatus::Off),
            remb: AtomicBool::new(false),
            padding_to_return: AtomicUsize::new(0),
            time_to_send_packet_result: AtomicBool::new(true),
            send_feedback_result: AtomicBool::new(false),
            padding_calls: Mutex::new(Vec::new()),
            set_remb_data_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_rtx_status(self, status: RtxSendStatus) -> Self {
        *self.rtx_send_status.lock().unwrap() = status;
        self
    }

    pub(crate) fn with_padding(self, bytes: usize) -> Self {
        self.padding_to_return.store(bytes, Ordering::SeqCst);
        self
    }

    pub(crate) fn padding_calls(&self) -> Vec<usize> {
        self.padding_calls.lock().unwrap().clone()
    }

    pub(crate) fn set_remb_data_calls(&self) -> Vec<(u64, Vec<Ssrc>)> {
        self.set_remb_data_calls.lock().unwrap().clone()
    }
}

impl RtpModule for FakeModule {
    fn ssrc(&self) -> Ssrc {
        self.ssrc.load(Ordering::SeqCst)
    }

    fn sending_media(&self) -> bool {
        self.sending_media.load(Ordering::SeqCst)
    }

    fn time_to_send_packet(
        &self,
        _ssrc: Ssrc,
        _sequence_number: u16,
        _capture_time_ms: i64,
        _is_retransmit: bool,
        _paced_info: PacedPacketInfo,
    ) -> bool {
        self.time_to_send_packet_result.load(Ordering::SeqCst)
    }

    fn time_to_send_padding(&self, bytes: usize, _paced_info: PacedPacketInfo) -> usize {
        self.padding_calls.lock().unwrap().push(bytes);
        self.padding_to_return.load(Ordering::SeqCst).min(bytes)
    }

    fn has_bwe_extensions(&self) -> bool {
        self.has_bwe_extensions.load(Ordering::SeqCst)
    }

    fn rtx_send_status(&self) -> RtxSendStatus {
        *self.rtx_send_status.lock().unwrap()
    }

    fn remb(&self) -> bool {
        self.remb.load(Ordering::SeqCst)
    }

    fn set_remb_status(&self, active: bool) {
        self.remb.store(active, Ordering::SeqCst);
    }

    fn set_remb_data(&self, bitrate_bps: u64, ssrcs: &[Ssrc]) {
        self.set_remb_data_calls
            .lock()
            .unwrap()
            .push((bitrate_bps, ssrcs.to_vec()));
    }

    fn send_feedback_packet(&self, _feedback: &TransportFeedback) -> bool {
        self.send_feedback_result.load(Ordering::SeqCst)
    }
}
