//! A scriptable fake `RtpModule` for the end-to-end scenarios in
//! `tests/scenarios.rs`. Not a mocking-crate double, just a small struct
//! behind a `Mutex` recording what the router called and returning
//! canned answers.
#![allow(dead_code)]

use std::sync::Mutex;

use packet_router::{PacedPacketInfo, RtpModule, RtxSendStatus, Ssrc, TransportFeedback};

#[derive(Debug, Default, Clone)]
pub struct Call {
    pub ssrc: Ssrc,
    pub sequence_number: u16,
    pub capture_time_ms: i64,
    pub is_retransmit: bool,
}

pub struct FakeModule {
    inner: Mutex<Inner>,
}

struct Inner {
    ssrc: Ssrc,
    sending_media: bool,
    has_bwe_extensions: bool,
    rtx_send_status: RtxSendStatus,
    remb: bool,
    padding_to_return: usize,
    time_to_send_packet_result: bool,
    time_to_send_packet_calls: Vec<Call>,
    time_to_send_padding_calls: Vec<usize>,
    set_remb_status_calls: Vec<bool>,
    set_remb_data_calls: Vec<(u64, Vec<Ssrc>)>,
    send_feedback_result: bool,
    send_feedback_calls: usize,
}

impl FakeModule {
    pub fn new(ssrc: Ssrc) -> Self {
        Self {
            inner: Mutex::new(Inner {
                ssrc,
                sending_media: false,
                has_bwe_extensions: false,
                rtx_send_status: RtxSendStatus::Off,
                remb: false,
                padding_to_return: 0,
                time_to_send_packet_result: true,
                time_to_send_packet_calls: Vec::new(),
                time_to_send_padding_calls: Vec::new(),
                set_remb_status_calls: Vec::new(),
                set_remb_data_calls: Vec::new(),
                send_feedback_result: false,
                send_feedback_calls: 0,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("fake module mutex poisoned")
    }

    pub fn set_sending_media(&self, sending: bool) {
        self.lock().sending_media = sending;
    }

    pub fn set_ssrc(&self, ssrc: Ssrc) {
        self.lock().ssrc = ssrc;
    }

    pub fn set_has_bwe_extensions(&self, value: bool) {
        self.lock().has_bwe_extensions = value;
    }

    pub fn set_rtx_send_status(&self, status: RtxSendStatus) {
        self.lock().rtx_send_status = status;
    }

    pub fn set_padding_to_return(&self, bytes: usize) {
        self.lock().padding_to_return = bytes;
    }

    pub fn set_time_to_send_packet_result(&self, result: bool) {
        self.lock().time_to_send_packet_result = result;
    }

    pub fn set_send_feedback_result(&self, result: bool) {
        self.lock().send_feedback_result = result;
    }

    pub fn time_to_send_packet_calls(&self) -> Vec<Call> {
        self.lock().time_to_send_packet_calls.clone()
    }

    pub fn time_to_send_padding_calls(&self) -> Vec<usize> {
        self.lock().time_to_send_padding_calls.clone()
    }

    pub fn set_remb_status_calls(&self) -> Vec<bool> {
        self.lock().set_remb_status_calls.clone()
    }

    pub fn set_remb_data_calls(&self) -> Vec<(u64, Vec<Ssrc>)> {
        self.lock().set_remb_data_calls.clone()
    }

    pub fn send_feedback_calls(&self) -> usize {
        self.lock().send_feedback_calls
    }
}

impl RtpModule for FakeModule {
    fn ssrc(&self) -> Ssrc {
        self.lock().ssrc
    }

    fn sending_media(&self) -> bool {
        self.lock().sending_media
    }

    fn time_to_send_packet(
        &self,
        ssrc: Ssrc,
        sequence_number: u16,
        capture_time_ms: i64,
        is_retransmit: bool,
        _paced_info: PacedPacketInfo,
    ) -> bool {
        let mut inner = self.lock();
        inner.time_to_send_packet_calls.push(Call {
            ssrc,
            sequence_number,
            capture_time_ms,
            is_retransmit,
        });
        inner.time_to_send_packet_result
    }

    fn time_to_send_padding(&self, bytes: usize, _paced_info: PacedPacketInfo) -> usize {
        let mut inner = self.lock();
        inner.time_to_send_padding_calls.push(bytes);
        inner.padding_to_return.min(bytes)
    }

    fn has_bwe_extensions(&self) -> bool {
        self.lock().has_bwe_extensions
    }

    fn rtx_send_status(&self) -> RtxSendStatus {
        self.lock().rtx_send_status
    }

    fn remb(&self) -> bool {
        self.lock().remb
    }

    fn set_remb_status(&self, active: bool) {
        let mut inner = self.lock();
        inner.remb = active;
        inner.set_remb_status_calls.push(active);
    }

    fn set_remb_data(&self, bitrate_bps: u64, ssrcs: &[Ssrc]) {
        self.lock()
            .set_remb_data_calls
            .push((bitrate_bps, ssrcs.to_vec()));
    }

    fn send_feedback_packet(&self, _feedback: &TransportFeedback) -> bool {
        let mut inner = self.lock();
        inner.send_feedback_calls += 1;
        inner.send_feedback_result
    }
}
