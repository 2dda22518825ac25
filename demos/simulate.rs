//! Drives a `PacketRouter` through a small scripted call sequence so the
//! registry, dispatch, padding, REMB election, and feedback routing can be
//! watched end to end without standing up real RTP modules.
//!
//! Run with `cargo run --example simulate -- --scenario remb`.
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::info;
use packet_router::{
    PacedPacketInfo, PacketRouter, RtpModule, RtxSendStatus, Ssrc, TransportFeedback,
};

#[derive(Copy, Clone, ValueEnum)]
enum Scenario {
    Dispatch,
    Padding,
    Remb,
    Feedback,
}

#[derive(Parser)]
struct Args {
    #[arg(value_enum, long, default_value = "dispatch")]
    scenario: Scenario,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match args.scenario {
        Scenario::Dispatch => run_dispatch(),
        Scenario::Padding => run_padding(),
        Scenario::Remb => run_remb(),
        Scenario::Feedback => run_feedback(),
    }
}

fn run_dispatch() {
    let router = PacketRouter::new();
    let camera = Arc::new(LoggingModule::new("camera", 1001));
    let screen_share = Arc::new(LoggingModule::new("screen-share", 1002));

    router
        .add_send_rtp_module(camera.clone(), false)
        .expect("register camera");
    router
        .add_send_rtp_module(screen_share.clone(), false)
        .expect("register screen-share");

    camera.set_sending(true);
    let handled = router.time_to_send_packet(1001, 1, 0, false, PacedPacketInfo::not_probing());
    info!("dispatch to camera handled = {handled}");

    let handled = router.time_to_send_packet(9999, 1, 0, false, PacedPacketInfo::not_probing());
    info!("dispatch to unknown ssrc handled = {handled}");
}

fn run_padding() {
    let router = PacketRouter::new();
    let rtx_heavy = Arc::new(
        LoggingModule::new("rtx-heavy", 1)
            .with_rtx_status(RtxSendStatus::RedundantPayloads)
            .with_padding_budget(900),
    );
    let plain = Arc::new(LoggingModule::new("plain", 2).with_padding_budget(100));

    router
        .add_send_rtp_module(plain.clone(), false)
        .expect("register plain");
    router
        .add_send_rtp_module(rtx_heavy.clone(), false)
        .expect("register rtx-heavy");

    rtx_heavy.set_sending(true);
    plain.set_sending(true);

    let sent = router.time_to_send_padding(1000, PacedPacketInfo::not_probing());
    info!("padding dispatched {sent} bytes across modules, rtx-heavy serviced first");
}

fn run_remb() {
    let router = PacketRouter::new();
    let sender = Arc::new(LoggingModule::new("sender", 1));
    router
        .add_send_rtp_module(sender.clone(), true)
        .expect("register sender");

    router.on_receive_bitrate_changed(&[1], 2_000_000);
    info!("remb active after first estimate = {}", sender.remb());

    std::thread::sleep(Duration::from_millis(210));
    router.on_receive_bitrate_changed(&[1], 1_900_000);
    info!("second estimate emitted after interval elapsed");
}

fn run_feedback() {
    let router = PacketRouter::new();
    let send_side = Arc::new(LoggingModule::new("send-side", 1));
    let receive_side = Arc::new(LoggingModule::new("receive-side", 2).accepting_feedback());

    router
        .add_send_rtp_module(send_side.clone(), false)
        .expect("register send-side");
    router
        .add_receive_rtp_module(receive_side.clone(), false)
        .expect("register receive-side");

    let feedback = TransportFeedback {
        base_sequence_number: 0,
        report_span: Duration::from_millis(100),
        payload: vec![0xAA, 0xBB],
    };

    let handled = router.send_transport_feedback(&feedback);
    info!("feedback handled by a registered module = {handled}");
}

/// A small `RtpModule` that logs every call it receives instead of
/// recording them for assertions, for use outside the test suite.
struct LoggingModule {
    name: &'static str,
    ssrc: AtomicU32,
    sending: AtomicBool,
    rtx_status: Mutex<RtxSendStatus>,
    padding_budget: Mutex<usize>,
    accepts_feedback: AtomicBool,
    remb_active: AtomicBool,
}

impl LoggingModule {
    fn new(name: &'static str, ssrc: Ssrc) -> Self {
        Self {
            name,
            ssrc: AtomicU32::new(ssrc),
            sending: AtomicBool::new(false),
            rtx_status: Mutex::new(RtxSendStatus::Off),
            padding_budget: Mutex::new(0),
            accepts_feedback: AtomicBool::new(false),
            remb_active: AtomicBool::new(false),
        }
    }

    fn with_rtx_status(self, status: RtxSendStatus) -> Self {
        *self.rtx_status.lock().unwrap() = status;
        self
    }

    fn with_padding_budget(self, bytes: usize) -> Self {
        *self.padding_budget.lock().unwrap() = bytes;
        self
    }

    fn accepting_feedback(self) -> Self {
        self.accepts_feedback.store(true, Ordering::SeqCst);
        self
    }

    fn set_sending(&self, sending: bool) {
        self.sending.store(sending, Ordering::SeqCst);
    }
}

impl RtpModule for LoggingModule {
    fn ssrc(&self) -> Ssrc {
        self.ssrc.load(Ordering::SeqCst)
    }

    fn sending_media(&self) -> bool {
        self.sending.load(Ordering::SeqCst)
    }

    fn time_to_send_packet(
        &self,
        ssrc: Ssrc,
        sequence_number: u16,
        _capture_time_ms: i64,
        _is_retransmit: bool,
        _paced_info: PacedPacketInfo,
    ) -> bool {
        info!("{}: sending packet ssrc={ssrc} seq={sequence_number}", self.name);
        true
    }

    fn time_to_send_padding(&self, bytes: usize, _paced_info: PacedPacketInfo) -> usize {
        let mut budget = self.padding_budget.lock().unwrap();
        let sent = (*budget).min(bytes);
        *budget -= sent;
        info!("{}: sent {sent} bytes of padding", self.name);
        sent
    }

    fn has_bwe_extensions(&self) -> bool {
        true
    }

    fn rtx_send_status(&self) -> RtxSendStatus {
        *self.rtx_status.lock().unwrap()
    }

    fn remb(&self) -> bool {
        self.remb_active.load(Ordering::SeqCst)
    }

    fn set_remb_status(&self, active: bool) {
        self.remb_active.store(active, Ordering::SeqCst);
        info!("{}: remb status set to {active}", self.name);
    }

    fn set_remb_data(&self, bitrate_bps: u64, ssrcs: &[Ssrc]) {
        info!("{}: remb emitted {bitrate_bps} bps for {ssrcs:?}", self.name);
    }

    fn send_feedback_packet(&self, _feedback: &TransportFeedback) -> bool {
        let accepted = self.accepts_feedback.load(Ordering::SeqCst);
        info!("{}: offered feedback, accepted = {accepted}", self.name);
        accepted
    }
}
