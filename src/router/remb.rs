//! REMB election and throttled emission.
use std::sync::Arc;
use std::time::Duration;

use log::info;

use super::state::{ActiveRemb, RouterState};
use crate::clock::Clock;
use crate::rtp_module::RtpModule;
use crate::types::Ssrc;

/// Runs the election rule and, if the active module changed, flips REMB
/// status on the old and new modules. Called on every registry mutation.
pub(super) fn elect_active_remb(state: &mut RouterState) {
    let winner = elect(state);

    let changed = match (&state.active_remb, &winner) {
        (Some(current), Some(candidate)) => !Arc::ptr_eq(&current.handle, candidate),
        (None, None) => false,
        _ => true,
    };

    if !changed {
        return;
    }

    if let Some(previous) = state.active_remb.take() {
        previous.handle.set_remb_status(false);
        info!("REMB: deactivated previous active module");
    }

    if let Some(handle) = winner {
        handle.set_remb_status(true);
        info!("REMB: activated new active module");
        state.active_remb = Some(ActiveRemb { handle });
    }
}

/// Selection rule: prefer any send module over any receive module,
/// earliest insertion within the preferred class, else `None`.
fn elect(state: &RouterState) -> Option<Arc<dyn RtpModule>> {
    state
        .send_modules
        .iter()
        .find(|entry| entry.remb_candidate)
        .map(|entry| entry.handle.clone())
        .or_else(|| {
            state
                .receive_modules
                .iter()
                .find(|entry| entry.remb_candidate)
                .map(|entry| entry.handle.clone())
        })
}

impl RouterState {
    /// Reports a new bandwidth estimate, throttling REMB emission to the
    /// active module unless the interval has elapsed or the estimate
    /// dropped by more than 3% since the last emission.
    pub(crate) fn on_receive_bitrate_changed(
        &mut self,
        ssrcs: &[Ssrc],
        bitrate_bps: u64,
        clock: &dyn Clock,
        remb_interval: Duration,
    ) {
        let now = clock.now();
        let throttle = &mut self.remb_throttle;

        let decreased_beyond_threshold = throttle
            .last_bitrate_bps
            .map(|previous| (bitrate_bps as f64) < (previous as f64) * 0.97)
            .unwrap_or(false);

        let interval_elapsed = throttle
            .last_send_time
            .map(|last| now.duration_since(last) >= remb_interval)
            .unwrap_or(true);

        let should_emit = interval_elapsed || decreased_beyond_threshold;

        throttle.last_bitrate_bps = Some(bitrate_bps);

        if !should_emit {
            return;
        }

        let Some(active) = &self.active_remb else {
            return;
        };

        active.handle.set_remb_data(bitrate_bps, ssrcs);
        self.remb_throttle.last_send_time = Some(now);
        info!("REMB: emitted {bitrate_bps} bps to active module");
    }
}
