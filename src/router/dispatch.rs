//! Send dispatch: routes pacer decisions to the matching send module.
use log::debug;

use super::state::RouterState;
use crate::types::{PacedPacketInfo, Ssrc};

impl RouterState {
    /// Finds the send module currently sending `ssrc` and forwards the
    /// send decision to it.
    ///
    /// Returns `true` on no match or when nothing is sending, a
    /// deliberate upstream contract preserved verbatim so the pacer never
    /// retries a packet whose SSRC was torn down mid-flight.
    pub(crate) fn time_to_send_packet(
        &self,
        ssrc: Ssrc,
        sequence_number: u16,
        capture_time_ms: i64,
        is_retransmit: bool,
        paced_info: PacedPacketInfo,
    ) -> bool {
        for entry in &self.send_modules {
            if !entry.handle.sending_media() {
                continue;
            }
            if entry.handle.ssrc() != ssrc {
                continue;
            }
            return entry.handle.time_to_send_packet(
                ssrc,
                sequence_number,
                capture_time_ms,
                is_retransmit,
                paced_info,
            );
        }

        debug!("TimeToSendPacket: no send module matched ssrc {ssrc}");
        true
    }

    /// Walks the cached padding priority order, asking each eligible
    /// module for padding until the requested byte budget is met or every
    /// eligible module has been asked. Returns the total bytes sent.
    pub(crate) fn time_to_send_padding(
        &self,
        requested_bytes: usize,
        paced_info: PacedPacketInfo,
    ) -> usize {
        let mut remaining = requested_bytes;

        for &index in &self.padding_order {
            if remaining == 0 {
                break;
            }

            let entry = &self.send_modules[index];
            if !entry.handle.sending_media() || !entry.handle.has_bwe_extensions() {
                continue;
            }

            let sent = entry.handle.time_to_send_padding(remaining, paced_info);
            remaining = remaining.saturating_sub(sent);
        }

        requested_bytes - remaining
    }
}
