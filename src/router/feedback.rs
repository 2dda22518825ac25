//! Transport-wide feedback routing.
use super::state::RouterState;
use crate::types::TransportFeedback;

impl RouterState {
    /// Offers `feedback` to send modules first in insertion order, then
    /// receive modules; first module that accepts it wins.
    pub(crate) fn send_transport_feedback(&self, feedback: &TransportFeedback) -> bool {
        for entry in &self.send_modules {
            if entry.handle.send_feedback_packet(feedback) {
                return true;
            }
        }

        for entry in &self.receive_modules {
            if entry.handle.send_feedback_packet(feedback) {
                return true;
            }
        }

        false
    }
}
