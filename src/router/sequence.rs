//! Transport-wide sequence number allocation.
use super::state::RouterState;

impl RouterState {
    /// Resets the sequence counter, typically at the start of a call.
    pub(crate) fn set_transport_wide_sequence_number(&mut self, n: u16) {
        self.sequence_number = n;
    }

    /// Increments and returns the post-increment value, wrapping modulo
    /// 2^16.
    pub(crate) fn allocate_sequence_number(&mut self) -> u16 {
        self.sequence_number = self.sequence_number.wrapping_add(1);
        self.sequence_number
    }
}
