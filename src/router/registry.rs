//! Module registry: add/remove for the send and receive `RtpModule` sets.
//!
//! Two ordered `Vec`s, not hash sets: insertion order governs both REMB
//! election tie-breaking and feedback fallback order, and the registry is
//! small enough (typically <= 3 modules per direction) that linear scans
//! are the right tool.
use std::sync::Arc;

use super::remb::elect_active_remb;
use super::state::{ReceiveEntry, RouterState, SendEntry};
use crate::error::{Result, RouterError};
use crate::rtp_module::RtpModule;

impl RouterState {
    /// Whether `handle` is present in either registry.
    fn contains(&self, handle: &Arc<dyn RtpModule>) -> bool {
        self.send_modules
            .iter()
            .any(|entry| Arc::ptr_eq(&entry.handle, handle))
            || self
                .receive_modules
                .iter()
                .any(|entry| Arc::ptr_eq(&entry.handle, handle))
    }

    /// Registers a send module. Double registration is a programmer
    /// error: `debug_assert!` makes it fatal in debug builds; a release
    /// build returns `Err` without touching the registry.
    pub(crate) fn add_send_module(
        &mut self,
        handle: Arc<dyn RtpModule>,
        remb_candidate: bool,
    ) -> Result<()> {
        if self.contains(&handle) {
            debug_assert!(
                false,
                "AddSendRtpModule: handle already registered in either collection"
            );
            return Err(RouterError::ModuleAlreadyRegistered);
        }

        let rtx_status = handle.rtx_send_status();
        self.send_modules.push(SendEntry {
            handle,
            remb_candidate,
            rtx_status,
        });
        self.recompute_padding_order();
        elect_active_remb(self);
        Ok(())
    }

    /// Registers a receive module. Same double-registration handling as
    /// [`RouterState::add_send_module`].
    pub(crate) fn add_receive_module(
        &mut self,
        handle: Arc<dyn RtpModule>,
        remb_candidate: bool,
    ) -> Result<()> {
        if self.contains(&handle) {
            debug_assert!(
                false,
                "AddReceiveRtpModule: handle already registered in either collection"
            );
            return Err(RouterError::ModuleAlreadyRegistered);
        }

        self.receive_modules.push(ReceiveEntry {
            handle,
            remb_candidate,
        });
        elect_active_remb(self);
        Ok(())
    }

    /// Unregisters a send module. Removing a handle that was never
    /// registered is a programmer error, handled the same way as double
    /// registration.
    pub(crate) fn remove_send_module(&mut self, handle: &Arc<dyn RtpModule>) -> Result<()> {
        let Some(index) = self
            .send_modules
            .iter()
            .position(|entry| Arc::ptr_eq(&entry.handle, handle))
        else {
            debug_assert!(false, "RemoveSendRtpModule: handle not registered");
            return Err(RouterError::ModuleNotRegistered);
        };

        self.clear_active_remb_if(handle);
        self.send_modules.remove(index);
        self.recompute_padding_order();
        elect_active_remb(self);
        Ok(())
    }

    /// Unregisters a receive module.
    pub(crate) fn remove_receive_module(&mut self, handle: &Arc<dyn RtpModule>) -> Result<()> {
        let Some(index) = self
            .receive_modules
            .iter()
            .position(|entry| Arc::ptr_eq(&entry.handle, handle))
        else {
            debug_assert!(false, "RemoveReceiveRtpModule: handle not registered");
            return Err(RouterError::ModuleNotRegistered);
        };

        self.clear_active_remb_if(handle);
        self.receive_modules.remove(index);
        elect_active_remb(self);
        Ok(())
    }

    /// Clears the active REMB module's advertisement before it can be
    /// invalidated by removal.
    fn clear_active_remb_if(&mut self, handle: &Arc<dyn RtpModule>) {
        if let Some(active) = &self.active_remb {
            if Arc::ptr_eq(&active.handle, handle) {
                active.handle.set_remb_status(false);
                self.active_remb = None;
            }
        }
    }

    /// Recomputes `padding_order`: send modules ranked by RTX padding
    /// priority, ties broken by insertion order.
    pub(crate) fn recompute_padding_order(&mut self) {
        let mut order: Vec<usize> = (0..self.send_modules.len()).collect();
        order.sort_by_key(|&index| (self.send_modules[index].rtx_status.padding_rank(), index));
        self.padding_order = order;
    }
}
