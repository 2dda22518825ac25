use thiserror::Error;

/// Errors the router can report at its release-mode no-op boundary.
///
/// These are distinct from the ordinary runtime no-ops (dispatch to an
/// unknown SSRC, padding with no eligible module, …), which are encoded
/// entirely in the ordinary `bool`/`usize` return values and never reach
/// this type. `RouterError` exists only for the programmer-error paths
/// that a debug build enforces with `debug_assert!` but a release build
/// must degrade out of without corrupting the registry.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A mutex guarding router state was poisoned by a panic in another
    /// thread while the lock was held.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),

    /// `add_send_module` / `add_receive_module` was called with a handle
    /// already present in either registry.
    #[error("module already registered")]
    ModuleAlreadyRegistered,

    /// `remove_send_module` / `remove_receive_module` was called with a
    /// handle not present in the target registry.
    #[error("module not registered")]
    ModuleNotRegistered,
}

/// A convenient Result type alias using `RouterError`.
pub type Result<T> = std::result::Result<T, RouterError>;

impl RouterError {
    /// Creates a new lock poisoned error with a descriptive message.
    pub fn lock_poisoned(resource: &str) -> Self {
        RouterError::LockPoisoned(format!("failed to acquire lock on {resource}"))
    }
}

/// Helper trait to convert `PoisonError` into `RouterError`.
pub trait LockResultExt<T> {
    /// Convert a lock result into a `RouterError` result.
    fn map_lock_err(self, resource: &str) -> Result<T>;
}

impl<T, E> LockResultExt<T> for std::result::Result<T, std::sync::PoisonError<E>> {
    fn map_lock_err(self, resource: &str) -> Result<T> {
        self.map_err(|_| RouterError::lock_poisoned(resource))
    }
}
