//! Logic Module - Engines & Collaborators
//!
//! Pipeline order: `url` -> `features` -> `model` -> `risk`, driven by
//! `engine`. `reputation` is the only external collaborator on the path;
//! `explain` is produce-once data for display consumers.

pub mod config;
pub mod engine;
pub mod explain;
pub mod features;
pub mod model;
pub mod reputation;
pub mod risk;
pub mod url;

#[cfg(test)]
pub(crate) mod test_support {
    //! Serializes tests that mutate process-wide state (model store,
    //! reputation provider registry).

    use once_cell::sync::Lazy;
    use parking_lot::{Mutex, MutexGuard};

    static GLOBAL_STATE: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    pub fn global_state_lock() -> MutexGuard<'static, ()> {
        GLOBAL_STATE.lock()
    }
}
