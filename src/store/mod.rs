//! Persistence channels for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous viewers keep the preference in browser-local storage; signed-in
//! viewers have it stored server side. Exactly one channel is built per page
//! and every toggle writes through that channel only.
//!
//! ERROR HANDLING
//! ==============
//! Persisting is fire-and-forget from the controller's point of view. Stores
//! log failures and never roll back the visual state.


pub mod local;
pub mod remote;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::identity::ViewerIdentity;
use crate::theme::ThemeMode;

pub use local::{KeyValueStorage, LocalStore, MemoryStorage};
pub use remote::{RemoteStore, Transport};

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("local storage write failed: {0}")]
    Storage(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

/// Which side-channel a store writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Local,
    Remote,
}

/// Write side of a preference channel.
pub trait ThemeStore {
    fn channel(&self) -> Channel;

    /// Record `mode` as the new preference. Failures are logged, not returned.
    fn persist(&self, mode: ThemeMode);
}

/// Build the single store matching `identity`.
pub fn select_store(
    identity: ViewerIdentity,
    storage: Rc<dyn KeyValueStorage>,
    transport: Rc<dyn Transport>,
    config: &ThemeConfig,
) -> Box<dyn ThemeStore> {
    match identity {
        ViewerIdentity::Authenticated => {
            Box::new(RemoteStore::new(transport, config.endpoint.clone()))
        }
        ViewerIdentity::Anonymous => {
            Box::new(LocalStore::new(storage, config.storage_key.clone()))
        }
    }
}
