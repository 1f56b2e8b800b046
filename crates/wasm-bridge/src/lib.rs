//! Message boundary between a presentation layer and the incidence kernel.
//!
//! The UI sends JSON-tagged [`UiToEngine`] requests and receives
//! [`EngineToUi`] responses. Every request is answered independently; the
//! bridge holds no state between calls.

pub mod dispatch;
pub mod error;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, process_json};
pub use error::BridgeError;
pub use messages::{EngineToUi, UiToEngine};

/// Most planes a single sweep request may carry.
pub const MAX_PLANES: usize = 10;

/// Most samples a single sweep request may produce, summed over its planes.
pub const MAX_REQUEST_SAMPLES: usize = 200_000;
