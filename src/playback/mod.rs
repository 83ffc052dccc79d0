//! Playback synchronization: the player service contract, the transport
//! controller, and the progress tracker.

pub mod error;
pub mod progress;
pub mod service;
pub mod simulated;
pub mod transport;

pub const LOG_TARGET: &str = "lost_sounds::playback";

pub use error::PlayerError;
pub use progress::{fraction_from_gesture, ProgressTracker, PROGRESS_UPDATE_INTERVAL};
pub use service::{PlayerService, ProgressSink};
pub use simulated::VirtualPlayer;
pub use transport::TransportController;
