//! Navigation adapters.
//!
//! Implementations of the `Navigator` port:
//!
//! - `channel_navigator` - Forwards requests to the host over an mpsc channel
//! - `recording_navigator` - Test double that captures requests

mod channel_navigator;
mod recording_navigator;

pub use channel_navigator::ChannelNavigator;
pub use recording_navigator::RecordingNavigator;
