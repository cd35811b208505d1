//! Channel-backed Navigator Adapter
//!
//! Forwards navigation requests over an unbounded channel to whatever
//! runs the host's routing - a UI event loop, a screen stack, a bridge
//! into a webview. Sending never blocks; if the host side is gone the
//! request is dropped.

use tokio::sync::mpsc;

use crate::domain::NavigationRequest;
use crate::ports::Navigator;

/// Navigator that emits requests into an mpsc channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<NavigationRequest>,
}

impl ChannelNavigator {
    /// Creates a navigator together with the receiving end for the host.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NavigationRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wraps an existing sender.
    pub fn from_sender(sender: mpsc::UnboundedSender<NavigationRequest>) -> Self {
        Self { sender }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, request: NavigationRequest) {
        if self.sender.send(request).is_err() {
            tracing::debug!("navigation receiver dropped, discarding request");
        }
    }
}
