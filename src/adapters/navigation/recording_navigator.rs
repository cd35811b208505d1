//! Recording Navigator Adapter
//!
//! Test double that stores every navigation request for inspection. The
//! redirect-idempotence assertions in the session and guard tests are all
//! built on this.

use std::sync::Mutex;

use crate::domain::NavigationRequest;
use crate::ports::Navigator;

/// Navigator that records requests instead of routing.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<NavigationRequest>>,
}

impl RecordingNavigator {
    /// Creates a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded requests, in order.
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the most recent request, if any.
    pub fn last(&self) -> Option<NavigationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Returns how many requests were recorded.
    pub fn len(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.requests.lock().unwrap().is_empty()
    }

    /// Forgets all recorded requests.
    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        self.requests.lock().unwrap().push(request);
    }
}
