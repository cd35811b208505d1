//! Navigation port.
//!
//! The session core decides *where* the user should go - it never routes.
//! Redirects leave the core as [`NavigationRequest`] values through this
//! port, and the host shell (a router, a TUI screen stack, a test
//! recorder) carries them out.

use crate::domain::NavigationRequest;

/// Receives navigation requests from the session core.
///
/// # Contract
///
/// Implementations must:
/// - Be non-blocking - `navigate` is called from async contexts and from
///   the guard's watch loop, and must return immediately
/// - Preserve `NavigationMode`: `Replace` requests must not grow the
///   host's history, so backing out of a redirect cannot bounce
/// - Never panic when the host side is gone; dropping the request is the
///   correct degraded behavior
pub trait Navigator: Send + Sync {
    /// Emit one navigation request.
    fn navigate(&self, request: NavigationRequest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct VecNavigator {
        seen: Mutex<Vec<NavigationRequest>>,
    }

    impl Navigator for VecNavigator {
        fn navigate(&self, request: NavigationRequest) {
            self.seen.lock().unwrap().push(request);
        }
    }

    #[test]
    fn navigator_receives_requests_in_order() {
        let navigator = VecNavigator {
            seen: Mutex::new(Vec::new()),
        };

        navigator.navigate(NavigationRequest::replace("/login"));
        navigator.navigate(NavigationRequest::push("/admin/dashboard"));

        let seen = navigator.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_replace());
        assert_eq!(seen[1].path, "/admin/dashboard");
    }

    #[test]
    fn navigator_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Navigator>();
    }
}
