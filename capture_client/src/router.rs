//! Screen routing as a transition table instead of a navigation stack.
//! The whole flow is three screens and three events, so the router is a
//! pure function over two enums and tests need no rendering at all.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Capture,
    AuthSuccess,
    AuthFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Authenticated,
    Denied,
    Back,
}

/// Events that make no sense on the current screen leave it unchanged.
pub fn transition(screen: Screen, event: ScreenEvent) -> Screen {
    match (screen, event) {
        (Screen::Capture, ScreenEvent::Authenticated) => Screen::AuthSuccess,
        (Screen::Capture, ScreenEvent::Denied) => Screen::AuthFailure,
        (Screen::AuthSuccess, ScreenEvent::Back) => Screen::Capture,
        (Screen::AuthFailure, ScreenEvent::Back) => Screen::Capture,
        (current, _) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_routes_to_success() {
        assert_eq!(
            transition(Screen::Capture, ScreenEvent::Authenticated),
            Screen::AuthSuccess
        );
    }

    #[test]
    fn denied_routes_to_failure() {
        assert_eq!(
            transition(Screen::Capture, ScreenEvent::Denied),
            Screen::AuthFailure
        );
    }

    #[test]
    fn both_terminal_screens_route_back_to_capture() {
        assert_eq!(
            transition(Screen::AuthSuccess, ScreenEvent::Back),
            Screen::Capture
        );
        assert_eq!(
            transition(Screen::AuthFailure, ScreenEvent::Back),
            Screen::Capture
        );
    }

    #[test]
    fn unexpected_events_keep_the_current_screen() {
        assert_eq!(
            transition(Screen::Capture, ScreenEvent::Back),
            Screen::Capture
        );
        assert_eq!(
            transition(Screen::AuthSuccess, ScreenEvent::Authenticated),
            Screen::AuthSuccess
        );
        assert_eq!(
            transition(Screen::AuthFailure, ScreenEvent::Denied),
            Screen::AuthFailure
        );
    }
}
