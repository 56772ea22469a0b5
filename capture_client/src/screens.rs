use crate::router::Screen;

/// Static copy for each screen. Every screen exposes exactly one action,
/// so the prompt doubles as the control.
pub fn render(screen: Screen) -> &'static str {
    match screen {
        Screen::Capture => "Camera ready. Press Enter to capture and authenticate.",
        Screen::AuthSuccess => "Welcome, staff! Press Enter to go back.",
        Screen::AuthFailure => "Authentication failed. Press Enter to try again.",
    }
}

pub fn no_access() -> &'static str {
    "No access to camera."
}
