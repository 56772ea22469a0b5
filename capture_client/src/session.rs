use crate::api::{Authenticator, Verdict};
use crate::camera::FrameSource;
use crate::router::ScreenEvent;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;

/// Drives one capture-and-submit round at a time. The `submitting` flag is
/// advisory debouncing of the capture control, not a concurrency primitive.
pub struct CaptureSession<F: FrameSource, A: Authenticator> {
    frames: F,
    authenticator: A,
    submitting: bool,
}

impl<F: FrameSource, A: Authenticator> CaptureSession<F, A> {
    pub fn new(frames: F, authenticator: A) -> Self {
        Self {
            frames,
            authenticator,
            submitting: false,
        }
    }

    /// Returns `None` while a previous round is still in flight; the busy
    /// flag is cleared on every exit path so the control re-enables.
    pub async fn capture_and_submit(&mut self) -> Option<ScreenEvent> {
        if self.submitting {
            return None;
        }
        self.submitting = true;

        let event = match self.frames.capture_jpeg().await {
            Ok(frame) => self.submit(BASE64_STANDARD.encode(&frame)).await,
            Err(err) => {
                tracing::error!("capture failed: {:?}", err);
                ScreenEvent::Denied
            }
        };

        self.submitting = false;
        Some(event)
    }

    async fn submit(&self, image_b64: String) -> ScreenEvent {
        match self.authenticator.authenticate(image_b64).await {
            Ok(Verdict::Accepted { staff_id }) => {
                tracing::info!(
                    staff_id = staff_id.as_deref().unwrap_or("unknown"),
                    "authenticated"
                );
                ScreenEvent::Authenticated
            }
            Ok(Verdict::Rejected) => {
                tracing::info!("no matching face");
                ScreenEvent::Denied
            }
            Err(err) => {
                // Transport failures and explicit rejections end up on the
                // same screen; only the log tells them apart.
                tracing::error!("submission failed: {:?}", err);
                ScreenEvent::Denied
            }
        }
    }
}
