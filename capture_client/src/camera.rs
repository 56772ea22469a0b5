use async_trait::async_trait;
use opencv::{core::Vector, imgcodecs, prelude::*, videoio};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Failed to open camera: {0}")]
    OpenCameraFailed(opencv::Error),
    #[error("Camera device {0} is not available")]
    DeviceUnavailable(i32),
    #[error("Failed to read frame: {0}")]
    ReadFrameFailed(opencv::Error),
    #[error("Camera produced an empty frame")]
    EmptyFrame,
    #[error("Failed to encode frame: {0}")]
    EncodeFrameFailed(opencv::Error),
}

/// Source of still frames, already encoded for the wire.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn capture_jpeg(&self) -> Result<Vec<u8>, CameraError>;
}

#[derive(Debug)]
pub struct Camera {
    capture: Mutex<videoio::VideoCapture>,
}

impl Camera {
    /// Opening the device doubles as the one-time permission request: a
    /// denied or missing camera surfaces here and nowhere else.
    pub fn open(device_index: i32) -> Result<Self, CameraError> {
        let capture = videoio::VideoCapture::new(device_index, videoio::CAP_ANY)
            .map_err(CameraError::OpenCameraFailed)?;
        if !capture.is_opened().map_err(CameraError::OpenCameraFailed)? {
            return Err(CameraError::DeviceUnavailable(device_index));
        }
        Ok(Self {
            capture: Mutex::new(capture),
        })
    }
}

#[async_trait]
impl FrameSource for Camera {
    async fn capture_jpeg(&self) -> Result<Vec<u8>, CameraError> {
        let mut cam = self.capture.lock().await;
        let mut frame = Mat::default();
        if !cam.read(&mut frame).map_err(CameraError::ReadFrameFailed)? || frame.empty() {
            return Err(CameraError::EmptyFrame);
        }

        let mut buf = Vector::<u8>::new();
        imgcodecs::imencode(".jpg", &frame, &mut buf, &Vector::new())
            .map_err(CameraError::EncodeFrameFailed)?;
        Ok(buf.into())
    }
}
