use crate::api::MatchClient;
use crate::camera::Camera;
use crate::config::Config;
use crate::router::{transition, Screen, ScreenEvent};
use crate::screens;
use crate::session::CaptureSession;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn start_app(config: Config) -> Result<(), Box<dyn Error>> {
    // Opening the device is the one-time permission request; a denied
    // camera renders the static no-access message with no retry path.
    let camera = match Camera::open(config.camera.device_index) {
        Ok(cam) => cam,
        Err(e) => {
            tracing::error!("Failed to initialize camera: {:?}", e);
            println!("{}", screens::no_access());
            return Ok(());
        }
    };

    let client = MatchClient::new(&config.endpoint.url);
    let mut session = CaptureSession::new(camera, client);

    let mut screen = Screen::Capture;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", screens::render(screen));
    while let Some(_line) = lines.next_line().await? {
        let event = match screen {
            Screen::Capture => session.capture_and_submit().await,
            Screen::AuthSuccess | Screen::AuthFailure => Some(ScreenEvent::Back),
        };
        if let Some(event) = event {
            screen = transition(screen, event);
        }
        println!("{}", screens::render(screen));
    }

    Ok(())
}
