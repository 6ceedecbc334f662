pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod motion;
pub mod projection;
pub mod types;

pub use camera::{Camera, CameraState};
pub use clock::Clock;
pub use config::FlyConfig;
pub use error::{CameraError, ConfigError};
pub use motion::{FlyMotion, MovementState};
pub use projection::Projection;
pub use types::{EyeConstants, InstanceTransform, PerFrameConstants, PerObjectTransform};
