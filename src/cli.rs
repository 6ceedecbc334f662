// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::motion::MovementState;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycam")]
#[command(about = "Headless fly-through of a free-fly camera", long_about = None)]
pub struct Cli {
    /// JSON config file (speeds, start position, projection)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start from a saved camera state instead of the configured position
    #[arg(long)]
    pub restore: Option<PathBuf>,

    /// Write the final camera state to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Fixed frame time in seconds; wall-clock timing when omitted
    #[arg(long)]
    pub dt: Option<f32>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    #[arg(long)]
    pub forward: bool,
    #[arg(long)]
    pub backward: bool,
    #[arg(long)]
    pub strafe_left: bool,
    #[arg(long)]
    pub strafe_right: bool,
    #[arg(long)]
    pub rise: bool,
    #[arg(long)]
    pub sink: bool,
    #[arg(long)]
    pub yaw_left: bool,
    #[arg(long)]
    pub yaw_right: bool,
    #[arg(long)]
    pub pitch_up: bool,
    #[arg(long)]
    pub pitch_down: bool,

    /// Print the final frame report as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Cli {
    /// Movement held down for the whole run
    pub fn movement(&self) -> MovementState {
        MovementState {
            forward: self.forward,
            backward: self.backward,
            left: self.strafe_left,
            right: self.strafe_right,
            up: self.rise,
            down: self.sink,
            yaw_left: self.yaw_left,
            yaw_right: self.yaw_right,
            pitch_up: self.pitch_up,
            pitch_down: self.pitch_down,
        }
    }
}
