use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use flycam::cli::Cli;
use flycam::{
    Camera, CameraState, Clock, EyeConstants, FlyConfig, FlyMotion, PerFrameConstants, Projection,
};

/// What the run prints when it finishes
#[derive(Debug, Serialize)]
struct FrameReport {
    frames: u32,
    state: CameraState,
    position: [f32; 4],
    forward: [f32; 4],
    view: [[f32; 4]; 4],
    view_projection: [[f32; 4]; 4],
}

fn load_config(cli: &Cli) -> Result<FlyConfig> {
    match &cli.config {
        Some(path) => FlyConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(FlyConfig::default()),
    }
}

fn initial_camera(cli: &Cli, config: &FlyConfig) -> Result<Camera> {
    match &cli.restore {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read camera state {}", path.display()))?;
            let state = CameraState::from_json(&json)
                .with_context(|| format!("failed to parse camera state {}", path.display()))?;
            Ok(Camera::from_state(state)?)
        }
        None => Ok(Camera::with_position(config.start_position)),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut camera = initial_camera(&cli, &config)?;
    let projection = Projection::from_config(&config, cli.width, cli.height);
    let motion = FlyMotion::from_config(&config);
    let movement = cli.movement();

    info!(
        "flying {} frames from {:?} with {:?}",
        cli.frames,
        camera.position(),
        movement
    );

    let mut clock = Clock::new(config.target_framerate);
    for frame in 0..cli.frames {
        let dt = match cli.dt {
            Some(dt) => dt.min(config.max_time_step()),
            None => clock.tick_capped(),
        };
        motion.apply(&mut camera, &movement, dt);
        debug!("frame {}: position {:?}", frame, camera.position());
    }

    let frame_constants = PerFrameConstants::new(&camera, &projection);
    let eye = EyeConstants::new(&camera);

    if let Some(path) = &cli.save {
        fs::write(path, camera.state().to_json()?)
            .with_context(|| format!("failed to write camera state {}", path.display()))?;
        info!("saved camera state to {}", path.display());
    }

    let report = FrameReport {
        frames: cli.frames,
        state: camera.state(),
        position: eye.position,
        forward: eye.forward,
        view: camera.view_matrix().to_cols_array_2d(),
        view_projection: frame_constants.view_projection,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Frames:   {}", report.frames);
        println!("Position: {:?}", report.position);
        println!("Forward:  {:?}", report.forward);
        println!("View matrix (columns):");
        for column in report.view {
            println!("  {:?}", column);
        }
    }

    Ok(())
}
