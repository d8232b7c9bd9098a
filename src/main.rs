//! Headless replay of pointer input through the orbit camera.
//!
//! Stands in for the host frame loop: each recorded frame supplies pointer
//! position, scroll and the orbit button, and the controller produces the
//! eye position a renderer would look from.
//!
//! # Input
//! A (frames, 5) f32 .npy trace with columns
//! `[pointer_x, pointer_y, scroll, orbit_held, dt]`. Without `--input` a
//! scripted session is generated instead.
//!
//! # Output
//! A summary on stdout and, with `--output`, the eye path as (frames, 3) .npy.

use clap::Parser;
use glam::Vec3;
use orbit_camera::{
    coords::Spherical,
    trace::{save_eye_path, InputTrace, TraceLoader},
    CameraUniform, OrbitSettings, OrbitalCameraController,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbit_replay")]
#[command(about = "Replay recorded pointer input through a spherical orbit camera")]
struct Args {
    /// Path to the input trace (.npy)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to save the eye path (.npy)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Frames in the generated session when no input is given
    #[arg(long, default_value = "240")]
    frames: usize,

    /// Distance change per unit of scroll
    #[arg(long, default_value = "2.0")]
    zoom_speed: f32,

    /// Radians per pixel of pointer drag
    #[arg(long, default_value = "0.04")]
    orbit_speed: f32,

    /// Closest orbit distance
    #[arg(long, default_value = "4.0")]
    min_distance: f32,

    /// Farthest orbit distance
    #[arg(long, default_value = "40.0")]
    max_distance: f32,

    /// Viewport aspect ratio used for the final view-projection
    #[arg(long, default_value = "1.7778")]
    aspect: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let settings = build_settings(&args)?;
    let trace = load_trace(&args)?;
    let metadata = TraceLoader::metadata(&trace);
    println!(
        "Replaying {} frames ({:.2}s) from {}",
        metadata.num_frames, metadata.duration_seconds, metadata.file_path
    );

    let mut controller = OrbitalCameraController::new(settings);
    let eyes = replay(&mut controller, &trace)?;

    print_summary(&controller, &eyes, args.aspect);

    if let Some(output_path) = &args.output {
        save_eye_path(output_path, &eyes)?;
        println!("Eye path saved to {}", output_path.display());
    }
    Ok(())
}

fn build_settings(args: &Args) -> Result<OrbitSettings, Box<dyn std::error::Error>> {
    let finite = args.min_distance.is_finite() && args.max_distance.is_finite();
    if !finite || args.min_distance <= 0.0 || args.min_distance > args.max_distance {
        return Err(format!(
            "Invalid distance range [{}, {}]",
            args.min_distance, args.max_distance
        )
        .into());
    }

    Ok(OrbitSettings {
        speed: Spherical::new(args.zoom_speed, args.orbit_speed, args.orbit_speed),
        rho_min: args.min_distance,
        rho_max: args.max_distance,
        ..OrbitSettings::default()
    })
}

fn load_trace(args: &Args) -> Result<InputTrace, Box<dyn std::error::Error>> {
    match &args.input {
        Some(path) => {
            println!("Loading input trace from: {}", path.display());
            Ok(TraceLoader::load_trace(path)?)
        }
        None => {
            println!("No input trace given, using a generated session.");
            Ok(InputTrace::synthetic(args.frames))
        }
    }
}

fn replay(
    controller: &mut OrbitalCameraController,
    trace: &InputTrace,
) -> Result<Vec<Vec3>, Box<dyn std::error::Error>> {
    let frames = TraceLoader::frames(trace)?;
    let mut eyes = Vec::with_capacity(frames.len());
    let mut elapsed = 0.0_f32;

    for (index, frame) in frames.iter().enumerate() {
        elapsed += frame.delta_time;
        let eye = controller.update(&frame.input, frame.delta_time);
        log::debug!("frame {} t={:.3}s eye={:?}", index, elapsed, eye);
        eyes.push(eye);
    }

    Ok(eyes)
}

fn print_summary(controller: &OrbitalCameraController, eyes: &[Vec3], aspect: f32) {
    let (Some(first), Some(last)) = (eyes.first(), eyes.last()) else {
        println!("Trace was empty, camera stayed at {:?}", controller.eye_position());
        return;
    };

    let position = controller.state().position;
    println!("First eye: {:?}", first);
    println!("Last eye:  {:?}", last);
    println!(
        "Final orbit: rho={:.3} theta={:.3} rad phi={:.3} rad ({:.1}°)",
        position.rho,
        position.theta,
        position.phi,
        position.phi.to_degrees()
    );

    let uniform = CameraUniform::new(&controller.pose(), aspect);
    log::info!("Final view-projection: {:?}", uniform.view_projection);
}
