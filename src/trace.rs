use crate::camera::FrameInput;
use anyhow::{anyhow, Result};
use glam::{Vec2, Vec3};
use ndarray::Array2;
use std::path::Path;

/// Columns per frame: pointer x, pointer y, scroll, orbit held, dt.
pub const FLOATS_PER_FRAME: usize = 5;

const SYNTHETIC_DELTA_TIME: f32 = 1.0 / 60.0;

/// Loads recorded pointer input from .npy files
pub struct TraceLoader;

/// Flattened per-frame input, `FLOATS_PER_FRAME` values per frame.
pub struct InputTrace {
    pub file_path: String,
    pub num_frames: usize,
    pub data: Vec<f32>,
}

/// One frame of host input plus the time elapsed since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceFrame {
    pub input: FrameInput,
    pub delta_time: f32,
}

impl TraceLoader {
    /// Load a (frames, 5) f32 .npy file
    pub fn load_trace<P: AsRef<Path>>(file_path: P) -> Result<InputTrace> {
        let path = file_path.as_ref();
        let bytes = std::fs::read(path)?;
        let npy = npyz::NpyFile::new(&bytes[..])?;
        let num_frames = frame_count(npy.shape())?;
        let data: Vec<f32> = npy.into_vec()?;

        log::info!("Loaded input trace: {} frames from {}", num_frames, path.display());

        Ok(InputTrace {
            file_path: path.display().to_string(),
            num_frames,
            data,
        })
    }

    /// Extract the input for a specific frame
    pub fn frame_at(trace: &InputTrace, frame_index: usize) -> Result<TraceFrame> {
        if frame_index >= trace.num_frames {
            return Err(anyhow!(
                "Frame index {} out of bounds ({} frames)",
                frame_index,
                trace.num_frames
            ));
        }

        let offset = frame_index * FLOATS_PER_FRAME;
        let row = &trace.data[offset..offset + FLOATS_PER_FRAME];

        Ok(TraceFrame {
            input: FrameInput::new(Vec2::new(row[0], row[1]), row[2], row[3] != 0.0),
            delta_time: row[4],
        })
    }

    pub fn frames(trace: &InputTrace) -> Result<Vec<TraceFrame>> {
        (0..trace.num_frames)
            .map(|idx| Self::frame_at(trace, idx))
            .collect()
    }

    /// Total recorded time, summed from the per-frame dt column
    pub fn duration_seconds(trace: &InputTrace) -> f32 {
        trace
            .data
            .chunks_exact(FLOATS_PER_FRAME)
            .map(|row| row[4])
            .sum()
    }

    pub fn metadata(trace: &InputTrace) -> TraceMetadata {
        TraceMetadata {
            file_path: trace.file_path.clone(),
            num_frames: trace.num_frames,
            duration_seconds: TraceLoader::duration_seconds(trace),
        }
    }
}

// Traces are (frames, FLOATS_PER_FRAME); anything else is rejected.
fn frame_count(shape: &[u64]) -> Result<usize> {
    match shape {
        [frames, columns] if *columns as usize == FLOATS_PER_FRAME => Ok(*frames as usize),
        [_, columns] => Err(anyhow!(
            "Expected {} values per frame, but got {}",
            FLOATS_PER_FRAME,
            columns
        )),
        _ => Err(anyhow!(
            "Expected a 2D array (frames, inputs), but got shape: {:?}",
            shape
        )),
    }
}

#[derive(Debug, Clone)]
pub struct TraceMetadata {
    pub file_path: String,
    pub num_frames: usize,
    pub duration_seconds: f32,
}

impl InputTrace {
    pub fn from_frames(frames: &[TraceFrame]) -> Self {
        let data = frames
            .iter()
            .flat_map(|frame| {
                [
                    frame.input.pointer.x,
                    frame.input.pointer.y,
                    frame.input.scroll,
                    if frame.input.orbit_held { 1.0 } else { 0.0 },
                    frame.delta_time,
                ]
            })
            .collect();

        Self {
            file_path: String::new(),
            num_frames: frames.len(),
            data,
        }
    }

    /// Scripted session at 60 FPS: zoom in, drag to orbit, release and
    /// keep moving, then zoom back out.
    pub fn synthetic(num_frames: usize) -> Self {
        let quarter = (num_frames / 4).max(1);
        let mut pointer = Vec2::new(400.0, 300.0);
        let mut frames = Vec::with_capacity(num_frames);

        for i in 0..num_frames {
            let phase = i / quarter;
            let (scroll, orbit_held, motion) = match phase {
                0 => (-0.5, false, Vec2::ZERO),
                1 => (0.0, true, Vec2::new(6.0, 1.5)),
                2 => (0.0, false, Vec2::new(-4.0, 3.0)),
                _ => (0.25, false, Vec2::ZERO),
            };
            pointer += motion;
            frames.push(TraceFrame {
                input: FrameInput::new(pointer, scroll, orbit_held),
                delta_time: SYNTHETIC_DELTA_TIME,
            });
        }

        let mut trace = Self::from_frames(&frames);
        trace.file_path = "<synthetic>".to_string();
        trace
    }
}

/// Write eye positions as a (n, 3) f32 .npy file
pub fn save_eye_path<P: AsRef<Path>>(path: P, eyes: &[Vec3]) -> Result<()> {
    let flat: Vec<f32> = eyes.iter().flat_map(|eye| eye.to_array()).collect();
    let array = Array2::from_shape_vec((eyes.len(), 3), flat)?;
    ndarray_npy::write_npy(path.as_ref(), &array)?;
    log::info!(
        "Saved {} eye positions to {}",
        eyes.len(),
        path.as_ref().display()
    );
    Ok(())
}
