use rand::Rng;

use crate::foundation::core::{Canvas, Fps, FrameIndex, Position, Velocity};
use crate::foundation::error::{BuzzError, BuzzResult};

/// Random-walk parameters of the insect path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathParams {
    /// Distance from each edge within which the start position is never placed.
    pub start_margin: f64,
    /// Initial velocity components are drawn from `[-initial_speed, initial_speed]`.
    pub initial_speed: f64,
    /// Per-frame velocity perturbation is drawn from `[-jitter, jitter]` per axis.
    pub jitter: f64,
    /// Per-axis velocity cap in pixels/frame.
    pub max_speed: f64,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            start_margin: 100.0,
            initial_speed: 2.0,
            jitter: 0.5,
            max_speed: 5.0,
        }
    }
}

impl PathParams {
    /// Check that every parameter is finite and non-negative.
    pub fn validate(&self) -> BuzzResult<()> {
        let fields = [
            ("start_margin", self.start_margin),
            ("initial_speed", self.initial_speed),
            ("jitter", self.jitter),
            ("max_speed", self.max_speed),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(BuzzError::configuration(format!(
                    "path parameter '{name}' must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Precomputed insect position for every frame of the clip.
///
/// Indexed by frame only; there is no interpolation between entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    positions: Vec<Position>,
}

impl Trajectory {
    /// Number of frames covered.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Return `true` when no frame has a position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position for `frame`, or `None` past the end of the trajectory.
    pub fn get(&self, frame: FrameIndex) -> Option<Position> {
        usize::try_from(frame.0)
            .ok()
            .and_then(|i| self.positions.get(i))
            .copied()
    }

    /// All positions in frame order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

/// Simulate the insect path for `duration_secs` at `fps` with default [`PathParams`].
///
/// Returns exactly `floor(duration_secs * fps)` positions.
pub fn simulate_path<R: Rng + ?Sized>(
    canvas: Canvas,
    duration_secs: f64,
    fps: Fps,
    rng: &mut R,
) -> BuzzResult<Trajectory> {
    let frames = fps.secs_to_frames_floor(duration_secs);
    simulate_frames(canvas, frames, &PathParams::default(), rng)
}

/// Simulate `frames` positions of a bounded velocity random walk.
///
/// The start position is uniform inside the canvas shrunk by `start_margin` on every side (the
/// margin is capped at half the canvas so tiny canvases still work). Each following frame adds
/// an independent uniform jitter to each velocity component, clamps the components to
/// `[-max_speed, max_speed]`, then moves and clamps the position into `[0, w] x [0, h]`.
/// Velocity is not reset at an edge, so the insect can press against it until the walk turns.
///
/// Negative or non-finite `params` are rejected before anything is drawn.
#[tracing::instrument(skip(params, rng))]
pub fn simulate_frames<R: Rng + ?Sized>(
    canvas: Canvas,
    frames: u64,
    params: &PathParams,
    rng: &mut R,
) -> BuzzResult<Trajectory> {
    params.validate()?;
    let mut positions = Vec::with_capacity(frames as usize);
    if frames == 0 {
        return Ok(Trajectory { positions });
    }

    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let mx = params.start_margin.clamp(0.0, w / 2.0);
    let my = params.start_margin.clamp(0.0, h / 2.0);

    let mut pos = Position::new(rng.random_range(mx..=w - mx), rng.random_range(my..=h - my));
    let mut vel = Velocity::new(
        symmetric(rng, params.initial_speed),
        symmetric(rng, params.initial_speed),
    );
    positions.push(pos);

    for _ in 1..frames {
        vel.x = (vel.x + symmetric(rng, params.jitter)).clamp(-params.max_speed, params.max_speed);
        vel.y = (vel.y + symmetric(rng, params.jitter)).clamp(-params.max_speed, params.max_speed);
        pos.x = (pos.x + vel.x).clamp(0.0, w);
        pos.y = (pos.y + vel.y).clamp(0.0, h);
        positions.push(pos);
    }

    tracing::debug!(frames, start_x = positions[0].x, start_y = positions[0].y, "path simulated");
    Ok(Trajectory { positions })
}

fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    if half_width <= 0.0 {
        return 0.0;
    }
    rng.random_range(-half_width..=half_width)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/path.rs"]
mod tests;
