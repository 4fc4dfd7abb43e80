use anyhow::Result;

use crate::attractors::{Attractor, AttractorKind};
use crate::draw::DrawConfig;
use crate::traits::{AttractorModel, Scalar};
use crate::trajectory::{BoundingBox, TrajectoryBuffer};
use crate::vector::Vec3;

pub const SPEED_FACTOR_MIN: f64 = 0.1;
pub const SPEED_FACTOR_MAX: f64 = 10.0;
pub const SPEED_FACTOR_DEFAULT: f64 = 1.0;

/// Increment applied per speed nudge (one key-repeat of the host UI).
const SPEED_FACTOR_UNIT: f64 = 0.01;

/// Ties wall-clock time, the user speed multiplier and the active model
/// together, producing exactly one trajectory point per tick.
///
/// The driver is either idle (no tick recorded since construction, a reset
/// or a model switch; the next tick emits the model's start point without
/// integrating) or running (the next tick advances the last point by one
/// Euler step scaled to the elapsed wall-clock time).
///
/// Single-threaded by design: no internal synchronization, no I/O. A
/// multi-threaded host must confine the driver to one thread or wrap it in
/// one external lock.
pub struct Simulation<T: Scalar> {
    attractor: Attractor<T>,
    buffer: TrajectoryBuffer<T>,
    last_tick_ms: Option<f64>,
    speed_factor: f64,
}

impl<T: Scalar> Simulation<T> {
    pub fn new(attractor: Attractor<T>) -> Result<Self> {
        let config = attractor.draw_config();
        config.validate()?;
        let buffer = TrajectoryBuffer::new(config.max_points)?;
        Ok(Self {
            attractor,
            buffer,
            last_tick_ms: None,
            speed_factor: SPEED_FACTOR_DEFAULT,
        })
    }

    pub fn of_kind(kind: AttractorKind) -> Result<Self> {
        Self::new(kind.build())
    }

    /// Advances the simulation by one step and returns the new point,
    /// which is also stored in the buffer.
    ///
    /// `now_ms` is the caller's wall clock in milliseconds; only the
    /// difference between consecutive ticks matters. A clock that jumps
    /// backwards is treated as zero elapsed time.
    pub fn tick(&mut self, now_ms: f64) -> Vec3<T> {
        let next = match (self.buffer.last().copied(), self.last_tick_ms) {
            (Some(last), Some(prev_ms)) => {
                let elapsed_ms = (now_ms - prev_ms).max(0.0);
                let dt = self.attractor.draw_config().step_per_ms * elapsed_ms * self.speed_factor;
                let point = self
                    .attractor
                    .next_point(last, T::from_f64(dt).unwrap());
                self.buffer.push(point);
                point
            }
            (Some(seeded), None) => {
                // A model switch already seeded the start point; the first
                // tick only establishes the time base.
                seeded
            }
            (None, _) => {
                let start = self.attractor.start();
                self.buffer.push(start);
                start
            }
        };
        self.last_tick_ms = Some(now_ms);
        next
    }

    /// Swaps the active model wholesale. The buffer is rebuilt at the new
    /// model's capacity and seeded with its start point, and the driver
    /// returns to idle.
    pub fn set_attractor(&mut self, attractor: Attractor<T>) -> Result<()> {
        let config = attractor.draw_config();
        config.validate()?;
        let mut buffer = TrajectoryBuffer::new(config.max_points)?;
        buffer.push(attractor.start());
        self.attractor = attractor;
        self.buffer = buffer;
        self.last_tick_ms = None;
        Ok(())
    }

    /// Switches to a built-in model with its reference parameters.
    /// Selecting the kind that is already active restarts its trajectory.
    pub fn set_kind(&mut self, kind: AttractorKind) -> Result<()> {
        self.set_attractor(kind.build())
    }

    /// Restarts the active model's trajectory: clears the buffer and
    /// returns to idle.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.last_tick_ms = None;
    }

    /// Clamps to [`SPEED_FACTOR_MIN`], [`SPEED_FACTOR_MAX`]. Setting the
    /// value already in effect is a no-op. Already-computed points are
    /// unaffected.
    pub fn set_speed_factor(&mut self, factor: f64) {
        let clamped = factor.clamp(SPEED_FACTOR_MIN, SPEED_FACTOR_MAX);
        if clamped == self.speed_factor {
            return;
        }
        self.speed_factor = clamped;
    }

    /// One unit step on the speed factor, up or down.
    pub fn nudge_speed_factor(&mut self, increase: bool) {
        let delta = if increase {
            SPEED_FACTOR_UNIT
        } else {
            -SPEED_FACTOR_UNIT
        };
        self.set_speed_factor(self.speed_factor + delta);
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    pub fn is_idle(&self) -> bool {
        self.last_tick_ms.is_none()
    }

    pub fn attractor(&self) -> &Attractor<T> {
        &self.attractor
    }

    pub fn kind(&self) -> AttractorKind {
        self.attractor.kind()
    }

    pub fn title(&self) -> &str {
        self.attractor.title()
    }

    pub fn draw_config(&self) -> &DrawConfig {
        self.attractor.draw_config()
    }

    pub fn buffer(&self) -> &TrajectoryBuffer<T> {
        &self.buffer
    }

    /// The retained trajectory, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &Vec3<T>> {
        self.buffer.points()
    }

    pub fn bounding_box(&self) -> BoundingBox<T> {
        self.buffer.bounding_box()
    }
}
