use std::collections::VecDeque;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::traits::Scalar;
use crate::vector::Vec3;

/// Axis-aligned bounding box kept as running per-axis extrema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<T: Scalar> {
    pub min: Vec3<T>,
    pub max: Vec3<T>,
}

impl<T: Scalar> BoundingBox<T> {
    /// The all-zero box reported before any point has been observed.
    pub fn zero() -> Self {
        Self {
            min: Vec3::zero(),
            max: Vec3::zero(),
        }
    }

    /// The degenerate box around a single point (min == max).
    pub fn around(point: Vec3<T>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to contain `point`. Never shrinks.
    pub fn expand(&mut self, point: Vec3<T>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    pub fn contains(&self, point: Vec3<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Midpoint of the box, the natural centering origin for a renderer.
    pub fn center(&self) -> Vec3<T> {
        (self.min + self.max) * T::from_f64(0.5).unwrap()
    }
}

/// Fixed-capacity sliding window over the most recent trajectory points,
/// with an incrementally maintained bounding box.
///
/// The box expands on insertion only and is never recomputed on eviction:
/// it tracks the all-time extrema since the last reset, so the framing a
/// renderer derives from it stays put instead of jittering as an old
/// extreme leaves the window.
#[derive(Debug, Clone)]
pub struct TrajectoryBuffer<T: Scalar> {
    points: VecDeque<Vec3<T>>,
    capacity: usize,
    bounds: Option<BoundingBox<T>>,
}

impl<T: Scalar> TrajectoryBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            bail!("Trajectory capacity must be at least 1.");
        }
        Ok(Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            bounds: None,
        })
    }

    /// Appends a point, evicting the oldest one beyond capacity.
    pub fn push(&mut self, point: Vec3<T>) {
        match &mut self.bounds {
            Some(bounds) => bounds.expand(point),
            None => self.bounds = Some(BoundingBox::around(point)),
        }

        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// The retained points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &Vec3<T>> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&Vec3<T>> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The running extrema box; all-zero while no point has been observed,
    /// degenerate (min == max) after the first.
    pub fn bounding_box(&self) -> BoundingBox<T> {
        self.bounds.unwrap_or_else(BoundingBox::zero)
    }

    /// Drops all points and forgets the extrema; the next push re-seeds
    /// the box at min == max.
    pub fn reset(&mut self) {
        self.points.clear();
        self.bounds = None;
    }
}
