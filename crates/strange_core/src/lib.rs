//! The `strange_core` crate is the headless simulation engine behind the
//! Strange attractor visualizer. It advances continuous-time chaotic
//! systems by explicit Euler integration and keeps a bounded trajectory
//! history, exposing plain data (points, a bounding box, draw parameters)
//! for an external rendering layer to paint.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `AttractorModel`
//!   (the per-system contract: title, start, draw config, derivative).
//! - **Vector**: a small three-component vector type for trajectory math.
//! - **Attractors**: the closed set of built-in systems (Lorentz,
//!   modified Lorentz, Rössler, Chua, Lu–Chen).
//! - **Trajectory**: a fixed-capacity sliding window with running extrema.
//! - **Simulation**: the driver turning wall-clock ticks into points.

pub mod attractors;
pub mod draw;
pub mod simulation;
pub mod traits;
pub mod trajectory;
pub mod vector;
