use serde::{Deserialize, Serialize};

use crate::draw::DrawConfig;
use crate::traits::{AttractorModel, Scalar};
use crate::vector::Vec3;

/// The Lorentz system: dx = a(y − x), dy = x(b − z) − y, dz = xy − cz.
#[derive(Debug, Clone)]
pub struct Lorentz<T: Scalar> {
    pub title: String,
    pub start: Vec3<T>,
    pub a: T,
    pub b: T,
    pub c: T,
    pub config: DrawConfig,
}

impl<T: Scalar> Lorentz<T> {
    pub const DEFAULT_TITLE: &'static str = "Lorentz Attractor";
    pub const DEFAULT_A: f64 = 10.0;
    pub const DEFAULT_B: f64 = 28.0;
    pub const DEFAULT_C: f64 = 8.0 / 3.0;

    pub fn new() -> Self {
        Self::with_params(
            Self::DEFAULT_TITLE,
            Vec3::new(T::from_f64(0.01).unwrap(), T::zero(), T::zero()),
            T::from_f64(Self::DEFAULT_A).unwrap(),
            T::from_f64(Self::DEFAULT_B).unwrap(),
            T::from_f64(Self::DEFAULT_C).unwrap(),
        )
    }

    pub fn with_params(title: impl Into<String>, start: Vec3<T>, a: T, b: T, c: T) -> Self {
        Self {
            title: title.into(),
            start,
            a,
            b,
            c,
            config: DrawConfig::hue_cycle(),
        }
    }
}

impl<T: Scalar> Default for Lorentz<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> AttractorModel<T> for Lorentz<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn start(&self) -> Vec3<T> {
        self.start
    }

    fn draw_config(&self) -> &DrawConfig {
        &self.config
    }

    fn derivative(&self, v: Vec3<T>) -> Vec3<T> {
        let dx = self.a * (v.y - v.x);
        let dy = v.x * (self.b - v.z) - v.y;
        let dz = v.x * v.y - self.c * v.z;
        Vec3::new(dx, dy, dz)
    }
}

/// A nonlinear reworking of the Lorentz system expressed in terms of
/// x² − y², x² + y² and the 2D radius √(x² + y²).
///
/// Shares only the (a, b, c) parameter shape with [`Lorentz`]; the vector
/// field is unrelated. The radial terms divide by the 2D radius, so the
/// field is undefined on the z-axis (x = y = 0): evaluation there yields
/// NaN components, matching IEEE division, and is deliberately left
/// unguarded. The default start sits well away from the axis and its
/// trajectory never reaches it.
#[derive(Debug, Clone)]
pub struct ModifiedLorentz<T: Scalar> {
    pub title: String,
    pub start: Vec3<T>,
    pub a: T,
    pub b: T,
    pub c: T,
    pub config: DrawConfig,
}

impl<T: Scalar> ModifiedLorentz<T> {
    pub const DEFAULT_TITLE: &'static str = "Modified Lorentz Attractor";
    pub const DEFAULT_A: f64 = 10.0;
    pub const DEFAULT_B: f64 = 8.0 / 3.0;
    pub const DEFAULT_C: f64 = 137.0 / 5.0;

    pub fn new() -> Self {
        Self::with_params(
            Self::DEFAULT_TITLE,
            Vec3::new(
                T::from_f64(-8.0).unwrap(),
                T::from_f64(4.0).unwrap(),
                T::from_f64(10.0).unwrap(),
            ),
            T::from_f64(Self::DEFAULT_A).unwrap(),
            T::from_f64(Self::DEFAULT_B).unwrap(),
            T::from_f64(Self::DEFAULT_C).unwrap(),
        )
    }

    pub fn with_params(title: impl Into<String>, start: Vec3<T>, a: T, b: T, c: T) -> Self {
        Self {
            title: title.into(),
            start,
            a,
            b,
            c,
            config: DrawConfig::hue_cycle(),
        }
    }
}

impl<T: Scalar> Default for ModifiedLorentz<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> AttractorModel<T> for ModifiedLorentz<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn start(&self) -> Vec3<T> {
        self.start
    }

    fn draw_config(&self) -> &DrawConfig {
        &self.config
    }

    fn derivative(&self, v: Vec3<T>) -> Vec3<T> {
        let one = T::one();
        let two = T::from_f64(2.0).unwrap();
        let three = T::from_f64(3.0).unwrap();

        let diff = v.x * v.x - v.y * v.y;
        let x2y2 = v.x * v.x + v.y * v.y;
        let mag = x2y2.sqrt(); // zero on the z-axis; divisions below are unguarded

        let dx = (-(one + self.a) * v.x + self.a - self.c + v.z * v.y) / three
            + ((one - self.a) * diff + two * (self.a + self.c - v.z) * v.x * v.y) / (three * mag);
        let dy = ((self.c - self.a - v.z) * v.x - (self.a + one) * v.y) / three
            + (two * (self.a - one) * v.x * v.y + (self.a + self.c - v.z) * diff) / (three * mag);
        let dz = (three * v.x * v.x - v.y * v.y) * (v.y / two) - self.b * v.z;

        Vec3::new(dx, dy, dz)
    }
}

/// The Rössler system: dx = −(y + z), dy = x + ay, dz = b + z(x − c).
#[derive(Debug, Clone)]
pub struct Rossler<T: Scalar> {
    pub title: String,
    pub start: Vec3<T>,
    pub a: T,
    pub b: T,
    pub c: T,
    pub config: DrawConfig,
}

impl<T: Scalar> Rossler<T> {
    pub const DEFAULT_TITLE: &'static str = "Rossler Attractor";
    pub const DEFAULT_A: f64 = 0.2;
    pub const DEFAULT_B: f64 = 0.2;
    pub const DEFAULT_C: f64 = 5.7;

    pub fn new() -> Self {
        Self::with_params(
            Self::DEFAULT_TITLE,
            Vec3::new(T::one(), T::from_f64(2.0).unwrap(), T::from_f64(3.0).unwrap()),
            T::from_f64(Self::DEFAULT_A).unwrap(),
            T::from_f64(Self::DEFAULT_B).unwrap(),
            T::from_f64(Self::DEFAULT_C).unwrap(),
        )
    }

    pub fn with_params(title: impl Into<String>, start: Vec3<T>, a: T, b: T, c: T) -> Self {
        Self {
            title: title.into(),
            start,
            a,
            b,
            c,
            config: DrawConfig::hue_cycle(),
        }
    }
}

impl<T: Scalar> Default for Rossler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> AttractorModel<T> for Rossler<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn start(&self) -> Vec3<T> {
        self.start
    }

    fn draw_config(&self) -> &DrawConfig {
        &self.config
    }

    fn derivative(&self, v: Vec3<T>) -> Vec3<T> {
        let dx = -(v.y + v.z);
        let dy = v.x + self.a * v.y;
        let dz = self.b + v.z * (v.x - self.c);
        Vec3::new(dx, dy, dz)
    }
}

/// Chua's circuit with a smooth sine nonlinearity:
/// dx = α(y − h(x)), dy = x − y + z, dz = −βy, where
/// h(x) = −b·sin(πx / 2a + d).
///
/// `c` belongs to the reference parameter set but does not enter the
/// vector field.
#[derive(Debug, Clone)]
pub struct Chua<T: Scalar> {
    pub title: String,
    pub start: Vec3<T>,
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub alpha: T,
    pub beta: T,
    pub config: DrawConfig,
}

impl<T: Scalar> Chua<T> {
    pub const DEFAULT_TITLE: &'static str = "Chua Attractor";
    pub const DEFAULT_A: f64 = 1.3;
    pub const DEFAULT_B: f64 = 0.11;
    pub const DEFAULT_C: f64 = 7.0;
    pub const DEFAULT_D: f64 = 0.0;
    pub const DEFAULT_ALPHA: f64 = 10.82;
    pub const DEFAULT_BETA: f64 = 14.286;

    pub fn new() -> Self {
        Self::with_params(
            Self::DEFAULT_TITLE,
            Vec3::new(T::one(), T::one(), T::zero()),
            T::from_f64(Self::DEFAULT_A).unwrap(),
            T::from_f64(Self::DEFAULT_B).unwrap(),
            T::from_f64(Self::DEFAULT_C).unwrap(),
            T::from_f64(Self::DEFAULT_D).unwrap(),
            T::from_f64(Self::DEFAULT_ALPHA).unwrap(),
            T::from_f64(Self::DEFAULT_BETA).unwrap(),
        )
    }

    pub fn with_params(
        title: impl Into<String>,
        start: Vec3<T>,
        a: T,
        b: T,
        c: T,
        d: T,
        alpha: T,
        beta: T,
    ) -> Self {
        Self {
            title: title.into(),
            start,
            a,
            b,
            c,
            d,
            alpha,
            beta,
            config: DrawConfig::hue_cycle(),
        }
    }

    fn h(&self, x: T) -> T {
        let pi = T::from_f64(std::f64::consts::PI).unwrap();
        let two = T::from_f64(2.0).unwrap();
        -self.b * (pi * x / (two * self.a) + self.d).sin()
    }
}

impl<T: Scalar> Default for Chua<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> AttractorModel<T> for Chua<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn start(&self) -> Vec3<T> {
        self.start
    }

    fn draw_config(&self) -> &DrawConfig {
        &self.config
    }

    fn derivative(&self, v: Vec3<T>) -> Vec3<T> {
        let h = self.h(v.x);
        let dx = self.alpha * (v.y - h);
        let dy = v.x - v.y + v.z;
        let dz = -self.beta * v.y;
        Vec3::new(dx, dy, dz)
    }
}

/// The Lu–Chen system: dx = a(y − x), dy = x(1 − z) + cy + u, dz = xy − bz.
#[derive(Debug, Clone)]
pub struct LuChen<T: Scalar> {
    pub title: String,
    pub start: Vec3<T>,
    pub a: T,
    pub b: T,
    pub c: T,
    pub u: T,
    pub config: DrawConfig,
}

impl<T: Scalar> LuChen<T> {
    pub const DEFAULT_TITLE: &'static str = "Lu Chen Attractor";
    pub const DEFAULT_A: f64 = 36.0;
    pub const DEFAULT_B: f64 = 3.0;
    pub const DEFAULT_C: f64 = 20.0;
    pub const DEFAULT_U: f64 = -15.15;

    pub fn new() -> Self {
        Self::with_params(
            Self::DEFAULT_TITLE,
            Vec3::new(
                T::from_f64(0.1).unwrap(),
                T::from_f64(0.3).unwrap(),
                T::from_f64(-0.6).unwrap(),
            ),
            T::from_f64(Self::DEFAULT_A).unwrap(),
            T::from_f64(Self::DEFAULT_B).unwrap(),
            T::from_f64(Self::DEFAULT_C).unwrap(),
            T::from_f64(Self::DEFAULT_U).unwrap(),
        )
    }

    pub fn with_params(title: impl Into<String>, start: Vec3<T>, a: T, b: T, c: T, u: T) -> Self {
        Self {
            title: title.into(),
            start,
            a,
            b,
            c,
            u,
            config: DrawConfig::hue_cycle(),
        }
    }
}

impl<T: Scalar> Default for LuChen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> AttractorModel<T> for LuChen<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn start(&self) -> Vec3<T> {
        self.start
    }

    fn draw_config(&self) -> &DrawConfig {
        &self.config
    }

    fn derivative(&self, v: Vec3<T>) -> Vec3<T> {
        let dx = self.a * (v.y - v.x);
        let dy = v.x * (T::one() - v.z) + self.c * v.y + self.u;
        let dz = v.x * v.y - self.b * v.z;
        Vec3::new(dx, dy, dz)
    }
}

/// Selects one of the built-in chaotic systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttractorKind {
    Lorentz,
    ModifiedLorentz,
    Rossler,
    Chua,
    LuChen,
}

impl AttractorKind {
    pub const ALL: [AttractorKind; 5] = [
        AttractorKind::Lorentz,
        AttractorKind::ModifiedLorentz,
        AttractorKind::Rossler,
        AttractorKind::Chua,
        AttractorKind::LuChen,
    ];

    /// Builds the model with its reference parameters.
    pub fn build<T: Scalar>(self) -> Attractor<T> {
        match self {
            AttractorKind::Lorentz => Attractor::Lorentz(Lorentz::new()),
            AttractorKind::ModifiedLorentz => Attractor::ModifiedLorentz(ModifiedLorentz::new()),
            AttractorKind::Rossler => Attractor::Rossler(Rossler::new()),
            AttractorKind::Chua => Attractor::Chua(Chua::new()),
            AttractorKind::LuChen => Attractor::LuChen(LuChen::new()),
        }
    }
}

/// The closed set of attractor models.
///
/// Dispatches the shared model contract over the five systems by variant,
/// so the simulation driver holds one concrete type it can exchange
/// wholesale on a model switch.
#[derive(Debug, Clone)]
pub enum Attractor<T: Scalar> {
    Lorentz(Lorentz<T>),
    ModifiedLorentz(ModifiedLorentz<T>),
    Rossler(Rossler<T>),
    Chua(Chua<T>),
    LuChen(LuChen<T>),
}

impl<T: Scalar> Attractor<T> {
    pub fn kind(&self) -> AttractorKind {
        match self {
            Attractor::Lorentz(_) => AttractorKind::Lorentz,
            Attractor::ModifiedLorentz(_) => AttractorKind::ModifiedLorentz,
            Attractor::Rossler(_) => AttractorKind::Rossler,
            Attractor::Chua(_) => AttractorKind::Chua,
            Attractor::LuChen(_) => AttractorKind::LuChen,
        }
    }
}

impl<T: Scalar> AttractorModel<T> for Attractor<T> {
    fn title(&self) -> &str {
        match self {
            Attractor::Lorentz(m) => m.title(),
            Attractor::ModifiedLorentz(m) => m.title(),
            Attractor::Rossler(m) => m.title(),
            Attractor::Chua(m) => m.title(),
            Attractor::LuChen(m) => m.title(),
        }
    }

    fn start(&self) -> Vec3<T> {
        match self {
            Attractor::Lorentz(m) => m.start(),
            Attractor::ModifiedLorentz(m) => m.start(),
            Attractor::Rossler(m) => m.start(),
            Attractor::Chua(m) => m.start(),
            Attractor::LuChen(m) => m.start(),
        }
    }

    fn draw_config(&self) -> &DrawConfig {
        match self {
            Attractor::Lorentz(m) => m.draw_config(),
            Attractor::ModifiedLorentz(m) => m.draw_config(),
            Attractor::Rossler(m) => m.draw_config(),
            Attractor::Chua(m) => m.draw_config(),
            Attractor::LuChen(m) => m.draw_config(),
        }
    }

    fn derivative(&self, v: Vec3<T>) -> Vec3<T> {
        match self {
            Attractor::Lorentz(m) => m.derivative(v),
            Attractor::ModifiedLorentz(m) => m.derivative(v),
            Attractor::Rossler(m) => m.derivative(v),
            Attractor::Chua(m) => m.derivative(v),
            Attractor::LuChen(m) => m.derivative(v),
        }
    }
}
