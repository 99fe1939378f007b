/// Frame-coupled linear-interpolation easing.
///
/// Every follower closes a fixed fraction of the remaining distance to
/// its target once per frame: `position += (target - position) * rate`.
/// With rate in (0,1) this is pure exponential decay: after k frames
/// against a stationary target the residual is exactly `d0 * (1-rate)^k`,
/// and the follower can never overshoot.

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// A 2D coordinate. Value semantics only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A point that chases a target at a fixed per-frame rate.
#[derive(Debug, Clone)]
pub struct EasedPoint {
    pub position: Point,
    pub rate: f64,
}

impl EasedPoint {
    pub fn new(initial: Point, rate: f64) -> Self {
        Self {
            position: initial,
            rate,
        }
    }

    /// Advance one frame toward `target`, independently per axis.
    pub fn step(&mut self, target: Point) {
        self.position.x = lerp(self.position.x, target.x, self.rate);
        self.position.y = lerp(self.position.y, target.y, self.rate);
    }

    /// Instantaneous assignment, bypassing easing.
    pub fn snap(&mut self, p: Point) {
        self.position = p;
    }
}

/// A scalar follower with a held target (ring hover scale).
#[derive(Debug, Clone)]
pub struct EasedScalar {
    pub current: f64,
    pub target: f64,
    pub rate: f64,
}

impl EasedScalar {
    pub fn new(initial: f64, rate: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            rate,
        }
    }

    /// Advance one frame toward the held target.
    pub fn step(&mut self) {
        self.current = lerp(self.current, self.target, self.rate);
    }

    pub fn snap(&mut self, value: f64) {
        self.current = value;
        self.target = value;
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self, threshold: f64) -> bool {
        (self.current - self.target).abs() < threshold
    }
}
