use crate::Show;

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// A point in the drawing plane. Coordinates follow the canvas convention, meaning
/// that `x` grows to the right and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl Point {
    /// Creates a point from its cartesian coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the point that lies at distance `radius` from `origin` in the direction
    /// given by `angle` (in radians).
    pub fn polar(origin: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: origin.x + radius * angle.cos(),
            y: origin.y + radius * angle.sin(),
        }
    }

    /// Moves `self` by `distance` in the direction given by `angle` (in radians).
    /// A negative distance moves in the opposite direction.
    pub fn offset(self, distance: f64, angle: f64) -> Self {
        Self::polar(self, distance, angle)
    }

    /// Moves `self` upwards (towards smaller `y`) by `dy`.
    pub fn raised(self, dy: f64) -> Self {
        Self::new(self.x, self.y - dy)
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Computes the direction (in radians) from `self` towards `other`.
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Euclidean distance between `self` and `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

impl Show for Point {
    fn show(&self) -> String {
        format!("({:.1}, {:.1})", self.x, self.y)
    }
}
