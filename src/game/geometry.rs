//! Integer geometry on a wrapping (toroidal) playfield
//!
//! Stored positions always stay wrapped into the playfield. Geometry that spans
//! a seam (segment bounding boxes, render lines) unwraps the two endpoints
//! transiently with [`denormalize`] instead of keeping unbounded coordinates.

/// A position on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Project `length` units along `angle` (radians, counter-clockwise).
    ///
    /// Screen Y grows downward, so the sine component is subtracted. Both
    /// offsets are truncated toward zero before being added. The result is
    /// not wrapped.
    pub fn offset_polar(&self, angle: f32, length: f32) -> Self {
        let dx = angle.cos() * length;
        let dy = angle.sin() * length;
        self.moved_by(dx as i32, -(dy as i32))
    }

    pub fn component_min(&self, other: Point) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn component_max(&self, other: Point) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Euclidean distance on raw coordinates (no seam handling)
    pub fn distance(&self, other: Point) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        dx.hypot(dy)
    }
}

/// Wrap `coord` into `[0, bound)` with a single correction.
///
/// The caller guarantees `coord` is at most one bound-width out of range.
pub fn normalize(coord: i32, bound: i32) -> i32 {
    if coord >= bound {
        coord - bound
    } else if coord < 0 {
        coord + bound
    } else {
        coord
    }
}

/// Unwrap two coordinates that form a continuous line across a seam.
///
/// A jump larger than `threshold` is taken to be wrap-induced, and the lower
/// endpoint is shifted up by `bound`. At most one endpoint moves.
pub fn denormalize(start: i32, end: i32, bound: i32, threshold: i32) -> (i32, i32) {
    if start - end > threshold {
        (start, end + bound)
    } else if end - start > threshold {
        (start + bound, end)
    } else {
        (start, end)
    }
}

/// Dimensions of the wrapping surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    /// Largest coordinate jump still treated as contiguous
    pub wrap_threshold: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32, wrap_threshold: i32) -> Self {
        Self {
            width,
            height,
            wrap_threshold,
        }
    }

    pub fn wrap(&self, p: Point) -> Point {
        Point::new(normalize(p.x, self.width), normalize(p.y, self.height))
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Unwrap both axes of a segment so it can be treated as a straight line
    pub fn unwrap_segment(&self, start: Point, end: Point) -> (Point, Point) {
        let (sx, ex) = denormalize(start.x, end.x, self.width, self.wrap_threshold);
        let (sy, ey) = denormalize(start.y, end.y, self.height, self.wrap_threshold);
        (Point::new(sx, sy), Point::new(ex, ey))
    }
}

/// Axis-aligned bounding box with inclusive edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    /// Box spanning `start`..`end`, grown by `margin` on every side
    pub fn around(start: Point, end: Point, margin: i32) -> Self {
        Self {
            min: start.component_min(end).moved_by(-margin, -margin),
            max: start.component_max(end).moved_by(margin, margin),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        !(p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y)
    }
}
