use std::f32::consts::{PI, TAU};

/// One frame of controller input for a single player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlInput {
    /// Requested heading as a vector with Y pointing up
    pub heading: Option<(f32, f32)>,
    /// Whether steering is engaged this frame
    pub pressed: bool,
}

impl ControlInput {
    pub fn steer(x: f32, y: f32) -> Self {
        Self {
            heading: Some((x, y)),
            pressed: true,
        }
    }

    /// Azimuth of the heading vector in `[0, 2π)`, or `None` for a degenerate vector
    pub fn target_angle(&self) -> Option<f32> {
        let (x, y) = self.heading?;
        if !x.is_finite() || !y.is_finite() || (x == 0.0 && y == 0.0) {
            return None;
        }
        let angle = y.atan2(x);
        Some(if angle < 0.0 { angle + TAU } else { angle })
    }
}

/// Rotate `dir` toward `target` by at most `max_step` radians.
///
/// Turns take the shortest way around. The step is clamped first and the
/// result is wrapped into `[0, 2π)` afterwards. A NaN difference leaves
/// `dir` untouched.
pub fn steer(dir: f32, target: f32, max_step: f32) -> f32 {
    let mut diff = target - dir;
    if diff.is_nan() {
        return dir;
    }
    if diff > PI {
        diff = -max_step;
    } else if diff < -PI {
        diff = max_step;
    }

    let mut dir = dir + diff.clamp(-max_step, max_step);
    if dir < 0.0 {
        dir += TAU;
    }
    if dir >= TAU {
        dir -= TAU;
    }
    dir
}
