use rand::RngCore;

use super::collision::collides;
use super::config::SimConfig;
use super::geometry::Point;
use super::snake::Snake;

/// The single apple on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub pos: Point,
}

impl Apple {
    /// Create an apple at a random position
    pub fn new<R: RngCore>(config: &SimConfig, rng: &mut R) -> Self {
        let mut apple = Self { pos: Point::default() };
        apple.relocate(config, rng);
        apple
    }

    pub fn at(pos: Point) -> Self {
        Self { pos }
    }

    /// Move to a random position at least one radius away from every edge
    pub fn relocate<R: RngCore>(&mut self, config: &SimConfig, rng: &mut R) {
        let r = config.apple_radius;
        let span_x = (config.width - r * 2) as u32;
        let span_y = (config.height - r * 2) as u32;
        self.pos = Point::new(
            (rng.next_u32() % span_x) as i32 + r,
            (rng.next_u32() % span_y) as i32 + r,
        );
    }

    /// Relocate until the apple is clear of `snake`, returning how many rolls it took.
    ///
    /// There is no retry cap. On a playfield that is large compared to the
    /// body this ends quickly, but a snake covering most of the field can make
    /// it spin for a long time.
    pub fn relocate_until_clear<R: RngCore>(
        &mut self,
        snake: &Snake,
        config: &SimConfig,
        rng: &mut R,
    ) -> u32 {
        let mut rolls = 1;
        self.relocate(config, rng);
        while collides(snake, self.pos, config) {
            self.relocate(config, rng);
            rolls += 1;
        }
        if rolls > 1 {
            tracing::debug!(rolls, x = self.pos.x, y = self.pos.y, "apple re-rolled off snake body");
        }
        rolls
    }
}
