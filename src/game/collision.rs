use rand::RngCore;

use super::apple::Apple;
use super::config::SimConfig;
use super::geometry::{BBox, Point};
use super::score::Score;
use super::snake::Snake;

/// Check if a point lies on the snake's body.
///
/// The head-to-neck segment is skipped so the mouth never hits its own neck.
/// Each remaining segment is unwrapped across seams and tested as a bounding
/// box grown by half the body width, edges included.
pub fn collides(snake: &Snake, p: Point, config: &SimConfig) -> bool {
    let field = config.playfield();
    let margin = config.body_margin();
    snake
        .segments()
        .skip(1)
        .zip(snake.segments().skip(2))
        .any(|(&start, &end)| {
            let (start, end) = field.unwrap_segment(start, end);
            BBox::around(start, end, margin).contains(p)
        })
}

/// Eat the apple if the mouth is close enough, returning whether it was eaten.
///
/// Distance is measured on raw wrapped coordinates. The apple never spawns
/// within a radius of an edge, so a seam cannot sit between mouth and apple
/// unless the mouth is itself crossing one.
pub fn try_eat<R: RngCore>(
    snake: &mut Snake,
    apple: &mut Apple,
    score: &mut Score,
    config: &SimConfig,
    rng: &mut R,
) -> bool {
    if snake.mouth().distance(apple.pos) > config.eat_distance() {
        return false;
    }
    snake.start_eating();
    apple.relocate_until_clear(snake, config, rng);
    score.reward();
    true
}
