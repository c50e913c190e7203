use rand::RngCore;
use std::collections::VecDeque;

use super::config::SimConfig;
use super::direction::{ControlInput, steer};
use super::geometry::Point;

/// Index of a connected player, in registration order
pub type PlayerId = usize;

/// Blink overlay is shown while the counter is below this
const BLINK_VISIBLE: u32 = 20;
/// How far the eye sits from the mouth, toward the apple
const EYE_OFFSET: f32 = 3.0;

/// What the snake is doing between two shifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnakeState {
    /// Plain movement, the tail follows the head
    #[default]
    Moving,
    /// An apple was eaten this cycle; the next shift arms growth
    Eating,
    /// The next shift lengthens the body instead of moving the tail
    Growing,
}

/// A snake on the wrapping playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    player: PlayerId,
    /// Segment positions, with head at index 0
    body: VecDeque<Point>,
    /// Movement direction in radians, `[0, 2π)`
    dir: f32,
    mouth: Point,
    eye: Point,
    blink_counter: u32,
    blink_max: u32,
    state: SnakeState,
}

impl Snake {
    /// Spawn a horizontal two-segment snake, offset vertically by player index
    pub fn new(player: PlayerId, config: &SimConfig) -> Self {
        let shift = 10 + config.snake_width + player as i32 * 20;
        let field = config.playfield();
        let head = field.wrap(Point::new(config.segment_len * 2, shift % config.height));
        let tail = field.wrap(Point::new(config.segment_len, shift % config.height));
        Self::from_segments(player, [head, tail], 0.0)
    }

    /// Build a snake from explicit segment positions, head first.
    ///
    /// Panics if fewer than two segments are given.
    pub fn from_segments(player: PlayerId, segments: impl IntoIterator<Item = Point>, dir: f32) -> Self {
        let body: VecDeque<Point> = segments.into_iter().collect();
        assert!(body.len() >= 2, "a snake needs at least two segments");
        let head = body[0];
        Self {
            player,
            body,
            dir,
            mouth: head,
            eye: head,
            blink_counter: 0,
            blink_max: 0,
            state: SnakeState::Moving,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Get the head position
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Segment positions from head to tail
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Point> + '_ {
        self.body.iter()
    }

    /// Number of segment positions
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept alongside `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn dir(&self) -> f32 {
        self.dir
    }

    pub fn mouth(&self) -> Point {
        self.mouth
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    pub fn state(&self) -> SnakeState {
        self.state
    }

    pub fn is_blinking(&self) -> bool {
        self.blink_counter < BLINK_VISIBLE
    }

    pub(crate) fn start_eating(&mut self) {
        self.state = SnakeState::Eating;
    }

    /// Advance one frame: steer, shift on cycle boundaries, then move mouth and eye
    pub fn update<R: RngCore>(
        &mut self,
        frame: u64,
        input: Option<&ControlInput>,
        apple: Point,
        config: &SimConfig,
        rng: &mut R,
    ) {
        let frame_in_cycle = (frame % u64::from(config.period)) as u32;
        if let Some(input) = input.filter(|input| input.pressed) {
            self.set_dir(input, config.max_turn);
        }
        if frame_in_cycle == 0 {
            self.shift(config);
        }
        self.update_mouth(frame_in_cycle, config);
        self.update_eye(apple, rng);
    }

    fn set_dir(&mut self, input: &ControlInput, max_turn: f32) {
        if let Some(target) = input.target_angle() {
            self.dir = steer(self.dir, target, max_turn);
        }
    }

    /// Move the body one segment length along the current direction.
    ///
    /// A growing snake gets a brand-new head segment. Otherwise every segment
    /// takes its predecessor's position and the new point becomes the head.
    pub fn shift(&mut self, config: &SimConfig) {
        let next = config
            .playfield()
            .wrap(self.head().offset_polar(self.dir, config.segment_len as f32));

        match self.state {
            SnakeState::Growing => {
                self.body.push_front(next);
                self.state = SnakeState::Moving;
                return;
            }
            SnakeState::Eating => self.state = SnakeState::Growing,
            SnakeState::Moving => {}
        }

        let mut carry = next;
        for segment in self.body.iter_mut() {
            std::mem::swap(segment, &mut carry);
        }
    }

    fn update_mouth(&mut self, frame_in_cycle: u32, config: &SimConfig) {
        let reach = config.segment_len as f32 * frame_in_cycle as f32 / config.period as f32;
        self.mouth = config
            .playfield()
            .wrap(self.head().offset_polar(self.dir, reach));
    }

    fn update_eye<R: RngCore>(&mut self, apple: Point, rng: &mut R) {
        let look_x = (apple.x - self.mouth.x) as f32;
        let look_y = (apple.y - self.mouth.y) as f32;
        let look_len = look_x.hypot(look_y);
        self.eye = if look_len > 0.0 {
            self.mouth.moved_by(
                (look_x * EYE_OFFSET / look_len) as i32,
                (look_y * EYE_OFFSET / look_len) as i32,
            )
        } else {
            self.mouth
        };

        self.blink_counter += rng.next_u32() % 5;
        if self.blink_counter > self.blink_max {
            self.blink_counter = 0;
            self.blink_max = 100 + rng.next_u32() % 100;
        }
    }

    /// Body lines for drawing, unwrapped so each one is contiguous.
    ///
    /// The last line shrinks over the cycle as the tail leaves its spot,
    /// unless the snake is growing and the tail stays put.
    pub fn body_lines(&self, frame: u64, config: &SimConfig) -> Vec<(Point, Point)> {
        let field = config.playfield();
        let period = config.period as i32;
        let frame_in_cycle = (frame % u64::from(config.period)) as i32;
        let last = self.body.len() - 2;

        self.body
            .iter()
            .zip(self.body.iter().skip(1))
            .enumerate()
            .map(|(i, (&start, &end))| {
                let (start, mut end) = field.unwrap_segment(start, end);
                if i == last && self.state != SnakeState::Growing {
                    end.x = start.x + (end.x - start.x) * (period - frame_in_cycle) / period;
                    end.y = start.y + (end.y - start.y) * (period - frame_in_cycle) / period;
                }
                (start, end)
            })
            .collect()
    }

    /// Line from the head segment to the mouth, unwrapped
    pub fn neck_line(&self, config: &SimConfig) -> (Point, Point) {
        config.playfield().unwrap_segment(self.head(), self.mouth)
    }
}
