//! A noiseless character model that reacts to key input.
//!
//! The simulator stands in for the game, the capture pipeline and the input
//! device at once: it consumes key events through [`KeyInput`] and reports
//! the resulting position through [`PositionFeed`]. Motion is deliberately
//! simple and deterministic:
//!
//! - holding left or right walks at a constant speed
//! - `alt` while a side is held flash-jumps a fixed distance that way
//! - `alt` while down is held drops once per press call
//! - `w` climbs a fixed distance (smaller y is higher)
//!
//! Walking is integrated lazily against the clock whenever the state is read
//! or changed.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use pilot_core::{Clock, Key, KeyEvent, KeyInput, Point, PositionFeed, PressTiming};

/// Motion constants of the simulated character, in map units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Physics {
    /// Horizontal distance of one `alt` press while a side is held.
    pub jump_distance: f64,
    /// Vertical distance of one drop through a platform.
    pub drop_distance: f64,
    /// Vertical distance of one rope lift.
    pub rope_distance: f64,
    /// Walking speed in units per second.
    pub walk_speed: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            jump_distance: 0.02,
            drop_distance: 0.06,
            rope_distance: 0.06,
            walk_speed: 0.1,
        }
    }
}

impl Physics {
    pub fn with_walk_speed(mut self, walk_speed: f64) -> Self {
        self.walk_speed = walk_speed;
        self
    }
}

#[derive(Debug)]
struct State {
    position: Point,
    held: Vec<Key>,
    updated: Duration,
    events: Vec<KeyEvent>,
    trail: Vec<Point>,
}

/// Character that moves in response to the keys it receives.
pub struct SimulatedCharacter {
    clock: Arc<dyn Clock>,
    physics: Physics,
    state: Mutex<State>,
}

impl SimulatedCharacter {
    pub fn new(clock: Arc<dyn Clock>, physics: Physics, start: Point) -> Self {
        let updated = clock.now();
        Self {
            clock,
            physics,
            state: Mutex::new(State {
                position: start,
                held: Vec::new(),
                updated,
                events: Vec::new(),
                trail: vec![start],
            }),
        }
    }

    pub fn physics(&self) -> Physics {
        self.physics
    }

    /// Moves the character without any input, as a map change would.
    pub fn teleport(&self, point: Point) {
        let mut state = self.settled();
        state.position = point;
        state.trail.push(point);
    }

    /// Every key event received so far.
    pub fn events(&self) -> Vec<KeyEvent> {
        self.lock().events.clone()
    }

    /// Position after every action, starting with the initial one.
    pub fn trail(&self) -> Vec<Point> {
        self.lock().trail.clone()
    }

    pub fn held_keys(&self) -> Vec<Key> {
        self.lock().held.clone()
    }

    /// Forgets recorded events and trail, keeping position and held keys.
    pub fn clear_history(&self) {
        let mut state = self.settled();
        state.events.clear();
        state.trail = vec![state.position];
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the state with walking integrated up to now.
    fn settled(&self) -> MutexGuard<'_, State> {
        let now = self.clock.now();
        let mut state = self.lock();
        let elapsed = now.saturating_sub(state.updated).as_secs_f64();
        let left = state.held.contains(&Key::Left);
        let right = state.held.contains(&Key::Right);
        let heading = match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        state.position.x += heading * self.physics.walk_speed * elapsed;
        state.updated = now;
        state
    }

    fn apply(&self, state: &mut State, key: Key, first: bool) {
        let physics = &self.physics;
        match key {
            Key::Alt if state.held.contains(&Key::Left) => {
                state.position.x -= physics.jump_distance;
            }
            Key::Alt if state.held.contains(&Key::Right) => {
                state.position.x += physics.jump_distance;
            }
            Key::Alt if first && state.held.contains(&Key::Down) => {
                state.position.y += physics.drop_distance;
            }
            Key::W => state.position.y -= physics.rope_distance,
            _ => {}
        }
    }
}

impl KeyInput for SimulatedCharacter {
    fn press(&self, key: Key, repetitions: u32, timing: PressTiming) {
        self.lock().events.push(KeyEvent::Press {
            key,
            repetitions,
            timing,
        });
        for rep in 0..repetitions {
            {
                let mut state = self.settled();
                self.apply(&mut state, key, rep == 0);
                let position = state.position;
                state.trail.push(position);
            }
            self.clock.sleep(timing.cycle());
        }
    }

    fn key_down(&self, key: Key) {
        let mut state = self.settled();
        state.events.push(KeyEvent::Down(key));
        if !state.held.contains(&key) {
            state.held.push(key);
        }
    }

    fn key_up(&self, key: Key) {
        let mut state = self.settled();
        state.events.push(KeyEvent::Up(key));
        state.held.retain(|held| *held != key);
        let position = state.position;
        state.trail.push(position);
    }
}

impl PositionFeed for SimulatedCharacter {
    fn current_position(&self) -> Point {
        self.settled().position
    }
}
