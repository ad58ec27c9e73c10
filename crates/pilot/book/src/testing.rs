//! Test doubles for exercising commands without a game.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pilot_core::{
    Calm, Clock, Env, Humanizer, Key, KeyEvent, KeyInput, KillSwitch, ManualClock, PathPlanner,
    Point, PositionFeed, PressTiming, Settings,
};

/// Records key events with their virtual timestamps and advances the clock
/// by the duration each press would take.
pub struct Recorder {
    clock: Arc<ManualClock>,
    events: Mutex<Vec<(Duration, KeyEvent)>>,
}

impl Recorder {
    pub fn new(clock: Arc<ManualClock>) -> Self {
        Self {
            clock,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<KeyEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(_, event)| *event)
            .collect()
    }

    pub fn timed_events(&self) -> Vec<(Duration, KeyEvent)> {
        self.events.lock().unwrap().clone()
    }

    pub fn presses_of(&self, key: Key) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, KeyEvent::Press { key: k, .. } if *k == key))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: KeyEvent) {
        self.events.lock().unwrap().push((self.clock.now(), event));
    }
}

impl KeyInput for Recorder {
    fn press(&self, key: Key, repetitions: u32, timing: PressTiming) {
        self.record(KeyEvent::Press {
            key,
            repetitions,
            timing,
        });
        for _ in 0..repetitions {
            self.clock.sleep(timing.cycle());
        }
    }

    fn key_down(&self, key: Key) {
        self.record(KeyEvent::Down(key));
    }

    fn key_up(&self, key: Key) {
        self.record(KeyEvent::Up(key));
    }
}

/// Position feed replaying canned readings in a loop, one per read.
pub struct Readings {
    points: Vec<Point>,
    next: AtomicUsize,
}

impl Readings {
    /// A feed that never moves.
    pub fn fixed(point: Point) -> Self {
        Self::cycle(vec![point])
    }

    pub fn cycle(points: Vec<Point>) -> Self {
        assert!(!points.is_empty(), "feed needs at least one reading");
        Self {
            points,
            next: AtomicUsize::new(0),
        }
    }
}

impl PositionFeed for Readings {
    fn current_position(&self) -> Point {
        let read = self.next.fetch_add(1, Ordering::SeqCst);
        self.points[read % self.points.len()]
    }
}

/// Planner returning a canned list of waypoints.
pub struct Waypoints(pub Vec<Point>);

impl PathPlanner for Waypoints {
    fn shortest_path(&self, _from: Point, _to: Point) -> Vec<Point> {
        self.0.clone()
    }
}

/// Kill-switch that reads enabled for the first `checks` reads, then off.
pub struct Countdown {
    remaining: AtomicUsize,
}

impl Countdown {
    pub fn new(checks: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(checks),
        }
    }

    pub fn always() -> Self {
        Self::new(usize::MAX)
    }
}

impl KillSwitch for Countdown {
    fn is_enabled(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

/// Humanizer that always asks for the same delay.
pub struct Nervous(pub Duration);

impl Humanizer for Nervous {
    fn pre_attack_delay(&self) -> Option<Duration> {
        Some(self.0)
    }
}

/// Bundle of doubles that can lend out an [`Env`].
pub struct Rig {
    pub clock: Arc<ManualClock>,
    pub keys: Recorder,
    pub position: Readings,
    pub planner: Waypoints,
    pub switch: Countdown,
    pub humanizer: Box<dyn Humanizer>,
    pub settings: Settings,
}

impl Rig {
    pub fn at(position: Point) -> Self {
        let clock = Arc::new(ManualClock::new());
        Self {
            keys: Recorder::new(Arc::clone(&clock)),
            clock,
            position: Readings::fixed(position),
            planner: Waypoints(Vec::new()),
            switch: Countdown::always(),
            humanizer: Box::new(Calm),
            settings: Settings::new(),
        }
    }

    pub fn env(&self) -> Env<'_> {
        Env::new(
            &self.position,
            &self.planner,
            &self.switch,
            &self.keys,
            self.clock.as_ref(),
            self.humanizer.as_ref(),
            &self.settings,
        )
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }
}
