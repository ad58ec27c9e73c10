#![allow(dead_code)]

use std::sync::Arc;

use pilot_core::{Key, KeyEvent, KillSwitch, ManualClock, PathPlanner, Point, Settings};
use pilot_runtime::{KillSwitchFlag, Physics, Pilot, SimulatedCharacter};

/// Planner that always returns the same route.
pub struct Route(pub Vec<Point>);

impl PathPlanner for Route {
    fn shortest_path(&self, _from: Point, _to: Point) -> Vec<Point> {
        self.0.clone()
    }
}

pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub character: Arc<SimulatedCharacter>,
    pub pilot: Pilot,
}

pub struct HarnessBuilder {
    start: Point,
    physics: Physics,
    settings: Settings,
    switch: Option<Arc<dyn KillSwitch>>,
    route: Option<Vec<Point>>,
    clock: Arc<ManualClock>,
}

impl HarnessBuilder {
    pub fn physics(mut self, physics: Physics) -> Self {
        self.physics = physics;
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn switch(mut self, switch: Arc<dyn KillSwitch>) -> Self {
        self.switch = Some(switch);
        self
    }

    pub fn route(mut self, route: Vec<Point>) -> Self {
        self.route = Some(route);
        self
    }

    pub fn clock(&self) -> Arc<ManualClock> {
        Arc::clone(&self.clock)
    }

    pub fn build(self) -> Harness {
        let character = Arc::new(SimulatedCharacter::new(
            self.clock.clone(),
            self.physics,
            self.start,
        ));
        let mut builder = Pilot::builder()
            .position(character.clone())
            .keys(character.clone())
            .clock(self.clock.clone())
            .settings(self.settings)
            .switch(
                self.switch
                    .unwrap_or_else(|| Arc::new(KillSwitchFlag::default())),
            );
        if let Some(route) = self.route {
            builder = builder.planner(Arc::new(Route(route)));
        }
        Harness {
            clock: self.clock,
            character,
            pilot: builder.build().expect("position and keys are set"),
        }
    }
}

/// Simulated character standing at `start`, with a virtual clock.
pub fn at(start: Point) -> HarnessBuilder {
    HarnessBuilder {
        start,
        physics: Physics::default(),
        settings: Settings::default(),
        switch: None,
        route: None,
        clock: Arc::new(ManualClock::new()),
    }
}

/// Keys pressed down and held, in order. Every jump holds exactly one.
pub fn held_keys(events: &[KeyEvent]) -> Vec<Key> {
    events
        .iter()
        .filter_map(|event| match event {
            KeyEvent::Down(key) => Some(*key),
            _ => None,
        })
        .collect()
}

pub fn presses_of(events: &[KeyEvent], key: Key) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, KeyEvent::Press { key: k, .. } if *k == key))
        .count()
}

/// Asserts that the distance to `target` never grows along `trail`.
pub fn assert_monotonic(trail: &[Point], target: Point) {
    for pair in trail.windows(2) {
        let (before, after) = (pair[0].distance(target), pair[1].distance(target));
        assert!(
            after <= before + 1e-9,
            "moved away from {target}: {} -> {}",
            pair[0],
            pair[1]
        );
    }
}
