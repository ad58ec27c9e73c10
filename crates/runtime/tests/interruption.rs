mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use command_book::hero::{Adjust, HopAttack};
use pilot_core::{
    Clock, HorizontalDirection, Key, KeyEvent, KillSwitch, ManualClock, Point, Settings,
    SystemClock,
};
use pilot_runtime::{KillSwitchFlag, Physics, Pilot, SimulatedCharacter};

/// Reads enabled until the virtual clock reaches `at`.
struct Deadline {
    clock: Arc<ManualClock>,
    at: Duration,
}

impl KillSwitch for Deadline {
    fn is_enabled(&self) -> bool {
        self.clock.now() < self.at
    }
}

fn crawling() -> Physics {
    Physics::default().with_walk_speed(0.001)
}

#[test]
fn adjust_stops_within_one_poll_and_releases() {
    let builder = common::at(Point::new(0.1, 0.3)).physics(crawling());
    let deadline = Duration::from_secs(1);
    let switch = Arc::new(Deadline {
        clock: builder.clock(),
        at: deadline,
    });
    let h = builder.switch(switch).build();

    let report = h.pilot.run(&mut Adjust::new(0.9, 0.3).unwrap());

    assert!(report.interrupted);
    assert!(report.elapsed >= deadline);
    assert!(report.elapsed <= deadline + Settings::WALK_POLL_INTERVAL);
    assert!(h.character.held_keys().is_empty());
    assert_eq!(
        h.character.events().last(),
        Some(&KeyEvent::Up(Key::Right))
    );
}

#[test]
fn hop_attack_stops_after_the_current_hop() {
    let builder = common::at(Point::new(0.5, 0.5)).physics(crawling());
    let deadline = Duration::from_secs(2);
    let switch = Arc::new(Deadline {
        clock: builder.clock(),
        at: deadline,
    });
    let h = builder.switch(switch).build();

    let mut hop = HopAttack::new(Key::Ctrl, HorizontalDirection::Left, 60.0).unwrap();
    let report = h.pilot.run(&mut hop);

    // One hop cycle is 810ms: the cycle in flight at the deadline finishes.
    assert!(report.interrupted);
    assert_eq!(report.elapsed, Duration::from_millis(3 * 810));
    assert!(h.character.held_keys().is_empty());
}

#[test]
fn clearing_the_flag_from_another_thread_stops_a_run() {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let switch = Arc::new(KillSwitchFlag::default());
    let character = Arc::new(SimulatedCharacter::new(
        Arc::clone(&clock),
        crawling(),
        Point::new(0.1, 0.3),
    ));
    let pilot = Pilot::builder()
        .position(character.clone())
        .keys(character.clone())
        .switch(switch.clone())
        .clock(clock)
        .build()
        .unwrap();

    let remote = Arc::clone(&switch);
    let stopper = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(200));
        remote.disable();
    });

    // Uninterrupted, this would walk for up to five 3s steps.
    let started = Instant::now();
    let report = pilot.run(&mut Adjust::new(0.9, 0.3).unwrap());
    stopper.join().unwrap();

    assert!(report.interrupted);
    assert!(started.elapsed() < Duration::from_millis(1500));
    assert!(character.held_keys().is_empty());
}
