mod common;

use std::time::Duration;

use command_book::hero::{Adjust, Move};
use pilot_core::{Key, KeyEvent, Point, PressTiming, Settings};
use pilot_runtime::Physics;

/// Flash jumps of 25 units, no walking, and a coarse tolerance of 5.
fn coarse() -> (Physics, Settings) {
    let physics = Physics {
        jump_distance: 12.5,
        drop_distance: 20.0,
        rope_distance: 20.0,
        walk_speed: 0.0,
    };
    (physics, Settings::new().with_move_tolerance(5.0).unwrap())
}

#[test]
fn standing_on_target_issues_no_input() {
    let (physics, settings) = coarse();
    let h = common::at(Point::new(100.0, 50.0))
        .physics(physics)
        .settings(settings)
        .build();

    let report = h.pilot.run(&mut Move::new(100.0, 50.0).unwrap());

    assert!(h.character.events().is_empty());
    assert_eq!(report.elapsed, Duration::ZERO);
}

#[test]
fn target_on_the_same_row_needs_only_right_jumps() {
    let (physics, settings) = coarse();
    let h = common::at(Point::new(100.0, 50.0))
        .physics(physics)
        .settings(settings)
        .build();

    let report = h.pilot.run(&mut Move::new(200.0, 50.0).unwrap());

    let events = h.character.events();
    assert_eq!(common::held_keys(&events), vec![Key::Right; 4]);
    assert_eq!(common::presses_of(&events, Key::Alt), 8);
    assert!(report.to.within(Point::new(200.0, 50.0), 5.0));
    assert!(!report.interrupted);
}

#[test]
fn budget_caps_the_number_of_jumps() {
    let (physics, settings) = coarse();
    let h = common::at(Point::new(100.0, 50.0))
        .physics(physics)
        .settings(settings)
        .build();

    let report = h
        .pilot
        .run(&mut Move::new(200.0, 50.0).unwrap().with_max_steps(3));

    assert_eq!(common::held_keys(&h.character.events()).len(), 3);
    assert_eq!(report.to, Point::new(175.0, 50.0));
}

#[test]
fn budget_is_shared_along_the_route() {
    let (physics, settings) = coarse();
    let route = vec![
        Point::new(50.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(150.0, 0.0),
    ];

    let h = common::at(Point::ORIGIN)
        .physics(physics)
        .settings(settings.clone())
        .route(route.clone())
        .build();
    let report = h
        .pilot
        .run(&mut Move::new(150.0, 0.0).unwrap().with_max_steps(5));
    // Two jumps per waypoint, the last waypoint gets what is left.
    assert_eq!(common::held_keys(&h.character.events()).len(), 5);
    assert_eq!(report.to, Point::new(125.0, 0.0));

    let h = common::at(Point::ORIGIN)
        .physics(physics)
        .settings(settings)
        .route(route)
        .build();
    let report = h.pilot.run(&mut Move::new(150.0, 0.0).unwrap());
    assert_eq!(common::held_keys(&h.character.events()).len(), 6);
    assert_eq!(report.to, Point::new(150.0, 0.0));
}

#[test]
fn move_converges_monotonically() {
    let target = Point::new(0.5, 0.35);
    let h = common::at(Point::new(0.1, 0.5))
        .physics(Physics::default().with_walk_speed(0.0))
        .build();

    let report = h.pilot.run(&mut Move::new(target.x, target.y).unwrap());

    assert!(report.to.within(target, Settings::DEFAULT_MOVE_TOLERANCE));
    common::assert_monotonic(&h.character.trail(), target);

    // Rope lifts and right jumps interleave, one axis per turn.
    let held = common::held_keys(&h.character.events());
    assert_eq!(&held[..4], &[Key::Right, Key::Up, Key::Right, Key::Up]);
    assert!(held[4..].iter().all(|key| *key == Key::Right));
    assert!(held.len() <= Settings::DEFAULT_MOVE_STEPS as usize);
}

#[test]
fn adjust_walks_onto_the_target() {
    let target = Point::new(0.45, 0.3);
    let h = common::at(Point::new(0.4, 0.3)).build();

    let report = h.pilot.run(&mut Adjust::new(target.x, target.y).unwrap());

    assert!(report.to.within(target, Settings::DEFAULT_ADJUST_TOLERANCE));
    assert!(report.to.x < target.x, "walks up to the target, not past it");
    assert_eq!(
        h.character.events(),
        vec![KeyEvent::Down(Key::Right), KeyEvent::Up(Key::Right)]
    );
    assert!(h.character.held_keys().is_empty());
    common::assert_monotonic(&h.character.trail(), target);
}

#[test]
fn adjust_climbs_and_drops_for_vertical_error() {
    let target = Point::new(0.45, 0.3);

    let h = common::at(Point::new(0.45, 0.36)).build();
    let report = h.pilot.run(&mut Adjust::new(target.x, target.y).unwrap());
    assert!(report.to.within(target, Settings::DEFAULT_ADJUST_TOLERANCE));
    assert_eq!(common::presses_of(&h.character.events(), Key::W), 1);

    h.character.teleport(Point::new(0.45, 0.24));
    h.character.clear_history();
    let report = h.pilot.run(&mut Adjust::new(target.x, target.y).unwrap());
    assert!(report.to.within(target, Settings::DEFAULT_ADJUST_TOLERANCE));
    assert_eq!(
        h.character.events(),
        vec![
            KeyEvent::Down(Key::Down),
            KeyEvent::Press {
                key: Key::Alt,
                repetitions: 3,
                timing: PressTiming::default().with_down(Duration::from_millis(100)),
            },
            KeyEvent::Up(Key::Down),
        ]
    );
}
