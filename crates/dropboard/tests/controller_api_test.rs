//! Integration tests for the BoardController API
//!
//! These tests verify that the controller lifecycle works and is usable.

use float_cmp::assert_approx_eq;

use dropboard::{
    board::BoardController,
    config::AppConfig,
    skill::Skill,
    text::{TextMeasurer, TextStyle},
};

/// Deterministic measurer so layout positions are stable across runs.
struct StubMeasurer;

impl TextMeasurer for StubMeasurer {
    fn measure(&self, text: &str, _style: &TextStyle) -> f32 {
        text.chars().count() as f32 * 7.0
    }
}

fn demo_skills() -> Vec<Skill> {
    vec![
        Skill::new("rust", "Rust"),
        Skill::new("sql", "SQL"),
        Skill::new("docker", "Docker"),
        Skill::new("ci", "Continuous Integration"),
    ]
}

fn initialized_controller(skills: &[Skill]) -> BoardController {
    let mut controller =
        BoardController::new(AppConfig::default()).expect("Default config should resolve");
    controller.initialize(&StubMeasurer, skills);
    controller
}

#[test]
fn test_initialize_populates_world() {
    let skills = demo_skills();
    let controller = initialized_controller(&skills);

    // Three boundary walls plus one body per skill
    assert_eq!(controller.body_count(), 3 + skills.len());
    assert_eq!(controller.boxes().count(), skills.len());
    assert!(controller.is_running());
    assert!(!controller.is_active());
}

#[test]
fn test_initial_state_has_no_gravity() {
    let controller = initialized_controller(&demo_skills());
    assert_approx_eq!(f32, controller.gravity_y(), 0.0);
}

#[test]
fn test_toggle_applies_and_removes_gravity() {
    let skills = demo_skills();
    let mut controller = initialized_controller(&skills);

    controller.toggle(&StubMeasurer, &skills);
    assert!(controller.is_active());
    assert_approx_eq!(f32, controller.gravity_y(), 0.5);

    controller.toggle(&StubMeasurer, &skills);
    assert!(!controller.is_active());
    assert_approx_eq!(f32, controller.gravity_y(), 0.0);
}

#[test]
fn test_toggle_twice_restores_grid_positions() {
    let skills = demo_skills();
    let mut controller = initialized_controller(&skills);

    let grid_poses: Vec<_> = controller.boxes().map(|(pose, _, _)| pose).collect();

    // Drop, let things move, then reset
    controller.toggle(&StubMeasurer, &skills);
    for _ in 0..30 {
        controller.step();
    }
    controller.toggle(&StubMeasurer, &skills);

    let restored_poses: Vec<_> = controller.boxes().map(|(pose, _, _)| pose).collect();
    assert_eq!(grid_poses.len(), restored_poses.len());
    for (grid, restored) in grid_poses.iter().zip(&restored_poses) {
        assert_approx_eq!(f32, grid.position.x(), restored.position.x());
        assert_approx_eq!(f32, grid.position.y(), restored.position.y());
        assert_approx_eq!(f32, restored.angle, 0.0);
    }
}

#[test]
fn test_kick_velocities_stay_in_range() {
    let skills = demo_skills();
    let mut controller = initialized_controller(&skills);
    controller.toggle(&StubMeasurer, &skills);

    for (vx, vy) in controller.box_velocities() {
        assert!(
            (-2.0..=2.0).contains(&vx),
            "horizontal kick out of range: {vx}"
        );
        assert!(
            (-2.0..=0.0).contains(&vy),
            "vertical kick should point up or be zero: {vy}"
        );
    }
}

#[test]
fn test_grid_boxes_have_no_velocity() {
    let controller = initialized_controller(&demo_skills());
    for (vx, vy) in controller.box_velocities() {
        assert_approx_eq!(f32, vx, 0.0);
        assert_approx_eq!(f32, vy, 0.0);
    }
}

#[test]
fn test_control_label_tracks_toggle() {
    let skills = demo_skills();
    let mut controller = initialized_controller(&skills);

    assert_eq!(controller.control_label(), "Start Physics");
    controller.toggle(&StubMeasurer, &skills);
    assert_eq!(controller.control_label(), "Reset Physics");
    controller.toggle(&StubMeasurer, &skills);
    assert_eq!(controller.control_label(), "Start Physics");
}

#[test]
fn test_empty_skill_list() {
    let controller = initialized_controller(&[]);
    assert_eq!(controller.body_count(), 3);
    assert_eq!(controller.boxes().count(), 0);
}

#[test]
fn test_dispose_clears_world_and_is_idempotent() {
    let mut controller = initialized_controller(&demo_skills());

    controller.dispose();
    assert_eq!(controller.body_count(), 0);
    assert!(!controller.is_running());

    // A second dispose and further steps must be harmless
    controller.dispose();
    controller.step();
    assert_eq!(controller.body_count(), 0);
}

#[test]
fn test_dispose_immediately_after_initialize() {
    let skills = demo_skills();
    let mut controller = initialized_controller(&skills);
    controller.dispose();
    assert_eq!(controller.boxes().count(), 0);
}

#[test]
fn test_active_boxes_fall_when_stepped() {
    let skills = demo_skills();
    let mut controller = initialized_controller(&skills);

    let grid_poses: Vec<_> = controller.boxes().map(|(pose, _, _)| pose).collect();

    controller.toggle(&StubMeasurer, &skills);
    for _ in 0..600 {
        controller.step();
    }

    // At least one box should have moved from its grid position
    let moved = controller
        .boxes()
        .zip(&grid_poses)
        .any(|((pose, _, _), grid)| pose.position.distance(grid.position) > 1.0);
    assert!(moved, "Boxes should move under gravity");
}
