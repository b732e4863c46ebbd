//! The board controller: physics world lifecycle, the drop toggle, and the
//! per-frame draw pass.
//!
//! A [`BoardController`] owns exactly one physics world and the bodies in it:
//! three fixed boundary walls plus one body per skill box. Boxes live in two
//! states, switched by [`BoardController::toggle`]:
//!
//! - **grid** (initial): zero gravity, every box a fixed body at its layout
//!   position;
//! - **drop**: downward gravity, every box a dynamic body kicked with a small
//!   random velocity.
//!
//! Each toggle removes all box bodies and recreates them from a freshly
//! computed layout. Recreating from scratch keeps the off state trivially
//! idempotent; resist the urge to mutate bodies in place.
//!
//! The controller owns its body collection outright and exposes it through
//! [`BoardController::boxes`]; the draw pass iterates that collection rather
//! than capturing world state in callbacks.

use log::{debug, info};
use rand::Rng;

use dropboard_core::{
    color::Color,
    geometry::{Point, Size},
    surface::{ShapeStyle, Surface},
    text::{TextMeasurer, TextStyle},
};

use crate::{
    config::AppConfig,
    error::BoardError,
    layout::{BoxPlacement, GridLayout},
    skill::Skill,
};

pub mod world;

use world::{BodyHandle, BodyPose, PhysicsWorld};

/// Wall thickness; walls straddle the container edge so only a sliver
/// protrudes into view.
const WALL_THICKNESS: f32 = 60.0;

/// How far each wall's center sits inside (floor) or outside (sides) the
/// container edge.
const WALL_INSET: f32 = 10.0;

/// A skill box body together with its render payload.
#[derive(Debug)]
struct SkillBox {
    handle: BodyHandle,
    size: Size,
    lines: Vec<String>,
}

/// Stateful controller for one mounted board.
///
/// Lifecycle: [`initialize`](Self::initialize) once, any number of
/// [`toggle`](Self::toggle)/[`step`](Self::step)/[`draw`](Self::draw) calls,
/// then [`dispose`](Self::dispose). Dispose is idempotent and every teardown
/// path tolerates an already-empty world.
pub struct BoardController {
    config: AppConfig,
    layout: GridLayout,
    world: PhysicsWorld,
    walls: Vec<(BodyHandle, Size)>,
    boxes: Vec<SkillBox>,
    active: bool,
    running: bool,
    box_style: ShapeStyle,
    wall_style: ShapeStyle,
    text_style: TextStyle,
    text_color: Color,
}

impl BoardController {
    /// Creates a controller from configuration.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Config` if a style color fails to parse.
    pub fn new(config: AppConfig) -> Result<Self, BoardError> {
        let box_style = config.style.box_style().map_err(BoardError::Config)?;
        let wall_style = config.style.wall_style().map_err(BoardError::Config)?;
        let text_color = config.style.text_color().map_err(BoardError::Config)?;
        let text_style = config.style.text_style();
        let layout = GridLayout::new(config.layout.clone(), text_style.clone());

        Ok(Self {
            config,
            layout,
            world: PhysicsWorld::new(),
            walls: Vec::new(),
            boxes: Vec::new(),
            active: false,
            running: false,
            box_style,
            wall_style,
            text_style,
            text_color,
        })
    }

    /// Seeds the world: three boundary walls and one fixed box per skill at
    /// its grid position, with zero gravity. Starts the stepping/draw loops.
    pub fn initialize(&mut self, measurer: &dyn TextMeasurer, skills: &[Skill]) {
        info!(skills = skills.len(); "Initializing board");
        self.world.set_gravity_y(0.0);
        self.spawn_walls();
        let placements = self.layout.compute(skills, measurer);
        self.spawn_boxes(skills, placements, true, false);
        self.running = true;
    }

    /// Switches between the static grid and the physics drop.
    ///
    /// Removes all current box bodies, recomputes the layout from the given
    /// skills (never reuses stale geometry), recreates every box in the new
    /// state, and flips the toggle flag last, unconditionally. Activating
    /// turns gravity on and kicks each box with an independent random
    /// velocity; deactivating restores the tidy zero-gravity grid.
    pub fn toggle(&mut self, measurer: &dyn TextMeasurer, skills: &[Skill]) {
        let placements = self.layout.compute(skills, measurer);
        self.remove_boxes();

        if !self.active {
            info!(gravity_y = self.config.physics.gravity_y; "Starting physics drop");
            self.world.set_gravity_y(self.config.physics.gravity_y);
            self.spawn_boxes(skills, placements, false, true);
        } else {
            info!("Resetting to static grid");
            self.world.set_gravity_y(0.0);
            self.spawn_boxes(skills, placements, true, false);
        }

        self.active = !self.active;
    }

    /// Advances the simulation by one tick. No-op once disposed.
    pub fn step(&mut self) {
        if self.running {
            self.world.step();
        }
    }

    /// Draws the current frame: wall and box shapes first, then every box's
    /// label lines translated and rotated into its body frame so text tracks
    /// motion exactly.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();

        for (handle, size) in &self.walls {
            if let Some(pose) = self.world.pose(*handle) {
                self.draw_body_rect(surface, pose, *size, 0.0, &self.wall_style);
            }
        }
        for skill_box in &self.boxes {
            if let Some(pose) = self.world.pose(skill_box.handle) {
                self.draw_body_rect(
                    surface,
                    pose,
                    skill_box.size,
                    self.config.style.box_corner_radius,
                    &self.box_style,
                );
            }
        }

        // Text pass, after all shapes
        let line_height = self.text_style.line_height();
        for skill_box in &self.boxes {
            let Some(pose) = self.world.pose(skill_box.handle) else {
                continue;
            };
            surface.save();
            surface.translate(pose.position);
            surface.rotate(pose.angle);

            let total_height = skill_box.lines.len() as f32 * line_height;
            let start_y = -total_height / 2.0 + line_height / 2.0;
            for (index, line) in skill_box.lines.iter().enumerate() {
                let offset = Point::new(0.0, start_y + index as f32 * line_height);
                surface.fill_text(line, offset, &self.text_style, &self.text_color);
            }

            surface.restore();
        }
    }

    /// Stops the loops and releases the world. Safe to call repeatedly, and
    /// safe immediately after construction.
    pub fn dispose(&mut self) {
        debug!(bodies = self.world.body_count(); "Disposing board");
        self.running = false;
        self.world.clear();
        self.walls.clear();
        self.boxes.clear();
    }

    /// Whether the drop is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the stepping/draw loops are live (initialized, not disposed).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Label for the user-facing toggle control in the current state.
    pub fn control_label(&self) -> &'static str {
        if self.active {
            "Reset Physics"
        } else {
            "Start Physics"
        }
    }

    /// Current downward gravity component.
    pub fn gravity_y(&self) -> f32 {
        self.world.gravity_y()
    }

    /// Total number of bodies in the world, walls included.
    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    /// Iterates the live skill boxes as (pose, size, label lines).
    ///
    /// This is the same collection the draw pass consumes; bodies whose
    /// physics state is gone are skipped.
    pub fn boxes(&self) -> impl Iterator<Item = (BodyPose, Size, &[String])> + '_ {
        self.boxes.iter().filter_map(|skill_box| {
            self.world
                .pose(skill_box.handle)
                .map(|pose| (pose, skill_box.size, skill_box.lines.as_slice()))
        })
    }

    /// Iterates the current linear velocities of the skill boxes.
    pub fn box_velocities(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.boxes
            .iter()
            .map(|skill_box| self.world.velocity(skill_box.handle))
    }

    fn draw_body_rect(
        &self,
        surface: &mut dyn Surface,
        pose: BodyPose,
        size: Size,
        corner_radius: f32,
        style: &ShapeStyle,
    ) {
        surface.save();
        surface.translate(pose.position);
        surface.rotate(pose.angle);
        surface.draw_round_rect(Point::default().to_bounds(size), corner_radius, style);
        surface.restore();
    }

    /// Three boundary walls: floor, left, right. The top stays open so
    /// kicked boxes can escape upward before falling back in.
    fn spawn_walls(&mut self) {
        let layout = &self.config.layout;
        let width = layout.container_width;
        let height = layout.container_height;

        let walls = [
            // Floor straddles the bottom edge
            (
                Point::new(width / 2.0, height - WALL_INSET),
                Size::new(width, WALL_THICKNESS),
            ),
            (
                Point::new(-WALL_INSET, height / 2.0),
                Size::new(WALL_THICKNESS, height),
            ),
            (
                Point::new(width + WALL_INSET, height / 2.0),
                Size::new(WALL_THICKNESS, height),
            ),
        ];
        for (center, size) in walls {
            let handle = self.world.insert_wall(center, size);
            self.walls.push((handle, size));
        }
    }

    /// Creates one body per skill from the placements, attaching the wrapped
    /// lines as render payload. A skill without a placement at its index is
    /// skipped rather than failing the whole pass.
    fn spawn_boxes(
        &mut self,
        skills: &[Skill],
        placements: Vec<BoxPlacement>,
        fixed: bool,
        kick: bool,
    ) {
        let mut rng = rand::rng();
        for index in 0..skills.len() {
            let Some(placement) = placements.get(index) else {
                debug!(index; "No placement for skill index, skipping");
                continue;
            };
            let (center, size, lines) = placement.clone().into_parts();

            let handle = self.world.insert_box(
                center,
                size,
                self.config.style.box_corner_radius,
                &self.config.physics,
                fixed,
            );
            if kick {
                let vx = (rng.random::<f32>() - 0.5) * self.config.physics.kick_x;
                let vy = -self.config.physics.kick_y * rng.random::<f32>();
                self.world.set_velocity(handle, vx, vy);
            }

            self.boxes.push(SkillBox {
                handle,
                size,
                lines,
            });
        }
    }

    fn remove_boxes(&mut self) {
        for skill_box in self.boxes.drain(..) {
            self.world.remove_body(skill_box.handle);
        }
    }
}
