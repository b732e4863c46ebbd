//! Thin ownership wrapper around the rapier2d physics world.
//!
//! The board controller treats the physics engine as a capability: create a
//! world, insert fixed or dynamic rectangular bodies, assign velocities,
//! step, read poses back, remove bodies. Everything rapier-specific stays in
//! this module so the engine could be swapped for any 2D rigid-body engine
//! exposing equivalent primitives.

use rapier2d::prelude::*;

use dropboard_core::geometry::{Point, Size};

use crate::config::PhysicsConfig;

/// Handle identifying a body owned by a [`PhysicsWorld`].
pub type BodyHandle = RigidBodyHandle;

/// Position and orientation of a body at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub position: Point,
    pub angle: f32,
}

/// An owned rapier world: body/collider sets plus the solver state that
/// steps them.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
}

impl PhysicsWorld {
    /// Creates a world with zero ambient gravity.
    pub fn new() -> Self {
        Self {
            gravity: vector![0.0, 0.0],
            integration_params: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
        }
    }

    /// Returns the current downward gravity component.
    pub fn gravity_y(&self) -> f32 {
        self.gravity.y
    }

    /// Sets the downward gravity component, leaving x at zero.
    pub fn set_gravity_y(&mut self, gravity_y: f32) {
        self.gravity = vector![0.0, gravity_y];
    }

    /// Inserts a fixed boundary wall.
    pub fn insert_wall(&mut self, center: Point, size: Size) -> BodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x(), center.y()])
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::cuboid(size.half_width(), size.half_height()).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Inserts a rectangular skill box with rounded corners.
    ///
    /// A `fixed` box sits immovably on the grid; a dynamic one responds to
    /// gravity and collisions.
    pub fn insert_box(
        &mut self,
        center: Point,
        size: Size,
        corner_radius: f32,
        physics: &PhysicsConfig,
        fixed: bool,
    ) -> BodyHandle {
        let builder = if fixed {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic()
        };
        let body = builder
            .translation(vector![center.x(), center.y()])
            .linear_damping(physics.air_damping)
            .build();
        let handle = self.bodies.insert(body);

        // Rounded cuboid extents are measured inside the border radius
        let radius = corner_radius
            .min(size.half_width())
            .min(size.half_height());
        let collider = ColliderBuilder::round_cuboid(
            size.half_width() - radius,
            size.half_height() - radius,
            radius,
        )
        .restitution(physics.restitution)
        .friction(physics.friction)
        .density(physics.density)
        .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Assigns a linear velocity to a body, waking it.
    pub fn set_velocity(&mut self, handle: BodyHandle, vx: f32, vy: f32) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linvel(vector![vx, vy], true);
        }
    }

    /// Reads a body's linear velocity, or zero if the body is gone.
    pub fn velocity(&self, handle: BodyHandle) -> (f32, f32) {
        match self.bodies.get(handle) {
            Some(body) => {
                let velocity = body.linvel();
                (velocity.x, velocity.y)
            }
            None => (0.0, 0.0),
        }
    }

    /// Reads a body's current pose, or `None` if the body is gone.
    pub fn pose(&self, handle: BodyHandle) -> Option<BodyPose> {
        self.bodies.get(handle).map(|body| BodyPose {
            position: Point::new(body.translation().x, body.translation().y),
            angle: body.rotation().angle(),
        })
    }

    /// Removes a body and its attached colliders. Removing an already-gone
    /// body is a no-op.
    pub fn remove_body(&mut self, handle: BodyHandle) {
        if self.bodies.get(handle).is_some() {
            self.bodies.remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.joints,
                &mut self.multibody_joints,
                true,
            );
        }
    }

    /// Removes every body from the world. Safe on an empty world.
    pub fn clear(&mut self) {
        let handles: Vec<BodyHandle> =
            self.bodies.iter().map(|(handle, _)| handle).collect();
        for handle in handles {
            self.remove_body(handle);
        }
    }

    /// Number of bodies currently in the world.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advances the simulation by one fixed timestep.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
