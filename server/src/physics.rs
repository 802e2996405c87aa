//! Just enough rigid-body host for the simulation: kinematic spheres with
//! gravity scale, impulses and contact-start notifications.

use aquatics::BodyKind;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::clock::SimClock;

#[derive(Component, Debug, Clone)]
pub struct Body {
    pub velocity: Vec3,
    /// World-space spin, ignored while `rotation_locked`.
    pub angular_velocity: Vec3,
    pub gravity_scale: f32,
    pub mass: f32,
    pub rotation_locked: bool,
    impulse: Vec3,
}

impl Body {
    pub fn new(mass: f32) -> Self {
        Self {
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            gravity_scale: 0.0,
            mass,
            rotation_locked: false,
            impulse: Vec3::ZERO,
        }
    }

    pub fn locked(mut self) -> Self {
        self.rotation_locked = true;
        self
    }

    /// Queued until the next integration step.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.impulse += impulse;
    }

    pub fn pending_impulse(&self) -> Vec3 {
        self.impulse
    }

    pub fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
        self.impulse = Vec3::ZERO;
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Collider {
    pub radius: f32,
    pub kind: BodyKind,
}

/// Contacts with this entity are never reported.
#[derive(Component, Debug, Clone, Copy)]
pub struct CollisionException(pub Entity);

/// Sent to `body` when it starts touching `other`.
#[derive(Event, Debug, Clone, Copy)]
pub struct BodyEntered {
    pub body: Entity,
    pub other: Entity,
    pub other_kind: BodyKind,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldGravity(pub Vec3);

/// Pairs overlapping at the end of the previous tick.
#[derive(Resource, Debug, Default)]
pub struct Contacts(HashSet<(Entity, Entity)>);

impl Contacts {
    pub fn touching(&self, a: Entity, b: Entity) -> bool {
        self.0.contains(&ordered(a, b))
    }
}

fn ordered(a: Entity, b: Entity) -> (Entity, Entity) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn integrate_bodies(
    clock: Res<SimClock>,
    gravity: Res<WorldGravity>,
    mut q_bodies: Query<(&mut Transform, &mut Body)>,
) {
    let dt = clock.dt();
    for (mut transform, mut body) in &mut q_bodies {
        let impulse = std::mem::take(&mut body.impulse);
        let inv_mass = body.mass.recip();
        body.velocity += impulse * inv_mass;

        // Constant acceleration over the step, integrated exactly.
        let accel = gravity.0 * body.gravity_scale;
        transform.translation += body.velocity * dt + 0.5 * accel * dt * dt;
        body.velocity += accel * dt;

        if !body.rotation_locked && body.angular_velocity != Vec3::ZERO {
            let spin = Quat::from_scaled_axis(body.angular_velocity * dt);
            transform.rotation = (spin * transform.rotation).normalize();
        }
    }
}

pub fn detect_contacts(
    mut contacts: ResMut<Contacts>,
    q_colliders: Query<(Entity, &Transform, &Collider, Option<&CollisionException>)>,
    mut entered: EventWriter<BodyEntered>,
) {
    let bodies: Vec<_> = q_colliders.iter().collect();
    let mut current = HashSet::default();

    for (i, &(a, ta, ca, ea)) in bodies.iter().enumerate() {
        for &(b, tb, cb, eb) in &bodies[i + 1..] {
            if ea.is_some_and(|e| e.0 == b) || eb.is_some_and(|e| e.0 == a) {
                continue;
            }
            let reach = ca.radius + cb.radius;
            if ta.translation.distance_squared(tb.translation) > reach * reach {
                continue;
            }
            let pair = ordered(a, b);
            if !contacts.0.contains(&pair) {
                entered.write(BodyEntered {
                    body: a,
                    other: b,
                    other_kind: cb.kind,
                });
                entered.write(BodyEntered {
                    body: b,
                    other: a,
                    other_kind: ca.kind,
                });
            }
            current.insert(pair);
        }
    }
    contacts.0 = current;
}
