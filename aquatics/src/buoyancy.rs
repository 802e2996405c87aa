//! Surface/air state machine shared by the player and boats.
//!
//! The regime is recomputed from height every tick and never stored. The only
//! memory is whether the body was in the water on the previous tick, which is
//! what makes the jump and water-entry notifications edge-triggered.

use bevy_math::Vec3;

use crate::tuning::BuoyancySpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    Submerged,
    /// Below the deep threshold: submerged, plus a corrective upward impulse.
    DeeplySubmerged,
    Airborne,
}

impl Regime {
    pub fn classify(spec: &BuoyancySpec, height: f32) -> Self {
        debug_assert!(height.is_finite(), "non-finite height {height}");
        if height > spec.surface {
            Regime::Airborne
        } else if spec.deep.is_some_and(|deep| height < deep.threshold) {
            Regime::DeeplySubmerged
        } else {
            Regime::Submerged
        }
    }

    #[inline]
    pub fn in_water(self) -> bool {
        !matches!(self, Regime::Airborne)
    }
}

/// Fired once per surface crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Water to air.
    Jumped,
    /// Air to water.
    EnteredWater,
}

/// Physics commands for the host to apply before it integrates this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionOutput {
    pub regime: Regime,
    pub gravity_scale: f32,
    /// Replaces the body's linear velocity outright when set.
    pub velocity: Option<Vec3>,
    pub impulse: Vec3,
    pub transition: Option<Transition>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuoyancyState {
    was_in_water: Option<bool>,
}

impl BuoyancyState {
    /// State for a body already known to be in `regime`, so its next tick is
    /// not treated as the first.
    pub fn settled(regime: Regime) -> Self {
        Self {
            was_in_water: Some(regime.in_water()),
        }
    }

    pub fn is_first_tick(&self) -> bool {
        self.was_in_water.is_none()
    }

    /// Record this tick's regime and report the crossing, if any.
    pub fn observe(&mut self, regime: Regime) -> Option<Transition> {
        let now_in_water = regime.in_water();
        let previous = self.was_in_water.replace(now_in_water);
        match previous {
            Some(true) if !now_in_water => Some(Transition::Jumped),
            Some(false) if now_in_water => Some(Transition::EnteredWater),
            _ => None,
        }
    }

    /// Classify `height` and produce this tick's locomotion.
    ///
    /// `drive` is the velocity imposed while in the water. On the tick a body
    /// breaches, it receives a leap impulse of `leap_factor * speed` along
    /// `forward`.
    pub fn step(
        &mut self,
        spec: &BuoyancySpec,
        height: f32,
        drive: Vec3,
        forward: Vec3,
        speed: f32,
    ) -> LocomotionOutput {
        let regime = Regime::classify(spec, height);
        let first_tick = self.is_first_tick();
        let transition = self.observe(regime);

        let mut out = LocomotionOutput {
            regime,
            gravity_scale: spec.submerged_gravity,
            velocity: None,
            impulse: Vec3::ZERO,
            transition,
        };

        match regime {
            Regime::Submerged | Regime::DeeplySubmerged => {
                out.velocity = Some(drive);
                if regime == Regime::DeeplySubmerged {
                    if let Some(deep) = spec.deep {
                        out.impulse += Vec3::Y * deep.impulse;
                    }
                }
            }
            Regime::Airborne => {
                out.gravity_scale = match spec.first_tick_gravity {
                    Some(g) if first_tick => g,
                    _ => spec.airborne_gravity,
                };
                if transition == Some(Transition::Jumped) {
                    out.impulse += forward * (spec.leap_factor * speed);
                }
            }
        }
        out
    }
}
