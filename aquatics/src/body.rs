use serde::{Deserialize, Serialize};

use crate::projectile::ProjectileKind;

/// What a body is, as far as collision handlers care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Boat,
    Projectile(ProjectileKind),
    /// Terrain, props and anything else nobody reacts to.
    Scenery,
}

impl BodyKind {
    pub fn is_projectile(self) -> bool {
        matches!(self, BodyKind::Projectile(_))
    }
}
