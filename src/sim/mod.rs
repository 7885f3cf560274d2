//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Explicit delta-time stepping (the host feeds dt, never the wall clock)
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{dist, sphere_overlap};
pub use state::{
    Bullet, Enemy, EnemyBullet, EnemyKind, GameEvent, GamePhase, GameState, Obstacle,
    ObstacleShape, Player, SpawnKind,
};
pub use tick::{FrameInput, Game};
