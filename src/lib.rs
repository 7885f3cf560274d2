//! Nova Strike - simulation core for a lane-free 3D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity behaviors, collisions, stage machine)
//! - `stages`: Ordered, immutable stage catalog
//! - `score`: Score ledger with a persisted high score
//! - `persistence`: Key/value storage port for persisted numbers
//!
//! The crate owns no scheduling, rendering, or input wiring: the host calls
//! [`sim::Game::advance`] once per frame with an elapsed time and a normalized
//! input snapshot, and consumes the returned event stream.

pub mod persistence;
pub mod score;
pub mod sim;
pub mod stages;

pub use persistence::{JsonFileStore, MemoryStore, ScoreStore};
pub use score::ScoreLedger;
pub use stages::{StageConfig, lookup};

/// Gameplay constants
pub mod consts {
    /// Reference timestep for the demo driver and tests (60 Hz). The sim
    /// itself accepts any dt; behavior is delta-time based by design.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield half-extents; the player is clamped inside them
    pub const BOUNDS_X: f32 = 12.0;
    pub const BOUNDS_Y: f32 = 8.0;

    /// Player defaults
    pub const PLAYER_MAX_HP: i32 = 5;
    /// Smoothing rate toward the input target, per second
    pub const PLAYER_SPEED: f32 = 15.0;
    pub const PLAYER_RADIUS: f32 = 0.5;
    /// Post-damage invincibility window
    pub const INVINCIBLE_SECS: f32 = 2.0;
    /// Minimum time between shots
    pub const SHOOT_INTERVAL: f32 = 0.15;
    /// Live player bullet cap
    pub const MAX_PLAYER_BULLETS: usize = 5;

    /// Bullet defaults - bullets travel along -z, away from the player
    pub const BULLET_SPEED: f32 = 80.0;
    pub const BULLET_TTL: f32 = 3.0;
    pub const BULLET_REAR_BOUND: f32 = -300.0;
    pub const BULLET_RADIUS: f32 = 0.5;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 20.0;
    /// Enemies despawn past this depth (behind the player)
    pub const ENEMY_FORWARD_BOUND: f32 = 20.0;
    /// Radius used against player bullets
    pub const ENEMY_HIT_RADIUS: f32 = 1.5;
    /// Radius used against the player's body
    pub const ENEMY_BODY_RADIUS: f32 = 1.0;

    /// Weaver (kind B) motion
    pub const WEAVER_AMPLITUDE: f32 = 5.0;
    pub const WEAVER_FREQUENCY: f32 = 2.0;
    /// Depth at which an armed weaver fires its single shot
    pub const WEAVER_SHOOT_Z: f32 = -30.0;

    /// Tracker (kind C) motion
    pub const TRACKER_AMPLITUDE: f32 = 8.0;
    pub const TRACKER_FREQUENCY: f32 = 1.5;
    /// Smoothing rate toward the player, per second
    pub const TRACKER_SPEED: f32 = 3.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 20.0;
    /// Radius used against player bullets
    pub const OBSTACLE_HIT_RADIUS: f32 = 2.0;
    /// Radius used against the player's body
    pub const OBSTACLE_BODY_RADIUS: f32 = 1.0;

    /// Enemy shot defaults
    pub const ENEMY_BULLET_SPEED: f32 = 10.0;
    pub const ENEMY_BULLET_TTL: f32 = 5.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 1.5;
    pub const ENEMY_BULLET_REAR_BOUND: f32 = -150.0;
    pub const ENEMY_BULLET_LATERAL_BOUND: f32 = 50.0;

    /// Spawn volume: fixed depth, uniform lateral/vertical placement
    pub const SPAWN_DEPTH: f32 = -100.0;
    pub const ENEMY_SPAWN_X: f32 = 10.0;
    pub const ENEMY_SPAWN_Y: f32 = 5.0;
    pub const OBSTACLE_SPAWN_Y: f32 = 3.0;

    /// Interlude between a stage clearing and the next one starting
    pub const STAGE_CLEAR_PAUSE_SECS: f32 = 3.0;

    /// Ground texture scroll rate, read by the presentation layer
    pub const BACKGROUND_SCROLL_SPEED: f32 = 0.5;
}
