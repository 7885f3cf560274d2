//! Entity types, session state, and presentation events.
//!
//! Entities are plain data records; each carries an `active` flag that the
//! orchestrator observes once per frame to drive removal. Behaviors are step
//! functions of elapsed time (and, for enemies, the player's position).

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a session. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Interlude after a stage's clear threshold was reached
    StageClear,
    /// Session ended; exited only via an explicit restart
    GameOver,
}

/// Enemy variants. The tag selects the motion rule; lifecycle is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Straight runner
    A,
    /// Sine weaver, may fire once
    B,
    /// Zigzag tracker
    C,
}

impl EnemyKind {
    /// Hit points at spawn.
    pub fn initial_hp(self) -> i32 {
        match self {
            EnemyKind::A => 1,
            EnemyKind::B => 2,
            EnemyKind::C => 3,
        }
    }
}

/// Obstacle silhouettes, presentation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleShape {
    Rock,
    Pillar,
}

/// What an `EntitySpawned` notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    PlayerBullet,
    Enemy(EnemyKind),
    EnemyBullet,
    Obstacle(ObstacleShape),
}

/// Lifecycle notifications for the presentation layer, returned from each
/// `advance` call.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EntitySpawned { id: u32, kind: SpawnKind, pos: Vec3 },
    EntityDestroyed { id: u32 },
    HpChanged { hp: i32 },
    ScoreChanged { score: u64 },
    StageChanged { stage: u32 },
    StageClear { stage: u32, score: u64, bonus: u64 },
    GameOver { score: u64, stage: u32 },
}

/// The player ship. Created once per session/restart, never destroyed
/// mid-session.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3,
    pub hp: i32,
    pub max_hp: i32,
    pub invincible: bool,
    /// Remaining invincibility window, meaningful while `invincible`
    pub invincible_left: f32,
    pub shoot_cooldown: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            invincible: false,
            invincible_left: 0.0,
            shoot_cooldown: 0.0,
        }
    }
}

impl Player {
    /// Smooth toward the input target, clamp to the playfield, and run down
    /// the invincibility and shoot-cooldown timers.
    pub fn update(&mut self, dt: f32, move_x: f32, move_y: f32) {
        if move_x != 0.0 || move_y != 0.0 {
            let target_x = move_x.clamp(-1.0, 1.0) * BOUNDS_X;
            let target_y = move_y.clamp(-1.0, 1.0) * BOUNDS_Y;
            self.pos.x += (target_x - self.pos.x) * PLAYER_SPEED * dt;
            self.pos.y += (target_y - self.pos.y) * PLAYER_SPEED * dt;
        }
        self.pos.x = self.pos.x.clamp(-BOUNDS_X, BOUNDS_X);
        self.pos.y = self.pos.y.clamp(-BOUNDS_Y, BOUNDS_Y);

        if self.invincible {
            self.invincible_left -= dt;
            if self.invincible_left <= 0.0 {
                self.invincible = false;
                self.invincible_left = 0.0;
            }
        }

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= dt;
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown <= 0.0
    }

    pub fn reset_shoot_cooldown(&mut self) {
        self.shoot_cooldown = SHOOT_INTERVAL;
    }

    /// Opacity for the invincibility blink, 1.0 when not blinking. The
    /// presentation layer samples this each frame.
    pub fn opacity(&self) -> f32 {
        if self.invincible {
            (self.invincible_left * 20.0).sin() * 0.5 + 0.5
        } else {
            1.0
        }
    }

    /// Apply damage. Returns true when this call dropped hp to zero. Damage
    /// during the invincibility window is ignored (no state change); damage
    /// that doesn't kill opens a fresh window.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.invincible {
            return false;
        }
        self.hp = (self.hp - amount).max(0);
        if self.hp == 0 {
            return true;
        }
        self.invincible = true;
        self.invincible_left = INVINCIBLE_SECS;
        false
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }
}

/// A player bullet.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    pub age: f32,
    pub active: bool,
}

impl Bullet {
    pub fn new(id: u32, pos: Vec3) -> Self {
        Self {
            id,
            pos,
            vel: Vec3::new(0.0, 0.0, -BULLET_SPEED),
            age: 0.0,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
        if self.age >= BULLET_TTL || self.pos.z < BULLET_REAR_BOUND {
            self.active = false;
        }
    }
}

/// An enemy. One record for all three kinds; `kind` picks the motion rule.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec3,
    pub hp: i32,
    pub max_hp: i32,
    pub active: bool,
    /// Rotation accumulator for the presentation layer
    pub spin: Vec3,
    /// Stage speed multiplier captured at spawn
    speed_mult: f32,
    /// Whether this enemy is armed (weavers under a shooting stage)
    can_fire: bool,
    has_fired: bool,
    elapsed: f32,
    spawn_x: f32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec3, speed_mult: f32, can_fire: bool) -> Self {
        let hp = kind.initial_hp();
        Self {
            id,
            kind,
            pos,
            hp,
            max_hp: hp,
            active: true,
            spin: Vec3::ZERO,
            speed_mult,
            can_fire,
            has_fired: false,
            elapsed: 0.0,
            spawn_x: pos.x,
        }
    }

    /// Advance one frame. Returns true when the enemy fires this frame;
    /// weavers fire at most once, while crossing the trigger depth.
    pub fn update(&mut self, dt: f32, player_pos: Vec3) -> bool {
        self.elapsed += dt;

        match self.kind {
            EnemyKind::A => {
                self.spin.y += dt * 2.0;
            }
            EnemyKind::B => {
                self.pos.x = (self.elapsed * WEAVER_FREQUENCY).sin() * WEAVER_AMPLITUDE;
                self.spin.x += dt * 2.0;
                self.spin.y += dt * 2.0;
            }
            EnemyKind::C => {
                let zigzag = (self.elapsed * TRACKER_FREQUENCY).sin() * TRACKER_AMPLITUDE;
                let target_x = self.spawn_x + zigzag + (player_pos.x - self.pos.x) * 0.2;
                let target_y = player_pos.y;
                self.pos.x += (target_x - self.pos.x) * TRACKER_SPEED * dt;
                // Vertical tracking runs at half rate
                self.pos.y += (target_y - self.pos.y) * TRACKER_SPEED * dt * 0.5;
                self.spin += Vec3::splat(dt * 3.0);
            }
        }

        self.pos.z += ENEMY_SPEED * self.speed_mult * dt;
        if self.pos.z > ENEMY_FORWARD_BOUND {
            self.active = false;
        }

        if self.kind == EnemyKind::B
            && self.can_fire
            && !self.has_fired
            && self.pos.z >= WEAVER_SHOOT_Z
        {
            self.has_fired = true;
            return true;
        }
        false
    }

    /// Apply damage, clamping hp at zero. Returns true when this call
    /// crossed the destruction threshold; the caller reads `kind` for
    /// scoring before the entity is swept.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount).max(0);
        if self.hp == 0 {
            self.active = false;
            true
        } else {
            false
        }
    }
}

/// A shot fired by an armed weaver, aimed at the player's position at fire
/// time.
#[derive(Debug, Clone)]
pub struct EnemyBullet {
    pub id: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    pub age: f32,
    pub active: bool,
}

impl EnemyBullet {
    pub fn new(id: u32, pos: Vec3, direction: Vec3) -> Self {
        Self {
            id,
            pos,
            vel: direction.normalize_or_zero() * ENEMY_BULLET_SPEED,
            age: 0.0,
            active: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
        if self.age >= ENEMY_BULLET_TTL
            || self.pos.z > ENEMY_FORWARD_BOUND
            || self.pos.z < ENEMY_BULLET_REAR_BOUND
            || self.pos.x.abs() > ENEMY_BULLET_LATERAL_BOUND
            || self.pos.y.abs() > ENEMY_BULLET_LATERAL_BOUND
        {
            self.active = false;
        }
    }
}

/// A drifting obstacle. Bullets stop on it; only leaving the playfield
/// destroys it.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pub shape: ObstacleShape,
    pub pos: Vec3,
    pub active: bool,
    /// Rotation accumulator for the presentation layer
    pub spin: f32,
}

impl Obstacle {
    pub fn new(id: u32, shape: ObstacleShape, pos: Vec3) -> Self {
        Self {
            id,
            shape,
            pos,
            active: true,
            spin: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.z += OBSTACLE_SPEED * dt;
        if self.pos.z > ENEMY_FORWARD_BOUND {
            self.active = false;
        }
        self.spin += dt * 0.5;
    }
}

/// Complete session state. Collections are owned exclusively by the
/// orchestrator; iteration order is insertion order.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Current stage number, 1-indexed, clamped against the catalog
    pub stage: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub obstacles: Vec<Obstacle>,
    pub enemy_spawn_timer: f32,
    pub obstacle_spawn_timer: f32,
    /// Next entry of the stage's scripted opening wave
    pub wave_cursor: usize,
    pub wave_timer: f32,
    /// Enemies destroyed during the current stage
    pub stage_kills: u32,
    /// Remaining stage-clear interlude, meaningful in `StageClear`
    pub stage_clear_left: f32,
    /// Ground texture scroll offset, read by the presentation layer
    pub scroll_offset: f32,
    next_id: u32,
}

impl GameState {
    /// Fresh session at stage 1.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            stage: 1,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            obstacles: Vec::new(),
            enemy_spawn_timer: 0.0,
            obstacle_spawn_timer: 0.0,
            wave_cursor: 0,
            wave_timer: 0.0,
            stage_kills: 0,
            stage_clear_left: 0.0,
            scroll_offset: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Total live entities across all collections.
    pub fn entity_count(&self) -> usize {
        self.bullets.len() + self.enemies.len() + self.enemy_bullets.len() + self.obstacles.len()
    }
}
