//! Per-frame update orchestration.
//!
//! Frame order is fixed: player, shooting, entity advance, lifecycle sweep,
//! collision passes, scoring and phase transitions, then spawning. Scoring
//! and the clear check read the ledger after collisions have been resolved,
//! and spawning runs only while the session is in `Playing`.

use glam::Vec3;
use rand::Rng;

use super::collision;
use super::state::{
    Bullet, Enemy, EnemyBullet, EnemyKind, GameEvent, GamePhase, GameState, Obstacle,
    ObstacleShape, Player, SpawnKind,
};
use crate::consts::*;
use crate::persistence::ScoreStore;
use crate::score::ScoreLedger;
use crate::stages::{self, StageConfig};

/// Normalized input snapshot for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Lateral axis in [-1, 1]
    pub move_x: f32,
    /// Vertical axis in [-1, 1]
    pub move_y: f32,
    pub shoot: bool,
}

/// The simulation orchestrator: owns the session state and the score ledger,
/// and sequences one frame per [`Game::advance`] call.
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    pub ledger: ScoreLedger,
}

impl Game {
    pub fn new(seed: u64, store: Box<dyn ScoreStore>) -> Self {
        Self {
            state: GameState::new(seed),
            ledger: ScoreLedger::new(store),
        }
    }

    /// Advance the simulation by one frame of `dt` seconds, returning the
    /// lifecycle notifications produced along the way.
    pub fn advance(&mut self, dt: f32, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let Game { state, ledger } = self;
        match state.phase {
            GamePhase::Playing => advance_playing(state, ledger, dt, input, &mut events),
            GamePhase::StageClear => advance_stage_clear(state, ledger, dt, &mut events),
            GamePhase::GameOver => {}
        }
        events
    }

    /// Discard the whole session and start over at stage 1. Every live
    /// entity receives a destruction notification; the high score survives.
    pub fn restart(&mut self, seed: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        clear_entities(&mut self.state, &mut events);
        self.state = GameState::new(seed);
        self.ledger.reset();
        events.push(GameEvent::ScoreChanged { score: 0 });
        events.push(GameEvent::StageChanged { stage: 1 });
        events.push(GameEvent::HpChanged {
            hp: self.state.player.hp,
        });
        log::info!("Session restarted with seed {seed}");
        events
    }
}

fn advance_playing(
    state: &mut GameState,
    ledger: &mut ScoreLedger,
    dt: f32,
    input: &FrameInput,
    events: &mut Vec<GameEvent>,
) {
    let config = stages::lookup(state.stage);

    // Player movement and timers
    state.player.update(dt, input.move_x, input.move_y);

    // Shooting, capped by cooldown and live bullet count
    if input.shoot && state.player.can_shoot() && state.bullets.len() < MAX_PLAYER_BULLETS {
        let id = state.next_entity_id();
        let pos = state.player.pos;
        events.push(GameEvent::EntitySpawned {
            id,
            kind: SpawnKind::PlayerBullet,
            pos,
        });
        state.bullets.push(Bullet::new(id, pos));
        state.player.reset_shoot_cooldown();
    }

    // Advance entities and environment
    for bullet in &mut state.bullets {
        bullet.update(dt);
    }

    let player_pos = state.player.pos;
    let mut shot_origins: Vec<Vec3> = Vec::new();
    for enemy in &mut state.enemies {
        if enemy.update(dt, player_pos) {
            shot_origins.push(enemy.pos);
        }
    }
    for origin in shot_origins {
        let id = state.next_entity_id();
        events.push(GameEvent::EntitySpawned {
            id,
            kind: SpawnKind::EnemyBullet,
            pos: origin,
        });
        state
            .enemy_bullets
            .push(EnemyBullet::new(id, origin, player_pos - origin));
    }

    for shot in &mut state.enemy_bullets {
        shot.update(dt);
    }
    for obstacle in &mut state.obstacles {
        obstacle.update(dt);
    }
    state.scroll_offset += BACKGROUND_SCROLL_SPEED * dt;

    // Lifecycle sweep: entities deactivated above, or by last frame's
    // collisions, leave the live set here, each observed exactly once
    sweep(&mut state.bullets, events);
    sweep(&mut state.enemies, events);
    sweep(&mut state.enemy_bullets, events);
    sweep(&mut state.obstacles, events);

    // Collision passes, fixed order
    let destroyed = collision::resolve_bullet_enemy(&mut state.bullets, &mut state.enemies);
    collision::resolve_bullet_obstacle(&mut state.bullets, &state.obstacles);

    // Credit destroyed enemies by kind; removal happens at the next sweep
    if !destroyed.is_empty() {
        for &(_, kind) in &destroyed {
            ledger.add_enemy_score(kind);
        }
        state.stage_kills += destroyed.len() as u32;
        events.push(GameEvent::ScoreChanged {
            score: ledger.score(),
        });
    }

    if collision::player_hit_by_enemy(state.player.pos, &state.enemies) {
        damage_player(&mut state.player, events);
    }
    if collision::player_hit_by_obstacle(state.player.pos, &state.obstacles) {
        damage_player(&mut state.player, events);
    }
    if collision::player_hit_by_enemy_bullet(state.player.pos, &mut state.enemy_bullets) {
        damage_player(&mut state.player, events);
    }

    // Stage clear: award the bonus and suspend spawning
    if ledger.score() >= config.score_to_clear {
        let bonus = ledger.add_stage_bonus(state.stage);
        events.push(GameEvent::ScoreChanged {
            score: ledger.score(),
        });
        events.push(GameEvent::StageClear {
            stage: state.stage,
            score: ledger.score(),
            bonus,
        });
        state.phase = GamePhase::StageClear;
        state.stage_clear_left = STAGE_CLEAR_PAUSE_SECS;
        log::info!(
            "Stage {} clear: {} points ({} kills)",
            state.stage,
            ledger.score(),
            state.stage_kills
        );
        return;
    }

    // Defeat
    if state.player.hp == 0 {
        state.phase = GamePhase::GameOver;
        ledger.save_high_score();
        events.push(GameEvent::GameOver {
            score: ledger.score(),
            stage: state.stage,
        });
        log::info!(
            "Game over at stage {} with {} points",
            state.stage,
            ledger.score()
        );
        return;
    }

    // Spawning: scripted wave first, then cadence
    spawn_wave(state, config, dt, events);
    if state.wave_cursor >= config.wave.positions.len() {
        state.enemy_spawn_timer += dt;
        if state.enemy_spawn_timer >= config.enemy_spawn_interval {
            state.enemy_spawn_timer = 0.0;
            spawn_random_enemy(state, config, events);
        }
    }
    state.obstacle_spawn_timer += dt;
    if state.obstacle_spawn_timer >= config.obstacle_spawn_interval {
        state.obstacle_spawn_timer = 0.0;
        spawn_random_obstacle(state, events);
    }
}

/// Stage-clear interlude: gameplay is frozen, only the countdown runs. On
/// expiry the final stage ends the session; any other stage advances with a
/// cleared field and fresh timers.
fn advance_stage_clear(
    state: &mut GameState,
    ledger: &mut ScoreLedger,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    state.stage_clear_left -= dt;
    if state.stage_clear_left > 0.0 {
        return;
    }

    if state.stage as usize >= stages::STAGES.len() {
        state.phase = GamePhase::GameOver;
        ledger.save_high_score();
        events.push(GameEvent::GameOver {
            score: ledger.score(),
            stage: state.stage,
        });
        log::info!("Final stage cleared: {} points", ledger.score());
        return;
    }

    clear_entities(state, events);
    state.stage += 1;
    state.stage_kills = 0;
    state.enemy_spawn_timer = 0.0;
    state.obstacle_spawn_timer = 0.0;
    state.wave_cursor = 0;
    state.wave_timer = 0.0;
    state.phase = GamePhase::Playing;
    events.push(GameEvent::StageChanged { stage: state.stage });
    log::info!("Stage {} begins", state.stage);
}

fn damage_player(player: &mut Player, events: &mut Vec<GameEvent>) {
    let hp_before = player.hp;
    player.take_damage(1);
    if player.hp != hp_before {
        events.push(GameEvent::HpChanged { hp: player.hp });
    }
}

trait LiveEntity {
    fn id(&self) -> u32;
    fn active(&self) -> bool;
}

impl LiveEntity for Bullet {
    fn id(&self) -> u32 {
        self.id
    }
    fn active(&self) -> bool {
        self.active
    }
}

impl LiveEntity for Enemy {
    fn id(&self) -> u32 {
        self.id
    }
    fn active(&self) -> bool {
        self.active
    }
}

impl LiveEntity for EnemyBullet {
    fn id(&self) -> u32 {
        self.id
    }
    fn active(&self) -> bool {
        self.active
    }
}

impl LiveEntity for Obstacle {
    fn id(&self) -> u32 {
        self.id
    }
    fn active(&self) -> bool {
        self.active
    }
}

/// One compaction pass: entities whose active flag dropped leave the live
/// set, each emitting its destruction notification exactly once.
fn sweep<T: LiveEntity>(list: &mut Vec<T>, events: &mut Vec<GameEvent>) {
    list.retain(|entity| {
        if entity.active() {
            true
        } else {
            events.push(GameEvent::EntityDestroyed { id: entity.id() });
            false
        }
    });
}

/// Drop every entity, live or not, with a destruction notification each.
fn clear_entities(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for id in state
        .bullets
        .drain(..)
        .map(|b| b.id)
        .chain(state.enemies.drain(..).map(|e| e.id))
        .chain(state.enemy_bullets.drain(..).map(|s| s.id))
        .chain(state.obstacles.drain(..).map(|o| o.id))
    {
        events.push(GameEvent::EntityDestroyed { id });
    }
}

fn spawn_enemy(
    state: &mut GameState,
    kind: EnemyKind,
    pos: Vec3,
    config: &StageConfig,
    events: &mut Vec<GameEvent>,
) {
    let id = state.next_entity_id();
    let armed = config.enemies_can_shoot && kind == EnemyKind::B;
    events.push(GameEvent::EntitySpawned {
        id,
        kind: SpawnKind::Enemy(kind),
        pos,
    });
    state
        .enemies
        .push(Enemy::new(id, kind, pos, config.speed_multiplier, armed));
}

/// Release scripted wave entries whose delay has elapsed.
fn spawn_wave(
    state: &mut GameState,
    config: &StageConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let wave = &config.wave;
    if state.wave_cursor >= wave.positions.len() {
        return;
    }
    state.wave_timer += dt;
    while state.wave_timer >= wave.spawn_delay && state.wave_cursor < wave.positions.len() {
        state.wave_timer -= wave.spawn_delay;
        let pos = wave.positions[state.wave_cursor];
        state.wave_cursor += 1;
        spawn_enemy(state, wave.kind, pos, config, events);
    }
}

fn spawn_random_enemy(state: &mut GameState, config: &StageConfig, events: &mut Vec<GameEvent>) {
    let x = state.rng.random_range(-ENEMY_SPAWN_X..=ENEMY_SPAWN_X);
    let y = state.rng.random_range(-ENEMY_SPAWN_Y..=ENEMY_SPAWN_Y);
    let kind = match state.rng.random_range(0..3u8) {
        0 => EnemyKind::A,
        1 => EnemyKind::B,
        _ => EnemyKind::C,
    };
    spawn_enemy(state, kind, Vec3::new(x, y, SPAWN_DEPTH), config, events);
}

fn spawn_random_obstacle(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let x = state.rng.random_range(-ENEMY_SPAWN_X..=ENEMY_SPAWN_X);
    let y = state.rng.random_range(-OBSTACLE_SPAWN_Y..=OBSTACLE_SPAWN_Y);
    let shape = if state.rng.random_bool(0.5) {
        ObstacleShape::Rock
    } else {
        ObstacleShape::Pillar
    };
    let id = state.next_entity_id();
    let pos = Vec3::new(x, y, SPAWN_DEPTH);
    events.push(GameEvent::EntitySpawned {
        id,
        kind: SpawnKind::Obstacle(shape),
        pos,
    });
    state.obstacles.push(Obstacle::new(id, shape, pos));
}
