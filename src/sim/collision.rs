//! Pairwise sphere collision passes.
//!
//! Evaluation order is fixed: player bullets against enemies, then against
//! obstacles, then hostiles against the player. Within a pass, scanning is
//! insertion order and the first match wins.

use glam::Vec3;

use crate::consts::*;
use super::geometry::sphere_overlap;
use super::state::{Bullet, Enemy, EnemyBullet, EnemyKind, Obstacle};

/// Bullets against enemies: each active bullet damages the first overlapping
/// enemy by one unit and stops. A bullet damages at most one enemy per pass.
/// Returns the enemies destroyed here as `(id, kind)` so the caller can
/// credit score before the sweep removes them.
pub fn resolve_bullet_enemy(bullets: &mut [Bullet], enemies: &mut [Enemy]) -> Vec<(u32, EnemyKind)> {
    let mut destroyed = Vec::new();
    for bullet in bullets.iter_mut().filter(|b| b.active) {
        for enemy in enemies.iter_mut().filter(|e| e.active) {
            if sphere_overlap(bullet.pos, BULLET_RADIUS, enemy.pos, ENEMY_HIT_RADIUS) {
                bullet.active = false;
                if enemy.take_damage(1) {
                    destroyed.push((enemy.id, enemy.kind));
                }
                break;
            }
        }
    }
    destroyed
}

/// Bullets against obstacles: obstacles stop bullets but are never destroyed
/// by them.
pub fn resolve_bullet_obstacle(bullets: &mut [Bullet], obstacles: &[Obstacle]) {
    for bullet in bullets.iter_mut().filter(|b| b.active) {
        for obstacle in obstacles.iter().filter(|o| o.active) {
            if sphere_overlap(bullet.pos, BULLET_RADIUS, obstacle.pos, OBSTACLE_HIT_RADIUS) {
                bullet.active = false;
                break;
            }
        }
    }
}

/// True when any active enemy overlaps the player. At most one damage event
/// per frame regardless of how many enemies overlap.
pub fn player_hit_by_enemy(player_pos: Vec3, enemies: &[Enemy]) -> bool {
    enemies
        .iter()
        .filter(|e| e.active)
        .any(|e| sphere_overlap(player_pos, PLAYER_RADIUS, e.pos, ENEMY_BODY_RADIUS))
}

/// True when any active obstacle overlaps the player.
pub fn player_hit_by_obstacle(player_pos: Vec3, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .filter(|o| o.active)
        .any(|o| sphere_overlap(player_pos, PLAYER_RADIUS, o.pos, OBSTACLE_BODY_RADIUS))
}

/// Enemy shots against the player: the first overlapping shot is consumed
/// and reports a hit.
pub fn player_hit_by_enemy_bullet(player_pos: Vec3, shots: &mut [EnemyBullet]) -> bool {
    for shot in shots.iter_mut().filter(|s| s.active) {
        if sphere_overlap(player_pos, PLAYER_RADIUS, shot.pos, ENEMY_BULLET_RADIUS) {
            shot.active = false;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleShape;

    fn enemy_at(id: u32, kind: EnemyKind, pos: Vec3) -> Enemy {
        Enemy::new(id, kind, pos, 1.0, false)
    }

    #[test]
    fn bullet_damages_first_enemy_only() {
        let mut bullets = vec![Bullet::new(1, Vec3::new(0.0, 0.0, -50.0))];
        let mut enemies = vec![
            enemy_at(2, EnemyKind::B, Vec3::new(0.5, 0.0, -50.0)),
            enemy_at(3, EnemyKind::A, Vec3::new(-0.5, 0.0, -50.0)),
        ];

        let destroyed = resolve_bullet_enemy(&mut bullets, &mut enemies);

        // First enemy in insertion order takes the hit; it survives (hp 2),
        // so nothing is destroyed, but the second enemy is untouched.
        assert!(destroyed.is_empty());
        assert!(!bullets[0].active);
        assert_eq!(enemies[0].hp, 1);
        assert_eq!(enemies[1].hp, 1); // kind A spawns with 1 hp
        assert!(enemies[1].active);
    }

    #[test]
    fn destroyed_enemy_reports_kind_for_scoring() {
        let mut bullets = vec![Bullet::new(1, Vec3::new(0.0, 0.0, -50.0))];
        let mut enemies = vec![enemy_at(2, EnemyKind::A, Vec3::new(0.0, 0.0, -50.5))];

        let destroyed = resolve_bullet_enemy(&mut bullets, &mut enemies);

        assert_eq!(destroyed, vec![(2, EnemyKind::A)]);
        assert!(!enemies[0].active);
        assert_eq!(enemies[0].hp, 0);
    }

    #[test]
    fn inactive_bullets_and_enemies_are_skipped() {
        let mut bullets = vec![Bullet::new(1, Vec3::new(0.0, 0.0, -50.0))];
        bullets[0].active = false;
        let mut enemies = vec![enemy_at(2, EnemyKind::A, Vec3::new(0.0, 0.0, -50.0))];

        let destroyed = resolve_bullet_enemy(&mut bullets, &mut enemies);
        assert!(destroyed.is_empty());
        assert_eq!(enemies[0].hp, 1);

        // And an inactive enemy never absorbs a live bullet
        let mut bullets = vec![Bullet::new(3, Vec3::new(0.0, 0.0, -50.0))];
        enemies[0].active = false;
        let destroyed = resolve_bullet_enemy(&mut bullets, &mut enemies);
        assert!(destroyed.is_empty());
        assert!(bullets[0].active);
    }

    #[test]
    fn obstacle_stops_bullet_but_survives() {
        let mut bullets = vec![Bullet::new(1, Vec3::new(0.0, 0.0, -50.0))];
        let obstacles = vec![Obstacle::new(2, ObstacleShape::Rock, Vec3::new(1.0, 0.0, -50.0))];

        resolve_bullet_obstacle(&mut bullets, &obstacles);

        assert!(!bullets[0].active);
        assert!(obstacles[0].active);
    }

    #[test]
    fn player_enemy_contact_detected_once() {
        let enemies = vec![
            enemy_at(1, EnemyKind::A, Vec3::new(0.5, 0.0, 0.0)),
            enemy_at(2, EnemyKind::A, Vec3::new(-0.5, 0.0, 0.0)),
        ];
        // Two overlapping enemies still yield a single boolean hit
        assert!(player_hit_by_enemy(Vec3::ZERO, &enemies));
        assert!(!player_hit_by_enemy(Vec3::new(0.0, 0.0, 100.0), &enemies));
    }

    #[test]
    fn enemy_shot_consumed_on_player_hit() {
        let mut shots = vec![
            EnemyBullet::new(1, Vec3::new(0.5, 0.0, 0.0), Vec3::Z),
            EnemyBullet::new(2, Vec3::new(-0.5, 0.0, 0.0), Vec3::Z),
        ];
        assert!(player_hit_by_enemy_bullet(Vec3::ZERO, &mut shots));
        // Only the first overlapping shot is consumed
        assert!(!shots[0].active);
        assert!(shots[1].active);
    }
}
