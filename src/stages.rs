//! Ordered, immutable stage catalog.
//!
//! Pure lookup, clamped at both ends; difficulty rises by convention, not by
//! any structural check. Colors are packed `0xRRGGBB` for the presentation
//! layer.

use glam::Vec3;

use crate::sim::state::EnemyKind;

/// A checkerboard color pair for ground or ceiling surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub primary: u32,
    pub secondary: u32,
}

/// One stage's scripted opening wave: `positions.len()` enemies of a single
/// kind, released one per `spawn_delay` seconds starting at stage entry.
#[derive(Debug, Clone, Copy)]
pub struct WavePattern {
    pub kind: EnemyKind,
    pub positions: &'static [Vec3],
    pub spawn_delay: f32,
}

/// Configuration for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageConfig {
    pub stage_number: u32,
    /// Seconds between random enemy spawns once the wave is drained
    pub enemy_spawn_interval: f32,
    /// Seconds between random obstacle spawns
    pub obstacle_spawn_interval: f32,
    /// Score at which the stage is cleared
    pub score_to_clear: u64,
    /// Forward-speed multiplier applied to enemies
    pub speed_multiplier: f32,
    pub has_ceiling: bool,
    /// Whether weavers spawn armed
    pub enemies_can_shoot: bool,
    pub background_color: u32,
    pub ground_colors: ColorPair,
    pub ceiling_colors: Option<ColorPair>,
    pub wave: WavePattern,
}

/// The catalog, in play order.
pub static STAGES: [StageConfig; 5] = [
    // Stage 1: tutorial pace, open sky
    StageConfig {
        stage_number: 1,
        enemy_spawn_interval: 2.5,
        obstacle_spawn_interval: 5.0,
        score_to_clear: 1000,
        speed_multiplier: 1.0,
        has_ceiling: false,
        enemies_can_shoot: false,
        background_color: 0x87CEEB,
        ground_colors: ColorPair { primary: 0x00FF00, secondary: 0x00AA00 },
        ceiling_colors: None,
        wave: WavePattern {
            kind: EnemyKind::A,
            positions: &[
                Vec3::new(0.0, 0.0, -100.0),
                Vec3::new(-5.0, 2.0, -110.0),
                Vec3::new(5.0, 2.0, -110.0),
            ],
            spawn_delay: 1.0,
        },
    },
    // Stage 2: weavers arrive
    StageConfig {
        stage_number: 2,
        enemy_spawn_interval: 2.0,
        obstacle_spawn_interval: 4.5,
        score_to_clear: 3000,
        speed_multiplier: 1.1,
        has_ceiling: false,
        enemies_can_shoot: false,
        background_color: 0xFF6347,
        ground_colors: ColorPair { primary: 0xFF8800, secondary: 0xCC6600 },
        ceiling_colors: None,
        wave: WavePattern {
            kind: EnemyKind::B,
            positions: &[
                Vec3::new(-8.0, 0.0, -100.0),
                Vec3::new(0.0, 3.0, -105.0),
                Vec3::new(8.0, 0.0, -100.0),
            ],
            spawn_delay: 1.5,
        },
    },
    // Stage 3: trackers, enclosed cavern, armed weavers
    StageConfig {
        stage_number: 3,
        enemy_spawn_interval: 1.8,
        obstacle_spawn_interval: 4.0,
        score_to_clear: 6000,
        speed_multiplier: 1.2,
        has_ceiling: true,
        enemies_can_shoot: true,
        background_color: 0x9370DB,
        ground_colors: ColorPair { primary: 0xFF00FF, secondary: 0xAA00AA },
        ceiling_colors: Some(ColorPair { primary: 0x8800FF, secondary: 0x550099 }),
        wave: WavePattern {
            kind: EnemyKind::C,
            positions: &[
                Vec3::new(-10.0, -2.0, -100.0),
                Vec3::new(10.0, -2.0, -100.0),
                Vec3::new(0.0, 5.0, -95.0),
            ],
            spawn_delay: 1.2,
        },
    },
    // Stage 4: dense runner swarm
    StageConfig {
        stage_number: 4,
        enemy_spawn_interval: 1.5,
        obstacle_spawn_interval: 3.5,
        score_to_clear: 10_000,
        speed_multiplier: 1.35,
        has_ceiling: true,
        enemies_can_shoot: true,
        background_color: 0xFF1493,
        ground_colors: ColorPair { primary: 0xFF0000, secondary: 0xAA0000 },
        ceiling_colors: Some(ColorPair { primary: 0xCC0044, secondary: 0x770022 }),
        wave: WavePattern {
            kind: EnemyKind::A,
            positions: &[
                Vec3::new(-8.0, 0.0, -100.0),
                Vec3::new(-4.0, 3.0, -105.0),
                Vec3::new(0.0, -3.0, -100.0),
                Vec3::new(4.0, 3.0, -105.0),
                Vec3::new(8.0, 0.0, -100.0),
            ],
            spawn_delay: 1.0,
        },
    },
    // Stage 5: final gauntlet
    StageConfig {
        stage_number: 5,
        enemy_spawn_interval: 1.2,
        obstacle_spawn_interval: 3.0,
        score_to_clear: 15_000,
        speed_multiplier: 1.5,
        has_ceiling: true,
        enemies_can_shoot: true,
        background_color: 0x000080,
        ground_colors: ColorPair { primary: 0x0000FF, secondary: 0x0000AA },
        ceiling_colors: Some(ColorPair { primary: 0x000066, secondary: 0x000033 }),
        wave: WavePattern {
            kind: EnemyKind::C,
            positions: &[
                Vec3::new(-10.0, 5.0, -100.0),
                Vec3::new(-5.0, -5.0, -95.0),
                Vec3::new(0.0, 0.0, -105.0),
                Vec3::new(5.0, -5.0, -95.0),
                Vec3::new(10.0, 5.0, -100.0),
            ],
            spawn_delay: 0.8,
        },
    },
];

/// 1-indexed stage lookup, clamped to the catalog at both ends: anything
/// below 1 yields the first entry, anything past the end yields the last.
pub fn lookup(stage_number: u32) -> &'static StageConfig {
    let idx = (stage_number.max(1) as usize - 1).min(STAGES.len() - 1);
    &STAGES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_clamps_below_one() {
        assert!(std::ptr::eq(lookup(0), lookup(1)));
        assert_eq!(lookup(0).stage_number, 1);
    }

    #[test]
    fn lookup_clamps_past_end() {
        let last = STAGES.len() as u32;
        assert!(std::ptr::eq(lookup(999), lookup(last)));
        assert_eq!(lookup(999).stage_number, last);
    }

    #[test]
    fn stage_numbers_match_positions() {
        for (i, stage) in STAGES.iter().enumerate() {
            assert_eq!(stage.stage_number as usize, i + 1);
        }
    }

    #[test]
    fn thresholds_rise_monotonically() {
        for pair in STAGES.windows(2) {
            assert!(pair[1].score_to_clear > pair[0].score_to_clear);
        }
    }

    #[test]
    fn ceiling_colors_present_when_flagged() {
        for stage in &STAGES {
            assert_eq!(stage.has_ceiling, stage.ceiling_colors.is_some());
        }
    }

    #[test]
    fn waves_spawn_in_front_of_the_player() {
        for stage in &STAGES {
            assert!(!stage.wave.positions.is_empty());
            assert!(stage.wave.spawn_delay > 0.0);
            for pos in stage.wave.positions {
                assert!(pos.z < -50.0);
            }
        }
    }
}
