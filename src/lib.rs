//! Single-screen arcade shooter.
//!
//! Core modules:
//! - `entities`: pure data (bodies, player, bullets, enemies, particles, game state)
//! - `spawner`: randomized enemy spawns, particle bursts and shots
//! - `collision`: AABB overlap and the per-step hit resolution
//! - `compute`: the per-frame simulation step and session transitions
//! - `input`: held-key tracking for terminals without release events
//! - `display`: terminal rendering (reads state, never mutates it)

pub mod collision;
pub mod compute;
pub mod display;
pub mod entities;
pub mod input;
pub mod spawner;

/// Gameplay constants. Fixed at compile time.
pub mod consts {
    // Arena size in logical units
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Upper bound on a single simulation step (seconds)
    pub const MAX_DT: f32 = 0.05;

    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_START_X: f32 = SCREEN_WIDTH / 2.0 - 20.0;
    pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT - 80.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Per-axis movement speed; diagonals are not normalized
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.2;

    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const PLAYER_BULLET_SPEED: f32 = -500.0;
    pub const ENEMY_BULLET_SPEED: f32 = 300.0;
    /// Bullets die once they leave the arena by this margin
    pub const BULLET_MARGIN: f32 = 20.0;

    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_HEALTH: i32 = 2;
    pub const ENEMY_SPEED: f32 = 30.0;
    pub const ENEMY_SPAWN_Y: f32 = -50.0;
    pub const ENEMY_SPAWN_MIN_X: f32 = 20.0;
    pub const ENEMY_SPAWN_MAX_X: f32 = SCREEN_WIDTH - 60.0;
    pub const ENEMY_SHOOT_INTERVAL: f32 = 2.0;
    /// Enemies die once they fall this far below the arena
    pub const ENEMY_MARGIN: f32 = 50.0;
    pub const ENEMY_SCORE: u32 = 10;

    pub const PARTICLE_SIZE: f32 = 3.0;
    pub const PARTICLE_DECAY: f32 = 2.0;
    pub const PARTICLE_MIN_SPEED: f32 = 50.0;
    pub const PARTICLE_MAX_SPEED: f32 = 200.0;

    /// Spawn interval curve: max(MIN, BASE - game_time * RAMP)
    pub const SPAWN_INTERVAL_BASE: f32 = 2.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.5;
    pub const SPAWN_INTERVAL_RAMP: f32 = 0.05;

    pub const BULLET_HIT_DAMAGE: i32 = 10;
    pub const BODY_HIT_DAMAGE: i32 = 20;
}
