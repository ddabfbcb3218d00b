/// Entity factories.
///
/// All randomness flows through a `RandomSource` so callers control
/// determinism: the game passes a seeded `StdRng`, tests pass fixed
/// sequences.

use std::f32::consts::TAU;

use rand::Rng;

use crate::consts::*;
use crate::entities::{Bullet, BulletOwner, Enemy, GameState, Particle, Player, Rgb};

/// Uniform float draws over `[low, high)`.
pub trait RandomSource {
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.gen_range(low..high)
    }
}

// ── Particle bursts ──────────────────────────────────────────────────────────

/// Colour and size of one kind of explosion effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Burst {
    pub color: Rgb,
    pub count: usize,
}

/// Player bullet damages an enemy.
pub const ENEMY_HIT_BURST: Burst = Burst { color: Rgb::new(255, 100, 100), count: 5 };
/// Enemy destroyed by player fire.
pub const ENEMY_KILL_BURST: Burst = Burst { color: Rgb::new(255, 150, 0), count: 20 };
/// Enemy bullet hits the player.
pub const PLAYER_SHOT_BURST: Burst = Burst { color: Rgb::new(255, 50, 50), count: 8 };
/// Enemy rams the player.
pub const PLAYER_RAM_BURST: Burst = Burst { color: Rgb::new(255, 0, 0), count: 15 };
/// Player destroyed.
pub const PLAYER_DEATH_BURST: Burst = Burst { color: Rgb::new(100, 200, 255), count: 30 };

/// Emit `burst.count` particles at `(x, y)`, each with a random heading
/// and speed.
pub fn spawn_particles(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    burst: Burst,
    rng: &mut impl RandomSource,
) {
    particles.reserve(burst.count);
    for _ in 0..burst.count {
        let angle = rng.uniform(0.0, TAU);
        let speed = rng.uniform(PARTICLE_MIN_SPEED, PARTICLE_MAX_SPEED);
        particles.push(Particle::new(
            x,
            y,
            speed * angle.cos(),
            speed * angle.sin(),
            burst.color,
        ));
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// A fresh enemy just above the arena at a random column.
pub fn spawn_enemy(rng: &mut impl RandomSource) -> Enemy {
    let x = rng.uniform(ENEMY_SPAWN_MIN_X, ENEMY_SPAWN_MAX_X);
    Enemy::new(x, ENEMY_SPAWN_Y)
}

/// Seconds until the next enemy, as a function of elapsed play time.
/// Non-increasing in `game_time`, floored at `SPAWN_INTERVAL_MIN`.
pub fn spawn_interval(game_time: f32) -> f32 {
    (SPAWN_INTERVAL_BASE - game_time * SPAWN_INTERVAL_RAMP).max(SPAWN_INTERVAL_MIN)
}

/// Count the spawn timer down by `dt`; spawn and rearm once it runs out.
pub fn update_enemy_spawns(state: &mut GameState, dt: f32, rng: &mut impl RandomSource) {
    state.enemy_spawn_timer -= dt;
    if state.enemy_spawn_timer <= 0.0 {
        let enemy = spawn_enemy(rng);
        log::debug!("enemy spawned at x={:.1} (t={:.2}s)", enemy.body.x, state.game_time);
        state.enemies.push(enemy);
        state.enemy_spawn_timer = spawn_interval(state.game_time);
    }
}

// ── Shots ────────────────────────────────────────────────────────────────────

/// Upward bullet from the centre of the ship's nose.
pub fn player_bullet(player: &Player) -> Bullet {
    let b = &player.body;
    Bullet::new(
        b.x + b.width / 2.0 - BULLET_WIDTH / 2.0,
        b.y,
        PLAYER_BULLET_SPEED,
        BulletOwner::Player,
    )
}

/// Downward bullet from the enemy's underside.
pub fn enemy_bullet(enemy: &Enemy) -> Bullet {
    let b = &enemy.body;
    Bullet::new(
        b.x + b.width / 2.0 - BULLET_WIDTH / 2.0,
        b.y + b.height,
        ENEMY_BULLET_SPEED,
        BulletOwner::Enemy,
    )
}
