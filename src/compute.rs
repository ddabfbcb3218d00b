/// Game-logic functions.
///
/// The public transitions take an immutable reference to the current
/// `GameState` (and, where needed, a random source) and return a brand-new
/// `GameState`.  Internally a step runs a fixed sequence of in-place passes
/// on that copy: kinematics and spawns, collisions, the game-over check,
/// then one sweep of inactive entities.

use std::time::Duration;

use crate::collision::resolve_collisions;
use crate::consts::*;
use crate::entities::{Entity, GameState, GameStatus, Player};
use crate::spawner::{
    enemy_bullet, player_bullet, spawn_particles, update_enemy_spawns, RandomSource,
    PLAYER_DEATH_BURST,
};

/// Player intent sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh session: full health, ship at bottom-centre, nothing else on screen.
pub fn init_state() -> GameState {
    GameState::default()
}

/// Start over after a game over.  Ignored while still playing.
pub fn restart(state: &GameState) -> GameState {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    log::info!("restarting session (previous score {})", state.score);
    init_state()
}

// ── Input-driven transitions (pure) ─────────────────────────────────────────

/// Set the ship's velocity from the held direction keys and fire if
/// allowed.  Each axis is independent, so diagonals run at √2 × speed.
pub fn apply_controls(state: &GameState, controls: &Controls) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let mut next = state.clone();
    let body = &mut next.player.body;
    body.vx = axis(controls.left, controls.right) * PLAYER_SPEED;
    body.vy = axis(controls.up, controls.down) * PLAYER_SPEED;

    if controls.fire {
        next = player_shoot(&next);
    }
    next
}

/// Later key wins when both directions are held.
fn axis(negative: bool, positive: bool) -> f32 {
    if positive {
        1.0
    } else if negative {
        -1.0
    } else {
        0.0
    }
}

/// Fire one bullet from the ship unless the cooldown is still running.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.player.shoot_cooldown > 0.0 {
        return state.clone();
    }
    let mut next = state.clone();
    next.bullets.push(player_bullet(&next.player));
    next.player.shoot_cooldown = PLAYER_SHOOT_COOLDOWN;
    next
}

// ── Per-frame tick (nearly pure — randomness is injected) ───────────────────

/// Step length for a frame that took `elapsed` of wall-clock time.
/// Capped at `MAX_DT` so a hitch cannot produce one huge step; there is no
/// lower bound.
pub fn frame_dt(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32().min(MAX_DT)
}

/// Advance the simulation by `dt` seconds (at most `MAX_DT`).  All
/// randomness comes through `rng` so callers control determinism.  Does
/// nothing after a game over.
pub fn tick(state: &GameState, dt: f32, rng: &mut impl RandomSource) -> GameState {
    let mut next = state.clone();
    if next.status == GameStatus::GameOver {
        return next;
    }
    let dt = dt.min(MAX_DT);

    next.game_time += dt;
    next.player.shoot_cooldown -= dt;

    update_enemy_spawns(&mut next, dt, rng);
    update_player(&mut next.player, dt);
    update_bullets(&mut next, dt);
    update_enemies(&mut next, dt);
    update_particles(&mut next, dt);

    resolve_collisions(&mut next, rng);
    check_game_over(&mut next, rng);

    sweep(&mut next);
    next
}

/// Integrate and clamp the ship to the arena.  A hard stop, not a bounce.
pub fn update_player(player: &mut Player, dt: f32) {
    let body = &mut player.body;
    body.integrate(dt);
    body.x = body.x.clamp(0.0, SCREEN_WIDTH - body.width);
    body.y = body.y.clamp(0.0, SCREEN_HEIGHT - body.height);
}

pub fn update_bullets(state: &mut GameState, dt: f32) {
    for bullet in state.bullets.iter_mut().filter(|b| b.is_active()) {
        bullet.body.integrate(dt);
        let y = bullet.body.y;
        if y < -BULLET_MARGIN || y > SCREEN_HEIGHT + BULLET_MARGIN {
            bullet.deactivate();
        }
    }
}

/// Move enemies and run their independent fire cadence.  Shots fired here
/// join the collection after the pass, so they are not moved this step.
pub fn update_enemies(state: &mut GameState, dt: f32) {
    let mut fired = Vec::new();

    for enemy in state.enemies.iter_mut().filter(|e| e.is_active()) {
        enemy.body.integrate(dt);
        enemy.shoot_timer += dt;

        if enemy.shoot_timer >= ENEMY_SHOOT_INTERVAL {
            fired.push(enemy_bullet(enemy));
            enemy.shoot_timer = 0.0;
        }

        if enemy.body.y > SCREEN_HEIGHT + ENEMY_MARGIN {
            enemy.deactivate();
        }
    }

    state.bullets.append(&mut fired);
}

pub fn update_particles(state: &mut GameState, dt: f32) {
    for particle in state.particles.iter_mut().filter(|p| p.is_active()) {
        particle.body.integrate(dt);
        particle.life -= dt * PARTICLE_DECAY;
        if particle.life <= 0.0 {
            particle.deactivate();
        }
    }
}

/// Clamp health at zero and end the session once it is gone.
pub fn check_game_over(state: &mut GameState, rng: &mut impl RandomSource) {
    state.player.health = state.player.health.max(0);
    if state.player.health > 0 {
        return;
    }

    state.status = GameStatus::GameOver;
    let (cx, cy) = state.player.body.center();
    spawn_particles(&mut state.particles, cx, cy, PLAYER_DEATH_BURST, rng);
    log::info!(
        "game over: score {} after {:.1}s",
        state.score,
        state.game_time
    );
}

/// Drop every inactive bullet, enemy and particle, keeping survivor order.
pub fn sweep(state: &mut GameState) {
    state.bullets.retain(|b| b.is_active());
    state.enemies.retain(|e| e.is_active());
    state.particles.retain(|p| p.is_active());
}
