/// Hit detection and hit effects.
///
/// Every pass only marks entities inactive; nothing is removed here.
/// Removal happens in `compute::sweep` once all passes have run, so each
/// pass sees the deactivations made earlier in the same step.

use crate::consts::*;
use crate::entities::{Entity, GameState};
use crate::spawner::{
    spawn_particles, RandomSource, ENEMY_HIT_BURST, ENEMY_KILL_BURST, PLAYER_RAM_BURST,
    PLAYER_SHOT_BURST,
};

/// Strict AABB overlap between two active entities.  Rectangles that only
/// touch along an edge do not collide.
pub fn collides(a: &impl Entity, b: &impl Entity) -> bool {
    let (a, b) = (a.body(), b.body());
    a.active
        && b.active
        && a.x < b.x + b.width
        && a.x + a.width > b.x
        && a.y < b.y + b.height
        && a.y + a.height > b.y
}

/// Run all three hit passes for one step.
pub fn resolve_collisions(state: &mut GameState, rng: &mut impl RandomSource) {
    player_bullets_vs_enemies(state, rng);
    enemy_bullets_vs_player(state, rng);
    enemies_vs_player(state, rng);
}

/// Each player bullet damages at most one enemy: the first it overlaps in
/// collection order.
pub fn player_bullets_vs_enemies(state: &mut GameState, rng: &mut impl RandomSource) {
    for bullet in state.bullets.iter_mut().filter(|b| b.from_player()) {
        let Some(enemy) = state.enemies.iter_mut().find(|e| collides(&*bullet, &**e)) else {
            continue;
        };

        bullet.deactivate();
        enemy.health -= 1;

        let (cx, cy) = enemy.body.center();
        spawn_particles(&mut state.particles, cx, cy, ENEMY_HIT_BURST, rng);

        if enemy.health <= 0 {
            enemy.deactivate();
            state.score += ENEMY_SCORE;
            spawn_particles(&mut state.particles, cx, cy, ENEMY_KILL_BURST, rng);
            log::debug!("enemy destroyed, score {}", state.score);
        }
    }
}

pub fn enemy_bullets_vs_player(state: &mut GameState, rng: &mut impl RandomSource) {
    let player = &mut state.player;
    for bullet in state.bullets.iter_mut().filter(|b| !b.from_player()) {
        if collides(&*bullet, &*player) {
            bullet.deactivate();
            player.health -= BULLET_HIT_DAMAGE;
            let (cx, cy) = player.body.center();
            spawn_particles(&mut state.particles, cx, cy, PLAYER_SHOT_BURST, rng);
        }
    }
}

pub fn enemies_vs_player(state: &mut GameState, rng: &mut impl RandomSource) {
    let player = &mut state.player;
    for enemy in state.enemies.iter_mut() {
        if collides(&*enemy, &*player) {
            enemy.deactivate();
            player.health -= BODY_HIT_DAMAGE;
            let (cx, cy) = player.body.center();
            spawn_particles(&mut state.particles, cx, cy, PLAYER_RAM_BURST, rng);
        }
    }
}
