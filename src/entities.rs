/// All game entity types — pure data, plus the shared kinematic body.

use crate::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ── Shared body ───────────────────────────────────────────────────────────────

/// Position, size and velocity shared by every entity kind.
///
/// `active == false` means "pending removal": the entity no longer moves,
/// collides or renders, and is dropped by the next sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub active: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height, vx: 0.0, vy: 0.0, active: true }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Explicit Euler step.
    pub fn integrate(&mut self, dt: f32) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Anything with a body. Collision and integration are written against this.
pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn deactivate(&mut self) {
        self.body_mut().active = false;
    }
}

macro_rules! impl_entity {
    ($($ty:ty),*) => {
        $(impl Entity for $ty {
            fn body(&self) -> &Body {
                &self.body
            }
            fn body_mut(&mut self) -> &mut Body {
                &mut self.body
            }
        })*
    };
}

impl_entity!(Player, Bullet, Enemy, Particle);

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub body: Body,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn new(x: f32, y: f32, vy: f32, owner: BulletOwner) -> Self {
        Self {
            body: Body::new(x, y, BULLET_WIDTH, BULLET_HEIGHT).with_velocity(0.0, vy),
            owner,
        }
    }

    pub fn from_player(&self) -> bool {
        self.owner == BulletOwner::Player
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    /// Clamped to >= 0 before the game-over check.
    pub health: i32,
    /// Seconds until the next shot is allowed.
    pub shoot_cooldown: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            health: PLAYER_MAX_HEALTH,
            shoot_cooldown: 0.0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START_X, PLAYER_START_Y)
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: Body,
    pub health: i32,
    /// Seconds since this enemy last fired (or spawned).
    pub shoot_timer: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT).with_velocity(0.0, ENEMY_SPEED),
            health: ENEMY_HEALTH,
            shoot_timer: 0.0,
        }
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Particle {
    pub body: Body,
    /// Remaining life in [0, 1]; also used as render intensity.
    pub life: f32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, color: Rgb) -> Self {
        Self {
            body: Body::new(x, y, PARTICLE_SIZE, PARTICLE_SIZE).with_velocity(vx, vy),
            life: 1.0,
            color,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so the pure update functions in
/// `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Player and enemy bullets share one collection; `owner` tells them apart.
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub score: u32,
    /// Counts down to the next enemy spawn.
    pub enemy_spawn_timer: f32,
    /// Seconds of simulated play this session; drives the difficulty ramp.
    pub game_time: f32,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            score: 0,
            enemy_spawn_timer: 0.0,
            game_time: 0.0,
            status: GameStatus::Playing,
        }
    }
}
