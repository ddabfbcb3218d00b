/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// arena coordinates into terminal cells and cells into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::consts::{PLAYER_MAX_HEALTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{Body, BulletOwner, GameState, GameStatus, Rgb};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Rgb = Rgb::new(10, 10, 30);
const C_STAR: Rgb = Rgb::new(255, 255, 255);
const C_PLAYER: Rgb = Rgb::new(100, 200, 255);
const C_COCKPIT: Rgb = Rgb::new(150, 220, 255);
const C_BULLET_PLAYER: Rgb = Rgb::new(255, 255, 100);
const C_BULLET_ENEMY: Rgb = Rgb::new(255, 50, 50);
const C_ENEMY: Rgb = Rgb::new(255, 50, 50);
const C_ENEMY_EYE: Rgb = Rgb::new(255, 200, 0);
const C_HEALTH_BG: Rgb = Rgb::new(50, 50, 50);
const C_TEXT: Rgb = Rgb::new(255, 255, 255);
const C_GAME_OVER: Rgb = Rgb::new(255, 50, 50);

const STAR_COUNT: u32 = 100;
const STAR_SCROLL_SPEED: f32 = 20.0;
/// Width of the HUD health bar in cells.
pub const HEALTH_BAR_CELLS: u16 = 20;

const FILL: &str = "█";

fn color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

// ── Arena → terminal mapping ─────────────────────────────────────────────────

/// A clipped rectangle of terminal cells.  `col..col_end`, `row..row_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub col_end: u16,
    pub row_end: u16,
}

/// Scales the 800×600 arena onto the terminal below the HUD row(s).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Playfield size in cells
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub const HUD_ROWS: u16 = 1;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            cols: term_cols.max(1),
            rows: term_rows.saturating_sub(Self::HUD_ROWS).max(1),
        }
    }

    fn col_of(&self, x: f32) -> f32 {
        x * self.cols as f32 / SCREEN_WIDTH
    }

    fn row_of(&self, y: f32) -> f32 {
        y * self.rows as f32 / SCREEN_HEIGHT
    }

    /// Cells covered by an arena rectangle.  Anything visible covers at
    /// least one cell; `None` when it lies entirely outside the arena.
    pub fn cell_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Option<CellRect> {
        let (c0, c1) = span(self.col_of(x), self.col_of(x + w), self.cols)?;
        let (r0, r1) = span(self.row_of(y), self.row_of(y + h), self.rows)?;
        Some(CellRect {
            col: c0,
            row: r0 + Self::HUD_ROWS,
            col_end: c1,
            row_end: r1 + Self::HUD_ROWS,
        })
    }

    pub fn body_rect(&self, body: &Body) -> Option<CellRect> {
        self.cell_rect(body.x, body.y, body.width, body.height)
    }
}

/// Map a fractional `[start, end)` cell span onto `[0, limit)`.
fn span(start: f32, end: f32, limit: u16) -> Option<(u16, u16)> {
    let limit_f = limit as f32;
    if end <= 0.0 || start >= limit_f {
        return None;
    }
    let first = start.floor().max(0.0);
    let last = end.ceil().min(limit_f).max(first + 1.0);
    Some((first as u16, (last as u16).min(limit)))
}

// ── HUD maths ────────────────────────────────────────────────────────────────

/// Red at zero health, green at full.
pub fn health_bar_color(health: i32) -> Rgb {
    let h = health.clamp(0, PLAYER_MAX_HEALTH);
    Rgb::new(
        (255 - h * 155 / PLAYER_MAX_HEALTH) as u8,
        (h * 255 / PLAYER_MAX_HEALTH) as u8,
        0,
    )
}

/// Filled portion of a `total`-cell health bar.
pub fn health_bar_fill(health: i32, total: u16) -> u16 {
    let h = health.clamp(0, PLAYER_MAX_HEALTH);
    (h * total as i32 / PLAYER_MAX_HEALTH) as u16
}

/// Particles fade out with their remaining life.
pub fn fade(c: Rgb, life: f32) -> Rgb {
    let k = life.clamp(0.0, 1.0);
    let scale = |v: u8| (v as f32 * k).round() as u8;
    Rgb::new(scale(c.r), scale(c.g), scale(c.b))
}

/// Arena position of star `i` at a given play time; scrolls downward.
pub fn star_position(i: u32, game_time: f32) -> (f32, f32) {
    let scroll = (game_time * STAR_SCROLL_SPEED) as u32;
    let x = (i * 37) % SCREEN_WIDTH as u32;
    let y = (i * 73 + scroll) % SCREEN_HEIGHT as u32;
    (x as f32, y as f32)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height);

    out.queue(style::SetBackgroundColor(color(C_BACKGROUND)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.status {
        GameStatus::Playing => draw_playfield(out, state, &view)?,
        GameStatus::GameOver => draw_game_over(out, state, width, height)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_playfield<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    draw_stars(out, state.game_time, view)?;

    let p = &state.player.body;
    fill(out, view.body_rect(p), C_PLAYER)?;
    fill(out, view.cell_rect(p.x + 15.0, p.y + 5.0, 10.0, 10.0), C_COCKPIT)?;

    for bullet in state.bullets.iter().filter(|b| b.body.active) {
        let c = match bullet.owner {
            BulletOwner::Player => C_BULLET_PLAYER,
            BulletOwner::Enemy => C_BULLET_ENEMY,
        };
        fill(out, view.body_rect(&bullet.body), c)?;
    }

    for enemy in state.enemies.iter().filter(|e| e.body.active) {
        let b = &enemy.body;
        fill(out, view.body_rect(b), C_ENEMY)?;
        fill(out, view.cell_rect(b.x + 10.0, b.y + 15.0, 8.0, 8.0), C_ENEMY_EYE)?;
        fill(out, view.cell_rect(b.x + 22.0, b.y + 15.0, 8.0, 8.0), C_ENEMY_EYE)?;
    }

    for particle in state.particles.iter().filter(|p| p.body.active) {
        fill(out, view.body_rect(&particle.body), fade(particle.color, particle.life))?;
    }

    draw_hud(out, state)
}

fn fill<W: Write>(out: &mut W, rect: Option<CellRect>, c: Rgb) -> std::io::Result<()> {
    let Some(r) = rect else {
        return Ok(());
    };
    let line = FILL.repeat((r.col_end - r.col) as usize);
    out.queue(style::SetForegroundColor(color(c)))?;
    for row in r.row..r.row_end {
        out.queue(cursor::MoveTo(r.col, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_stars<W: Write>(out: &mut W, game_time: f32, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color(C_STAR)))?;
    for i in 0..STAR_COUNT {
        let (x, y) = star_position(i, game_time);
        if let Some(r) = view.cell_rect(x, y, 1.0, 1.0) {
            out.queue(cursor::MoveTo(r.col, r.row))?;
            out.queue(Print("."))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let health = state.player.health;
    let filled = health_bar_fill(health, HEALTH_BAR_CELLS);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(color(health_bar_color(health))))?;
    out.queue(Print(FILL.repeat(filled as usize)))?;
    out.queue(style::SetForegroundColor(color(C_HEALTH_BG)))?;
    out.queue(Print(FILL.repeat((HEALTH_BAR_CELLS - filled) as usize)))?;

    out.queue(cursor::MoveTo(HEALTH_BAR_CELLS + 3, 0))?;
    out.queue(style::SetForegroundColor(color(C_TEXT)))?;
    out.queue(Print(format!("SCORE: {}", state.score)))?;
    Ok(())
}

// ── Game-over screen ──────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("FINAL SCORE: {}", state.score);
    let lines: [(&str, Rgb); 3] = [
        ("GAME OVER", C_GAME_OVER),
        (score_line.as_str(), C_TEXT),
        ("PRESS R TO RESTART", C_TEXT),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(2);

    for (i, (msg, c)) in lines.iter().enumerate() {
        let row = start_row + 2 * i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color(*c)))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
