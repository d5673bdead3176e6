use std::collections::HashMap;

use rand::Rng;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::{Bounds, Session, Settings, Sprite, SpriteKind};

const BACKGROUND: Color = Color::Rgb(0, 0, 8);

const SHIP_SPRITE: &[&str] = &[
    "....#....",
    "...###...",
    "...###...",
    ".#######.",
    "#########",
    "##.###.##",
];

const INVADER_SPRITE: &[&str] = &[
    "..#.....#..",
    "...#...#...",
    "..#######..",
    ".##.###.##.",
    "###########",
    "#.#######.#",
    "#.#.....#.#",
    "...##.##...",
];

const PROJECTILE_SPRITE: &[&str] = &["#"];

/// Background stars, stored as fractions of the field so they survive resizes.
pub struct Starfield {
    stars: Vec<(f32, f32)>,
}

impl Starfield {
    pub fn new(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let stars = (0..count)
            .map(|_| (rng.gen::<f32>(), rng.gen::<f32>()))
            .collect();
        Self { stars }
    }
}

// ── Braille canvas ─────────────────────────────────────────────────────

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

/// Dot-resolution layer: 2 x 4 dots per terminal cell.
struct DotLayer {
    cells: HashMap<(usize, usize), u8>,
    dots_w: i32,
    dots_h: i32,
}

impl DotLayer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: HashMap::new(),
            dots_w: (width * 2) as i32,
            dots_h: (height * 4) as i32,
        }
    }

    fn set(&mut self, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.dots_w || by >= self.dots_h {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        *self.cells.entry((bx / 2, by / 4)).or_insert(0) |= braille_bit(bx % 2, by % 4);
    }

    /// Scale a viewport rect to dots and fill it with `pattern`.
    fn stamp(&mut self, rect: Bounds, pattern: &[&str], scale_x: f32, scale_y: f32) {
        let x0 = (rect.left() as f32 * scale_x).floor() as i32;
        let y0 = (rect.top() as f32 * scale_y).floor() as i32;
        let x1 = ((rect.right() as f32 * scale_x).ceil() as i32).max(x0 + 1);
        let y1 = ((rect.bottom() as f32 * scale_y).ceil() as i32).max(y0 + 1);
        let ph = pattern.len();
        let pw = pattern.first().map_or(0, |row| row.len());
        if pw == 0 {
            return;
        }
        let (span_x, span_y) = ((x1 - x0) as usize, (y1 - y0) as usize);

        for by in y0..y1 {
            let py = (by - y0) as usize * ph / span_y;
            let row = pattern[py].as_bytes();
            for bx in x0..x1 {
                let px = (bx - x0) as usize * pw / span_x;
                if row.get(px) == Some(&b'#') {
                    self.set(bx, by);
                }
            }
        }
    }

    fn write_into(&self, grid: &mut [Vec<(char, Style)>], color: Color, bold: bool) {
        for (&(cx, cy), &bits) in &self.cells {
            let Some(cell) = grid.get_mut(cy).and_then(|row| row.get_mut(cx)) else {
                continue;
            };
            if bits == 0 {
                continue;
            }
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(BACKGROUND);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            *cell = (ch, style);
        }
    }
}

fn sprite_pattern(kind: SpriteKind) -> &'static [&'static str] {
    match kind {
        SpriteKind::Ship => SHIP_SPRITE,
        SpriteKind::Projectile => PROJECTILE_SPRITE,
        SpriteKind::Invader => INVADER_SPRITE,
    }
}

fn sprite_color(kind: SpriteKind) -> Color {
    match kind {
        SpriteKind::Ship => Color::Rgb(80, 200, 255),
        SpriteKind::Projectile => Color::Rgb(255, 255, 160),
        SpriteKind::Invader => Color::Rgb(120, 255, 120),
    }
}

fn stamp_all<'a, S, I>(layer: &mut DotLayer, sprites: I, scale_x: f32, scale_y: f32)
where
    S: Sprite + 'a,
    I: IntoIterator<Item = &'a S>,
{
    for sprite in sprites {
        layer.stamp(sprite.bounds(), sprite_pattern(sprite.kind()), scale_x, scale_y);
    }
}

fn field_lines(session: &Session, starfield: &Starfield, w: usize, h: usize) -> Vec<Line<'static>> {
    let settings = &session.settings;
    let scale_x = (w * 2) as f32 / settings.screen_width as f32;
    let scale_y = (h * 4) as f32 / settings.screen_height as f32;

    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(BACKGROUND)); w]; h];

    let mut stars = DotLayer::new(w, h);
    for &(fx, fy) in &starfield.stars {
        stars.set((fx * (w * 2) as f32) as i32, (fy * (h * 4) as f32) as i32);
    }
    stars.write_into(&mut grid, Color::Rgb(70, 70, 100), false);

    let mut invaders = DotLayer::new(w, h);
    stamp_all(&mut invaders, session.fleet.invaders(), scale_x, scale_y);
    invaders.write_into(&mut grid, sprite_color(SpriteKind::Invader), false);

    let mut projectiles = DotLayer::new(w, h);
    stamp_all(&mut projectiles, &session.projectiles, scale_x, scale_y);
    projectiles.write_into(&mut grid, sprite_color(SpriteKind::Projectile), true);

    let mut ship = DotLayer::new(w, h);
    ship.stamp(session.ship.bounds(), sprite_pattern(SpriteKind::Ship), scale_x, scale_y);
    ship.write_into(&mut grid, sprite_color(SpriteKind::Ship), true);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_field(frame: &mut Frame, session: &Session, starfield: &Starfield, area: Rect) {
    let (w, h) = (area.width as usize, area.height as usize);
    if w == 0 || h == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(field_lines(session, starfield, w, h)), area);
}

/// Terminal cell to viewport coordinates (cell centre). `None` outside the field.
pub fn cell_to_viewport(area: Rect, column: u16, row: u16, settings: &Settings) -> Option<(i32, i32)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || column >= area.x + area.width || row < area.y || row >= area.y + area.height {
        return None;
    }
    let cx = (column - area.x) as f32 + 0.5;
    let cy = (row - area.y) as f32 + 0.5;
    Some((
        (cx * settings.screen_width as f32 / area.width as f32) as i32,
        (cy * settings.screen_height as f32 / area.height as f32) as i32,
    ))
}

/// Viewport rect to the terminal cells covering it, clipped to the field.
pub fn viewport_to_cells(rect: Bounds, area: Rect, settings: &Settings) -> Rect {
    let (w, h) = (settings.screen_width as f32, settings.screen_height as f32);
    let to_col = |x: i32| x as f32 * area.width as f32 / w;
    let to_row = |y: i32| y as f32 * area.height as f32 / h;
    let x0 = to_col(rect.left()).floor().max(0.0) as u16;
    let y0 = to_row(rect.top()).floor().max(0.0) as u16;
    let x1 = (to_col(rect.right()).ceil().max(0.0) as u16).max(x0 + 1);
    let y1 = (to_row(rect.bottom()).ceil().max(0.0) as u16).max(y0 + 1);
    let cells = Rect::new(area.x + x0, area.y + y0, x1 - x0, y1 - y0);
    cells.intersection(area)
}
