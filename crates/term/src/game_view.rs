//! GameView: draws a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. The arena size comes from the snapshot, so any configured
//! width and height lay out without changes here.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 10;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Maps arena cells onto terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self::new(2, 1)
    }
}

/// Where the framed arena landed in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Bordered arena rectangle for `snap` inside `viewport`.
    pub fn frame_rect(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameRect {
        let w = (snap.arena.width() as u16)
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let h = (snap.arena.height() as u16)
            .saturating_mul(self.cell_h)
            .saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        FrameRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame_rect(snap, viewport);
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            empty,
        );
        draw_border(fb, frame, CellStyle::default());

        let width = snap.arena.width() as i32;
        let height = snap.arena.height() as i32;
        for y in 0..height {
            for x in 0..width {
                self.draw_cell(fb, frame, x, y, '·', empty);
            }
        }

        for (x, y, v) in snap.arena_cells() {
            if let Some(kind) = PieceKind::from_value(v) {
                self.draw_cell(fb, frame, x, y, '█', block_style(kind));
            }
        }

        // Parts of the active piece outside the arena are clipped.
        for (x, y, v) in snap.active_cells() {
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            if let Some(kind) = PieceKind::from_value(v) {
                self.draw_cell(fb, frame, x, y, '█', block_style(kind).bold());
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Allocating convenience wrapper around [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: FrameRect, x: i32, y: i32, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: FrameRect) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_u32(panel_x, y + 1, snap.drop_interval_ms, value);
        let digits = digit_count(snap.drop_interval_ms);
        fb.put_str(panel_x + digits + 1, y + 1, "ms", value.dim());
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "PIECE", label);
        fb.set(
            panel_x,
            y + 1,
            block_style(snap.active_kind).cell(snap.active_kind.as_char()),
        );
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SEED", label);
        fb.put_u32(panel_x, y + 1, snap.seed, value.dim());
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: FrameRect, style: CellStyle) {
    let FrameRect { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.cell('─'));
        fb.set(x + dx, bottom, style.cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.cell('│'));
        fb.set(right, y + dy, style.cell('│'));
    }
    fb.set(x, y, style.cell('┌'));
    fb.set(right, y, style.cell('┐'));
    fb.set(x, bottom, style.cell('└'));
    fb.set(right, bottom, style.cell('┘'));
}

/// Block color for each piece value.
pub fn block_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    };
    CellStyle::new(fg, PLAY_BG)
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
