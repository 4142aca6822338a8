//! Terminal rendering
//!
//! Scales the 800x600 playfield onto whatever terminal is available and
//! draws it with half-block pixels. Reads snapshots only; never touches the
//! simulation.

pub mod canvas;
pub mod hud;

use std::io::{self, Write};

use glam::Vec2;

use crate::sim::{Bounds, Rect, Snapshot};
pub use canvas::{Canvas, Label, Rgb};
use hud::TextLine;

/// Draws snapshots into a terminal-sized canvas
pub struct TerminalRenderer {
    canvas: Canvas,
}

impl TerminalRenderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            canvas: Canvas::new(cols, rows),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols, rows);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Compose the frame for `snapshot` without writing it anywhere
    pub fn compose(&mut self, snapshot: &Snapshot<'_>) {
        let view = Viewport::new(&self.canvas, snapshot.config.screen_width, snapshot.config.screen_height);

        self.canvas.clear(hud::BACKGROUND);

        for item in snapshot.items {
            let color = Rgb::from_array(item.kind.color());
            view.fill(&mut self.canvas, item.bounds(), color);
        }
        view.fill(&mut self.canvas, snapshot.player.bounds(), hud::PLAYER);

        // Health bar: background, proportional fill, outline
        let bar = Rect::new(hud::BAR_POS, hud::BAR_SIZE);
        let fill = hud::health_bar_fill(
            snapshot.player.health,
            snapshot.config.max_health,
            hud::BAR_SIZE.x,
        );
        view.fill(&mut self.canvas, bar, hud::BAR_EMPTY);
        view.fill(
            &mut self.canvas,
            Rect::new(hud::BAR_POS, Vec2::new(fill, hud::BAR_SIZE.y)),
            hud::BAR_FILL,
        );
        view.stroke(&mut self.canvas, bar, hud::TEXT);

        let score = hud::score_line(snapshot);
        view.text(&mut self.canvas, &score);
        for line in hud::overlay_lines(snapshot) {
            view.text(&mut self.canvas, &line);
        }
    }

    /// Compose and write the frame
    pub fn draw(&mut self, snapshot: &Snapshot<'_>, out: &mut impl Write) -> io::Result<()> {
        self.compose(snapshot);
        self.canvas.render(out)
    }
}

/// World-to-canvas mapping
struct Viewport {
    scale: Vec2,
    cells: (u16, u16),
}

impl Viewport {
    fn new(canvas: &Canvas, world_w: f32, world_h: f32) -> Self {
        let (w, h) = canvas.size();
        Self {
            scale: Vec2::new(w as f32 / world_w.max(1.0), h as f32 / world_h.max(1.0)),
            cells: canvas.cells(),
        }
    }

    /// Pixel span covering `[lo, hi)`; anything with extent gets at least one pixel
    fn span(lo: f32, hi: f32, scale: f32) -> (i32, i32) {
        let start = (lo * scale).floor() as i32;
        let end = (hi * scale).ceil() as i32;
        if hi > lo { (start, (end - start).max(1)) } else { (start, 0) }
    }

    fn fill(&self, canvas: &mut Canvas, rect: Rect, color: Rgb) {
        let max = rect.max();
        let (x, w) = Self::span(rect.min.x, max.x, self.scale.x);
        let (y, h) = Self::span(rect.min.y, max.y, self.scale.y);
        canvas.fill_rect(x, y, w, h, color);
    }

    fn stroke(&self, canvas: &mut Canvas, rect: Rect, color: Rgb) {
        let max = rect.max();
        let (x, w) = Self::span(rect.min.x, max.x, self.scale.x);
        let (y, h) = Self::span(rect.min.y, max.y, self.scale.y);
        canvas.stroke_rect(x, y, w, h, color);
    }

    fn text(&self, canvas: &mut Canvas, line: &TextLine) {
        let (cols, rows) = self.cells;
        if cols == 0 || rows == 0 {
            return;
        }
        let len = line.text.chars().count() as f32;
        let mut col = line.pos.x * self.scale.x;
        if line.centered {
            col -= len / 2.0;
        }
        let col = col.round().clamp(0.0, (cols - 1) as f32) as u16;
        // Two pixels per cell row
        let row = (line.pos.y * self.scale.y / 2.0).floor().clamp(0.0, (rows - 1) as f32) as u16;

        let text: String = line.text.chars().take((cols - col) as usize).collect();
        canvas.label(Label {
            col,
            row,
            text,
            fg: line.color,
            bold: line.large,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::highscores::MemoryStore;
    use crate::sim::Engine;

    #[test]
    fn test_compose_draws_player_and_prompt() {
        let engine = Engine::new(GameConfig::default(), 1, MemoryStore::new());
        let mut renderer = TerminalRenderer::new(160, 60);
        renderer.compose(&engine.snapshot());

        let canvas = renderer.canvas();
        // Player center at (400, 540) -> pixel (80, 108)
        assert_eq!(canvas.get(80, 108), hud::PLAYER);
        // Health bar fully filled at start, inside its outline
        assert_eq!(canvas.get(20, 5), hud::BAR_FILL);
        assert_eq!(canvas.get(20, 4), hud::TEXT);
        assert_eq!(canvas.get(100, 60), hud::BACKGROUND);

        let texts: Vec<&str> = canvas.labels().iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&"Score: 0"));
        assert!(texts.contains(&"Press SPACEBAR to Start"));
    }

    #[test]
    fn test_labels_clip_to_narrow_terminal() {
        let engine = Engine::new(GameConfig::default(), 1, MemoryStore::new());
        let mut renderer = TerminalRenderer::new(10, 4);
        renderer.compose(&engine.snapshot());
        for label in renderer.canvas().labels() {
            assert!(label.col < 10);
            assert!(label.row < 4);
            assert!(label.col as usize + label.text.chars().count() <= 10);
        }
    }

    #[test]
    fn test_draw_writes_output() {
        let engine = Engine::new(GameConfig::default(), 1, MemoryStore::new());
        let mut renderer = TerminalRenderer::new(20, 8);
        let mut out = Vec::new();
        renderer.draw(&engine.snapshot(), &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
