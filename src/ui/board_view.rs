//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        interactive: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 2.0 * BOARD_MARGIN;
        self.cell_size = (board_size - 2.0 * CELL_GAP) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );
        self.board_rect = response.rect;

        // Board background
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        // Cells and marks
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let rect = self.cell_rect(idx);
            painter.rect_filled(rect, CornerRadius::same(6), CELL_BG);

            let highlighted = winning_line.is_some_and(|line| line.contains(&idx));
            if let Some(mark) = board.get(idx) {
                self.draw_mark(&painter, rect, mark, highlighted);
            }
        }

        // Grid lines between cells
        self.draw_grid(&painter);

        // Last move marker
        if let Some(idx) = last_move {
            let rect = self.cell_rect(idx);
            painter.circle_filled(
                rect.right_top() + Vec2::new(-10.0, 10.0),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }

        // Hover preview and click handling
        let mut clicked = None;
        if interactive {
            if let Some(pointer) = response.hover_pos() {
                if let Some(idx) = self.cell_at(pointer) {
                    if board.is_free(idx) {
                        painter.rect_filled(
                            self.cell_rect(idx),
                            CornerRadius::same(6),
                            hover_valid(),
                        );
                        if response.clicked() {
                            clicked = Some(idx);
                        }
                    }
                }
            }
        }

        clicked
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, idx: usize) -> Rect {
        let row = idx / BOARD_SIZE;
        let col = idx % BOARD_SIZE;
        let origin = self.board_rect.min
            + Vec2::new(
                CELL_GAP + col as f32 * self.cell_size,
                CELL_GAP + row as f32 * self.cell_size,
            );
        Rect::from_min_size(origin, Vec2::splat(self.cell_size - CELL_GAP)).shrink(CELL_GAP / 2.0)
    }

    /// Map a screen position back to a cell index
    fn cell_at(&self, pos: Pos2) -> Option<usize> {
        if !self.board_rect.contains(pos) {
            return None;
        }
        let rel = pos - self.board_rect.min - Vec2::splat(CELL_GAP);
        let col = (rel.x / self.cell_size).floor();
        let row = (rel.y / self.cell_size).floor();
        if !(0.0..BOARD_SIZE as f32).contains(&col) || !(0.0..BOARD_SIZE as f32).contains(&row) {
            return None;
        }
        Some(row as usize * BOARD_SIZE + col as usize)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(2.0, GRID_LINE);
        for i in 1..BOARD_SIZE {
            let offset = CELL_GAP + i as f32 * self.cell_size - CELL_GAP / 2.0;
            // Vertical
            painter.line_segment(
                [
                    self.board_rect.min + Vec2::new(offset, CELL_GAP),
                    self.board_rect.min
                        + Vec2::new(offset, self.board_rect.height() - CELL_GAP),
                ],
                stroke,
            );
            // Horizontal
            painter.line_segment(
                [
                    self.board_rect.min + Vec2::new(CELL_GAP, offset),
                    self.board_rect.min
                        + Vec2::new(self.board_rect.width() - CELL_GAP, offset),
                ],
                stroke,
            );
        }
    }

    /// Draw an X or an O centered in a cell
    fn draw_mark(&self, painter: &Painter, rect: Rect, mark: Mark, highlighted: bool) {
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let center = rect.center();
        let color = if highlighted {
            WIN_HIGHLIGHT
        } else {
            match mark {
                Mark::X => X_COLOR,
                Mark::O => O_COLOR,
            }
        };
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match mark {
            Mark::X => {
                let d = Vec2::splat(radius * std::f32::consts::FRAC_1_SQRT_2);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-d.x, d.y), center + Vec2::new(d.x, -d.y)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, radius, stroke);
            }
        }
    }
}
