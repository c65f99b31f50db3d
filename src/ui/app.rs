//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::ai::Level;
use crate::rules;

use super::board_view::BoardView;
use super::game_state::{GameOutcome, GameState};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with status, settings and score
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(230.0)
            .max_width(270.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_level_card(ui);
                ui.add_space(10.0);
                self.render_settings_card(ui);
                ui.add_space(10.0);
                self.render_score_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X always moves first").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render the turn/result status card
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (text, color) = match self.state.outcome() {
                Some(GameOutcome::PlayerWin) => ("You win!".to_string(), STATUS_OK),
                Some(GameOutcome::ComputerWin) => ("Computer wins.".to_string(), O_COLOR),
                Some(GameOutcome::Draw) => ("Draw.".to_string(), TEXT_SECONDARY),
                None if self.state.is_thinking() => {
                    ("Computer is thinking...".to_string(), STATUS_THINKING)
                }
                None if self.state.is_player_turn() => ("Your turn".to_string(), STATUS_OK),
                None => ("Computer to move".to_string(), TEXT_SECONDARY),
            };
            ui.label(RichText::new(text).size(16.0).strong().color(color));

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "You play {}, computer plays {}",
                    self.state.player_mark,
                    self.state.computer_mark()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the difficulty selector card
    fn render_level_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for level in Level::ALL {
                    if ui
                        .selectable_label(self.state.level == level, level.label())
                        .clicked()
                    {
                        self.state.level = level;
                    }
                }
            });
        });
    }

    /// Render the settings card
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.checkbox(&mut self.state.alternate_starter, "Alternate starter");
        });
    }

    /// Render the session score card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SESSION SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let scores = self.state.scores;
            for (label, value) in [
                ("You", scores.player),
                ("Computer", scores.computer),
                ("Draws", scores.draws),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(value.to_string())
                                .size(14.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
            }
        });
    }

    /// Render the actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("New game (N)").clicked() {
                    self.state.new_game();
                }
                if ui.button("Reset scores").clicked() {
                    self.state.reset_scores();
                }
            });
        });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = PANEL_BG;

            let winning_line = rules::winning_line(&self.state.board);
            let interactive = self.state.is_player_turn() && !self.state.is_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                winning_line,
                interactive,
            );

            if let Some(idx) = clicked {
                if let Err(msg) = self.state.try_play(idx) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.new_game();
            }
            // 1/2/3 - Difficulty
            if i.key_pressed(egui::Key::Num1) {
                self.state.level = Level::Easy;
            }
            if i.key_pressed(egui::Key::Num2) {
                self.state.level = Level::Medium;
            }
            if i.key_pressed(egui::Key::Num3) {
                self.state.level = Level::Hard;
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Apply a finished computer move, if any
        self.state.poll_thinking();

        // Start the computer's move when it is due
        if self.state.is_computer_turn() && !self.state.is_thinking() {
            self.state.start_thinking();
        }

        // Render UI
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the computer is thinking
        if self.state.is_thinking() {
            ctx.request_repaint();
        }
    }
}
