//! Tower of Hanoi application UI.
//!
//! # Design Notes
//! - One frame: poll timers, read shortcuts, handle actions, build view models,
//!   draw, then handle the actions the drawing produced.
//! - Keyboard shortcuts are off while the completion dialog is open.
//! - The puzzle is saved whenever a handled action changed it, and on the
//!   regular eframe auto-save.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};
use hanoi_game::Game;

use crate::{
    action::ActionRequestQueue,
    action_handler,
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct HanoiApp {
    app_state: AppState,
    ui_state: UiState,
}

impl HanoiApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let app_state = cc
            .storage
            .and_then(storage::load_state)
            .unwrap_or_else(|| AppState::new(Game::default()));
        Self {
            app_state,
            ui_state: UiState::new(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }

    fn schedule_repaint(&self, ctx: &Context, now: f64) {
        if self.ui_state.is_animating() {
            ctx.request_repaint();
        } else if let Some(delay) = self.ui_state.next_deadline(now) {
            ctx.request_repaint_after(delay);
        }
    }
}

impl App for HanoiApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.poll_timers(now, &mut action_queue);
        action_handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &mut action_queue,
            now,
        );

        if !self.app_state.game.shows_completion() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            action_handler::handle_all(
                &mut self.app_state,
                &mut self.ui_state,
                &mut action_queue,
                now,
            );
        }

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(completion_vm) = view_model_builder::build_completion_view_model(&self.app_state)
        {
            ui::dialogs::show_completion(ctx, &completion_vm, &mut action_queue);
        }

        if let Some(confetti) = &self.ui_state.confetti {
            ui::confetti::show(ctx, confetti, now);
        }

        action_handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &mut action_queue,
            now,
        );

        self.schedule_repaint(ctx, now);
        self.apply_persistence(frame);
    }
}
