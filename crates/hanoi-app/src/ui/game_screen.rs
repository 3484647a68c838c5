use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};

use super::{board, sidebar};
use crate::{
    action::ActionRequestQueue,
    ui::{board::BoardViewModel, sidebar::SidebarViewModel},
};

const HEADER_HEIGHT: f32 = 60.0;
const FOOTER_HEIGHT: f32 = 20.0;
const SIDEBAR_WIDTH: f32 = 200.0;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) board_vm: BoardViewModel,
    pub(crate) sidebar_vm: SidebarViewModel,
}

impl GameScreenViewModel {
    pub(crate) fn new(board_vm: BoardViewModel, sidebar_vm: SidebarViewModel) -> Self {
        Self {
            board_vm,
            sidebar_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;

    StripBuilder::new(ui)
        .size(Size::exact(HEADER_HEIGHT))
        .size(Size::remainder())
        .size(Size::exact(FOOTER_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("Tower of Hanoi").strong());
                    ui.label("Click a tower, then another to move the top disk.");
                });
            });
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(spacing.x))
                    .size(Size::exact(SIDEBAR_WIDTH))
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            board::show(ui, &vm.board_vm, action_queue);
                        });
                        strip.cell(|_ui| {}); // Spacer
                        strip.cell(|ui| {
                            sidebar::show(ui, &vm.sidebar_vm, action_queue);
                        });
                    });
            });
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    ui.small("For ages 7\u{2013}12 \u{2022} Be patient and think ahead!");
                });
            });
        });
}
