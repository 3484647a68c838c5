use eframe::egui::{Color32, Rect, Sense, Stroke, StrokeKind, Ui, pos2, vec2};
use hanoi_core::Peg;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::palette::{self, BoardPalette},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct PegVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const HINT_FROM = 0b0000_0010;
        const HINT_TO = 0b0000_0100;
    }
}

impl PegVisualState {
    fn fill_color(self, palette: &BoardPalette) -> Color32 {
        if self.intersects(Self::SELECTED) {
            return palette.peg_bg_selected;
        }
        if self.intersects(Self::HINT_FROM | Self::HINT_TO) {
            return palette.peg_bg_hint;
        }
        palette.peg_bg_default
    }

    fn border(self, palette: &BoardPalette) -> Option<Stroke> {
        if self.intersects(Self::SELECTED) {
            return Some(Stroke::new(3.0, palette.border_selected));
        }
        if self.intersects(Self::HINT_FROM) {
            return Some(Stroke::new(3.0, palette.border_hint_from));
        }
        if self.intersects(Self::HINT_TO) {
            return Some(Stroke::new(2.0, palette.border_hint_to));
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PegViewModel {
    /// Disk sizes, bottom first.
    pub(crate) disks: Vec<u8>,
    pub(crate) visual_state: PegVisualState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardViewModel {
    pub(crate) pegs: [PegViewModel; 3],
    pub(crate) disk_count: u8,
}

const PEG_GAP: f32 = 12.0;
const BASE_HEIGHT: f32 = 10.0;
const ROD_WIDTH: f32 = 8.0;
const MAX_DISK_HEIGHT: f32 = 28.0;
const PEG_ROUNDING: f32 = 12.0;

pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    let palette = BoardPalette::from_visuals(ui.visuals());
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());

    let peg_width = (rect.width() - PEG_GAP * 2.0) / 3.0;
    for (peg, peg_vm) in Peg::ALL.into_iter().zip(&vm.pegs) {
        #[expect(clippy::cast_precision_loss)]
        let offset = peg.index() as f32 * (peg_width + PEG_GAP);
        let peg_rect = Rect::from_min_size(
            rect.min + vec2(offset, 0.0),
            vec2(peg_width, rect.height()),
        );

        draw_peg(ui, peg_rect, peg_vm, vm.disk_count, &palette);

        let response = ui.interact(peg_rect, ui.id().with(("peg", peg.index())), Sense::click());
        if response.on_hover_text(format!("Peg {}", peg.index() + 1)).clicked() {
            action_queue.request(Action::ClickPeg(peg));
        }
    }
}

fn draw_peg(ui: &Ui, rect: Rect, vm: &PegViewModel, disk_count: u8, palette: &BoardPalette) {
    let painter = ui.painter();
    painter.rect_filled(rect, PEG_ROUNDING, vm.visual_state.fill_color(palette));
    if let Some(stroke) = vm.visual_state.border(palette) {
        painter.rect_stroke(rect, PEG_ROUNDING, stroke, StrokeKind::Inside);
    }

    let inner = rect.shrink(PEG_ROUNDING);
    let base = Rect::from_min_max(
        inner.left_bottom() - vec2(0.0, BASE_HEIGHT),
        inner.right_bottom(),
    );
    painter.rect_filled(base, 4.0, palette.base);

    let rod_height = inner.height() * 0.8;
    let rod = Rect::from_center_size(
        base.center_top() - vec2(0.0, rod_height / 2.0),
        vec2(ROD_WIDTH, rod_height),
    );
    painter.rect_filled(rod, 4.0, palette.rod);

    let disk_height = (rod_height / f32::from(disk_count.max(1) + 1)).min(MAX_DISK_HEIGHT);
    let mut bottom = base.top();
    for &size in &vm.disks {
        let width = inner.width() * palette::disk_width_fraction(size, disk_count);
        let disk = Rect::from_min_max(
            pos2(inner.center().x - width / 2.0, bottom - disk_height),
            pos2(inner.center().x + width / 2.0, bottom),
        )
        .shrink2(vec2(0.0, 1.0));
        let (top_color, bottom_color) = palette::disk_colors(size, disk_count);
        let (upper, lower) = disk.split_top_bottom_at_fraction(0.5);

        painter.rect_filled(disk.translate(vec2(0.0, 3.0)), 6.0, palette.disk_shadow);
        painter.rect_filled(disk, 6.0, bottom_color);
        painter.rect_filled(upper, 6.0, top_color);
        painter.rect_filled(lower.shrink2(vec2(6.0, 0.0)), 0.0, bottom_color);

        bottom -= disk_height;
    }
}
