//! Header, image area and Keep / Delete / Undo buttons.

use super::{BUTTON, UNDO_BUTTON, UiApp};
use eframe::egui::{self, Color32, RichText};
use keep_delete_core::{ReviewState, display_target, fit_scale};

const ACTION_BUTTON_SIZE: egui::Vec2 = egui::vec2(140.0, 56.0);

impl UiApp {
    pub(super) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("keep-delete").size(24.0).color(Color32::WHITE));
            ui.add_space(12.0);
            ui.label(
                RichText::new(self.view.counter_text())
                    .size(16.0)
                    .color(Color32::WHITE),
            );
            ui.add_space(12.0);
        });
    }

    pub(super) fn render_actions(&mut self, ui: &mut egui::Ui) {
        let can_decide = self
            .session
            .as_ref()
            .is_some_and(|s| s.can_decide());
        let can_undo = self.view.undo_enabled;

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let row_width = ACTION_BUTTON_SIZE.x * 3.0 + ui.spacing().item_spacing.x * 2.0;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

            if ui
                .add_enabled(can_decide, action_button("Keep", BUTTON))
                .clicked()
            {
                self.apply(|session, view| session.commit_keep(view));
            }
            if ui
                .add_enabled(can_decide, action_button("Delete", BUTTON))
                .clicked()
            {
                self.apply(|session, view| session.commit_delete(view));
            }
            if ui
                .add_enabled(can_undo, action_button("Undo", UNDO_BUTTON))
                .clicked()
            {
                self.apply(|session, view| session.undo(view));
            }
        });
        ui.add_space(10.0);
    }

    /// Shrinks the image to the panel minus a margin; recomputed every frame
    /// so it follows window resizes.
    pub(super) fn render_image(&mut self, ui: &mut egui::Ui) {
        let Some(loaded) = &self.view.image else {
            let finished = self
                .session
                .as_ref()
                .is_some_and(|s| s.state() == ReviewState::Finished);
            if finished {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No more images remaining!").size(18.0));
                });
            }
            return;
        };

        let available = ui.available_size();
        let scale = fit_scale(loaded.size, display_target((available.x, available.y)));
        let size = egui::vec2(loaded.size.0 as f32 * scale, loaded.size.1 as f32 * scale);
        let texture = egui::load::SizedTexture::new(loaded.texture.id(), size);
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.add(egui::Image::new(texture).fit_to_exact_size(size));
        });
    }
}

fn action_button(text: &str, fill: Color32) -> egui::Button<'_> {
    egui::Button::new(RichText::new(text).size(18.0).color(Color32::WHITE))
        .fill(fill)
        .min_size(ACTION_BUTTON_SIZE)
}
