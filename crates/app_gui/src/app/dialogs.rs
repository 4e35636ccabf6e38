//! Modal notices: finished, error alert and quit confirmation.

use super::UiApp;
use eframe::egui;

const QUIT_WARNING: &str =
    "After quitting you will not be able to recover deleted files.\nDo you still wish to quit?";

impl UiApp {
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        if self.view.finished_notice
            && notice(ctx, "Finished!", "No more images remaining!")
        {
            self.view.finished_notice = false;
        }

        if let Some(message) = &self.alert
            && notice(ctx, "Error", message)
        {
            self.alert = None;
        }

        if self.confirm_quit {
            match confirm(ctx, "Quit", QUIT_WARNING) {
                Some(true) => self.quit(ctx),
                Some(false) => self.confirm_quit = false,
                None => {}
            }
        }
    }
}

fn centered_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Returns true once the user dismissed the notice.
fn notice(ctx: &egui::Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;
    centered_window(title).show(ctx, |ui| {
        ui.label(message);
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });
    dismissed
}

/// `Some(answer)` once the user chose OK or Cancel.
fn confirm(ctx: &egui::Context, title: &str, message: &str) -> Option<bool> {
    let mut answer = None;
    centered_window(title).show(ctx, |ui| {
        ui.label(message);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                answer = Some(true);
            }
            if ui.button("Cancel").clicked() {
                answer = Some(false);
            }
        });
    });
    answer
}
