mod dialogs;
mod review;
mod view;

use eframe::{App, CreationContext, Frame, egui};
use keep_delete_core::ReviewSession;
use std::path::Path;
use view::ReviewView;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x1E, 0x1E, 0x24);
const IMAGE_FRAME: egui::Color32 = egui::Color32::from_rgb(0x42, 0x42, 0x42);
const BUTTON: egui::Color32 = egui::Color32::from_rgb(0x28, 0x28, 0x35);
const UNDO_BUTTON: egui::Color32 = egui::Color32::from_rgb(0x92, 0x14, 0x0C);

pub struct UiApp {
    /// `None` once the user confirmed quitting and the staging area is gone.
    session: Option<ReviewSession>,
    view: ReviewView,
    /// Message of a failed delete or undo, shown until dismissed.
    alert: Option<String>,
    confirm_quit: bool,
}

impl UiApp {
    pub fn new(cc: &CreationContext<'_>, mut session: ReviewSession, dir: Option<&Path>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        let mut view = ReviewView::default();
        session.open_directory(dir, &mut view);
        Self {
            session: Some(session),
            view,
            alert: None,
            confirm_quit: false,
        }
    }

    /// Runs one session operation; a failure becomes an alert and the
    /// session is left as it was.
    fn apply(
        &mut self,
        op: impl FnOnce(&mut ReviewSession, &mut ReviewView) -> keep_delete_core::Result<()>,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = op(session, &mut self.view) {
            tracing::warn!("{e}");
            self.alert = Some(e.to_string());
        }
    }

    /// Holds the window open until the user confirms losing staged files.
    fn intercept_close(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && self.session.is_some() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.confirm_quit = true;
        }
    }

    fn quit(&mut self, ctx: &egui::Context) {
        if let Some(session) = self.session.take()
            && let Err(e) = session.close()
        {
            tracing::warn!("{e}");
            eprintln!("{e}");
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.intercept_close(ctx);
        self.view.sync_texture(ctx);

        egui::TopBottomPanel::top("title")
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| self.render_header(ui));

        egui::TopBottomPanel::bottom("actions")
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| self.render_actions(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(IMAGE_FRAME))
            .show(ctx, |ui| self.render_image(ui));

        self.render_dialogs(ctx);
    }
}
