use eframe::egui;

use crate::router;
use crate::state::AppState;
use crate::ui::{panels, render};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HappyGlobeApp {
    pub state: AppState,
}

impl HappyGlobeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HappyGlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + tab strip ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the active tab's chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            // Every selection re-derives its view from the full table.
            let fragment =
                router::fragment_for(self.state.active_tab.id(), &self.state.dataset);
            render::fragment(ui, &fragment);
        });
    }
}
