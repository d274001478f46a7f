use eframe::egui::Ui;

use crate::router::Tab;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – title, tab strip, dataset summary
// ---------------------------------------------------------------------------

/// Render the top bar with the five-tab selector.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("World Happiness Report 2015 Dashboard");
    });
    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for tab in Tab::ALL {
            let selected = state.active_tab == tab;
            if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                state.select_tab(tab);
            }
        }

        ui.separator();

        ui.label(format!(
            "{} countries, {} regions",
            state.dataset.len(),
            state.dataset.regions().len()
        ));
    });
    ui.add_space(2.0);
}
