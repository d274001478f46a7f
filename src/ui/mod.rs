/// UI layer: the tab strip and the egui_plot chart renderers.
pub mod panels;
pub mod render;
