use {
    crate::{
        app::{FailedState, LoadingState},
        config::PLOT_CONFIG,
        ui::UI_TEXT,
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

pub(crate) fn render_loading(ctx: &Context, state: &LoadingState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.add_space(20.0);
            ui.spinner();
            ui.add_space(10.0);
            for name in &state.source_names {
                ui.label(
                    RichText::new(format!("{} {}", UI_TEXT.ls_reading, name))
                        .italics()
                        .color(PLOT_CONFIG.color_text_neutral),
                );
            }
        });
    });
}

pub(crate) fn render_failed(ctx: &Context, state: &FailedState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_failed)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_error),
            );
            ui.add_space(20.0);
            ui.label(
                RichText::new(&state.message)
                    .monospace()
                    .color(PLOT_CONFIG.color_text_primary),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(&UI_TEXT.ls_failed_hint).color(PLOT_CONFIG.color_text_subdued));
        });
    });
}
