use std::sync::Arc;

use chrono::Datelike;
use eframe::egui::{
    CentralPanel, ComboBox, Context, FontId, RichText, SidePanel, TopBottomPanel, Ui,
};
use egui_extras::DatePickerButton;
use strum::IntoEnumIterator;

use crate::app::{App, Page};
use crate::chart::DisplayMode;
use crate::config::PLOT_CONFIG;
use crate::engine::{ReactiveController, SelectionEvent, SelectionState};
use crate::ui::styles::UiStyleExt;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::TimeUtils;

impl App {
    pub(crate) fn render_header(&self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.header_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&UI_TEXT.header_title)
                        .size(UI_CONFIG.header_title_size)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                if let Some(controller) = &self.controller {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            UI_TEXT.header_description,
                            controller.store().year_bounds()
                        ))
                        .color(UI_CONFIG.colors.label),
                    );
                }
            });
    }

    pub(crate) fn render_navbar(&mut self, ctx: &Context) {
        TopBottomPanel::top("navbar")
            .frame(UI_CONFIG.navbar_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = UI_CONFIG.nav_link_spacing;
                    for page in Page::iter() {
                        let text = match page {
                            Page::Home => &UI_TEXT.nav_home,
                            Page::About => &UI_TEXT.nav_about,
                        };
                        if ui
                            .interactive_label(
                                text,
                                self.page == page,
                                UI_CONFIG.colors.nav_link,
                                FontId::proportional(16.0),
                            )
                            .clicked()
                        {
                            self.page = page;
                        }
                    }
                });
            });
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context) {
        let Some(controller) = &self.controller else {
            return;
        };
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric(&UI_TEXT.sp_source, &self.source_name, PLOT_CONFIG.color_info);
                    ui.separator();
                    ui.metric(
                        &UI_TEXT.sp_observations,
                        &controller.store().len().to_string(),
                        PLOT_CONFIG.color_text_neutral,
                    );
                    ui.separator();
                    ui.metric(
                        &UI_TEXT.sp_revision,
                        &format!("{} ({})", controller.revision(), controller.mode()),
                        PLOT_CONFIG.color_text_neutral,
                    );

                    if let Some(rejection) = &self.last_rejection {
                        ui.separator();
                        ui.metric(
                            &UI_TEXT.sp_rejected,
                            &rejection.to_string(),
                            PLOT_CONFIG.color_error,
                        );
                    }
                });
            });
    }

    pub(crate) fn render_page(&mut self, ctx: &Context) {
        match self.page {
            Page::Home => self.render_home(ctx),
            Page::About => render_about(ctx),
        }
    }

    fn render_home(&mut self, ctx: &Context) {
        let mut pending = None;

        if let (Some(controller), Some(draft)) = (&self.controller, &mut self.draft) {
            SidePanel::left("menu_panel")
                .frame(UI_CONFIG.central_panel_frame())
                .exact_width(UI_CONFIG.menu_column_width)
                .resizable(false)
                .show(ctx, |ui| {
                    pending = render_menu(ui, controller, draft);
                });
        }

        if let Some(event) = pending {
            self.apply_event(event);
        }

        let published = self.controller.as_ref().map(ReactiveController::published);
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let Some(spec) = published else {
                    return;
                };
                if spec.mode == DisplayMode::Overview {
                    ui.label_subdued(&UI_TEXT.chart_overview_hint);
                }
                self.chart_view.show(ui, &spec);
            });
    }
}

/// Metal selector and date range picker. Returns the event for whatever the user changed this frame.
fn render_menu(
    ui: &mut Ui,
    controller: &ReactiveController,
    draft: &mut SelectionState,
) -> Option<SelectionEvent> {
    let store = Arc::clone(controller.store());
    let mut metal_changed = false;
    let mut range_changed = false;

    ui.menu_title(&UI_TEXT.menu_select_metal);
    ComboBox::from_id_salt("select_metal")
        .selected_text(draft.metal.as_str())
        .width(UI_CONFIG.menu_column_width - 40.0)
        .show_ui(ui, |ui| {
            for metal in store.metals() {
                if ui
                    .selectable_value(&mut draft.metal, metal.clone(), metal.as_str())
                    .clicked()
                {
                    metal_changed = true;
                }
            }
        });

    ui.add_space(20.0);
    ui.menu_title(&UI_TEXT.menu_date_range);
    let years = store.min_date().year()..=store.max_date().year();
    ui.horizontal(|ui| {
        range_changed |= ui
            .add(
                DatePickerButton::new(&mut draft.start)
                    .id_salt("range_start")
                    .format(TimeUtils::STANDARD_DATE_FORMAT)
                    .start_end_years(years.clone())
                    .calendar_week(false),
            )
            .changed();
        ui.label(&UI_TEXT.menu_range_separator);
        range_changed |= ui
            .add(
                DatePickerButton::new(&mut draft.end)
                    .id_salt("range_end")
                    .format(TimeUtils::STANDARD_DATE_FORMAT)
                    .start_end_years(years)
                    .calendar_week(false),
            )
            .changed();
    });

    match (metal_changed, range_changed) {
        (false, false) => None,
        (true, false) => Some(SelectionEvent::MetalChanged(draft.metal.clone())),
        (false, true) => Some(SelectionEvent::DateRangeChanged {
            start: draft.start,
            end: draft.end,
        }),
        (true, true) => Some(SelectionEvent::SelectionChanged {
            metal: draft.metal.clone(),
            start: draft.start,
            end: draft.end,
        }),
    }
}

fn render_about(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.heading(
                RichText::new(&UI_TEXT.about_heading)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(10.0);
            for paragraph in UI_TEXT.about_paragraphs {
                ui.label(RichText::new(*paragraph).color(UI_CONFIG.colors.label));
                ui.add_space(6.0);
            }
        });
}
