use {
    crate::{
        chart::SeriesColor,
        config::PLOT_CONFIG,
        ui::UI_CONFIG,
    },
    eframe::egui::{
        Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
        WidgetInfo, WidgetType,
    },
};

/// Resolve a palette entry ("gold", "#E5E4E2") to an egui colour.
pub fn css_color(css: &str) -> Color32 {
    match colorgrad::Color::from_html(css) {
        Ok(color) => {
            let rgba8 = color.to_rgba8();
            Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], rgba8[3])
        }
        Err(e) => {
            log::warn!("Unparsable colour '{}': {}", css, e);
            PLOT_CONFIG.unparsable_series_color
        }
    }
}

pub trait SeriesColorExt {
    fn to_color32(&self) -> Color32;
}

impl SeriesColorExt for SeriesColor {
    fn to_color32(&self) -> Color32 {
        css_color(self.css())
    }
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as link/button: transparent when idle, gray bg on hover, blue bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn menu_title(&mut self, text: impl Into<String>);
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(4.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Link, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (visuals.selection.bg_fill, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, Color32::YELLOW)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn menu_title(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .strong()
                .color(UI_CONFIG.colors.menu_title),
        );
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_entries_resolve() {
        assert_eq!(css_color("gold"), Color32::from_rgb(255, 215, 0));
        assert_eq!(css_color("#E5E4E2"), Color32::from_rgb(0xE5, 0xE4, 0xE2));
        assert_eq!(css_color("darkblue"), Color32::from_rgb(0, 0, 139));
    }

    #[test]
    fn every_configured_colour_resolves() {
        use crate::config::CHART;
        let entries = CHART
            .overview_palette
            .iter()
            .chain(CHART.focused_palette)
            .map(|(_, css)| *css)
            .chain([CHART.focused_font.color]);
        for css in entries {
            assert_ne!(
                css_color(css),
                PLOT_CONFIG.unparsable_series_color,
                "'{}' did not parse",
                css
            );
        }
        assert_eq!(css_color("white"), Color32::WHITE);
        assert_eq!(css_color("orange"), Color32::from_rgb(255, 165, 0));
    }

    #[test]
    fn garbage_falls_back_to_the_warning_colour() {
        assert_eq!(css_color("not-a-colour"), PLOT_CONFIG.unparsable_series_color);
    }
}
