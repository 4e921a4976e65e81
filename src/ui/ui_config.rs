use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub menu_title: Color32,
    pub root_background: Color32,
    pub navbar_background: Color32,
    pub nav_link: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub header_title_size: f32,
    pub menu_column_width: f32,
    pub nav_link_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::WHITE,
        heading: Color32::WHITE,
        menu_title: Color32::LIGHT_GRAY,
        root_background: Color32::BLACK,
        navbar_background: Color32::from_rgb(0x33, 0x33, 0x33),
        nav_link: Color32::from_rgb(120, 170, 240),
    },
    header_title_size: 32.0,
    menu_column_width: 260.0,
    nav_link_spacing: 20.0,
};

impl UiConfig {
    /// Frame for the black page header
    pub fn header_frame(&self) -> Frame {
        Frame {
            fill: self.colors.root_background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }

    /// Frame for the navigation bar under the header
    pub fn navbar_frame(&self) -> Frame {
        Frame {
            fill: self.colors.navbar_background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.root_background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the page content (menu + chart, or About)
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.root_background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }
}
