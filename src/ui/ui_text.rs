use std::sync::LazyLock;

pub struct UiText {
    // --- Header ---
    pub header_title: String,
    pub header_description: String,

    // --- Navigation ---
    pub nav_home: String,
    pub nav_about: String,

    // --- Menu area ---
    pub menu_select_metal: String,
    pub menu_date_range: String,
    pub menu_range_separator: String,

    // --- About page ---
    pub about_heading: String,
    pub about_paragraphs: &'static [&'static str],

    // --- Chart ---
    pub chart_no_data: String,
    pub chart_overview_hint: String,

    // --- Status line ---
    pub sp_source: String,
    pub sp_observations: String,
    pub sp_revision: String,
    pub sp_rejected: String,

    // --- Loading screen ---
    pub ls_title: String,
    pub ls_reading: String,
    pub ls_failed: String,
    pub ls_failed_hint: String,

    // --- Window ---
    pub window_title_subject: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    header_title: "Precious Metals Prices".to_string(),
    header_description: "Metal prices from".to_string(),

    nav_home: "Home".to_string(),
    nav_about: "About".to_string(),

    menu_select_metal: "Select Metal".to_string(),
    menu_date_range: "Date Range".to_string(),
    menu_range_separator: "→".to_string(),

    about_heading: "About This App".to_string(),
    about_paragraphs: &[
        "This app visualizes the prices of precious metals from 2018 to 2021.",
        "You can select different metals and date ranges to see how prices have fluctuated over time.",
    ],

    chart_no_data: "No prices recorded in the selected range".to_string(),
    chart_overview_hint: "Pick a metal or a date range to focus the chart".to_string(),

    sp_source: "Source".to_string(),
    sp_observations: "Observations".to_string(),
    sp_revision: "Rev".to_string(),
    sp_rejected: "Rejected".to_string(),

    ls_title: "Loading price data".to_string(),
    ls_reading: "Reading".to_string(),
    ls_failed: "Failed to load price data".to_string(),
    ls_failed_hint: "Fix the source table and restart. Use --data <path> to point at another CSV.".to_string(),

    window_title_subject: "Metal Prices".to_string(),
});
