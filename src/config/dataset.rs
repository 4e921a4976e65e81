//! Source table layout and bundled sample data

/// Column layout the store expects from the raw table.
#[derive(Debug, Clone, Copy)]
pub struct DatasetLayout {
    /// Header of the date column
    pub date_column: &'static str,
    /// Tracked metals, in the order UI option lists and legends use.
    /// Source column order is irrelevant.
    pub tracked_metals: &'static [&'static str],
    /// Tried in order. Any time-of-day component is discarded.
    pub date_formats: &'static [&'static str],
    /// Cell values treated as "no price recorded"
    pub absent_tokens: &'static [&'static str],
}

pub struct DatasetConfig {
    /// Default CSV location for the native app and CLI
    pub csv_path: &'static str,
    /// Metal preselected in the dropdown on startup
    pub default_metal: &'static str,
    pub layout: DatasetLayout,
    /// Bundled copy of the sample table (used by the WASM build, which has no filesystem)
    pub embedded_csv: &'static str,
}

pub const DATASET: DatasetConfig = DatasetConfig {
    csv_path: "metals.csv",
    default_metal: "Gold",
    layout: DatasetLayout {
        date_column: "DateTime",
        tracked_metals: &[
            "Platinum",
            "Gold",
            "Silver",
            "Palladium",
            "Rhodium",
            "Iridium",
            "Ruthenium",
        ],
        date_formats: &["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d", "%m/%d/%Y"],
        absent_tokens: &["", "NaN", "nan", "NA", "null"],
    },
    embedded_csv: include_str!("../../data/metals.csv"),
};
