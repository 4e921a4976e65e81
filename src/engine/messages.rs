use chrono::NaiveDate;

/// One input from the UI. Metal selector and date picker both feed this single stream,
/// so there is exactly one handler and no race between independently updating controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    MetalChanged(String),
    DateRangeChanged {
        start: NaiveDate,
        end: NaiveDate,
    },
    /// All three inputs at once (how a combined callback delivers them)
    SelectionChanged {
        metal: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl std::fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MetalChanged(metal) => write!(f, "metal -> {}", metal),
            Self::DateRangeChanged { start, end } => write!(f, "range -> {}..={}", start, end),
            Self::SelectionChanged { metal, start, end } => {
                write!(f, "selection -> {} {}..={}", metal, start, end)
            }
        }
    }
}
