use strum_macros::{Display, EnumIter};

#[derive(Clone, Default)]
pub(crate) struct RunningState;

/// Dashboard lifecycle. Loading ends in Running, or in Failed when the store cannot be built.
pub(crate) enum AppState {
    Loading(LoadingState),
    Running(RunningState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct LoadingState {
    /// Sources the loader will try, in order
    pub(crate) source_names: Vec<String>,
}

#[derive(Default, Clone)]
pub(crate) struct FailedState {
    pub(crate) message: String,
}

/// Navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Page {
    #[default]
    Home,
    About,
}
