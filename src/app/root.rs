use {
    eframe::{
        Frame,
        egui::{Context, ViewportCommand, Visuals},
    },
    std::{
        mem,
        sync::{
            Arc,
            mpsc::{self, Receiver, TryRecvError},
        },
    },
};

use crate::{
    Cli,
    app::{AppState, FailedState, LoadingState, Page, PhaseView, RunningState},
    config::{DATASET, DF},
    data::{TimeSeriesStore, load_store, sources_for},
    engine::{ReactiveController, SelectionEvent, SelectionState},
    error::ValidationError,
    ui::{ChartView, UI_CONFIG, UI_TEXT, render_loading},
};

#[cfg(not(target_arch = "wasm32"))]
use std::thread;

/// What the background loader hands to the UI thread
type LoadResult = anyhow::Result<(Arc<TimeSeriesStore>, String)>;

#[derive(Default)]
pub struct App {
    pub(crate) controller: Option<ReactiveController>,
    /// Widget-side copy of the selection. Reset to the controller's after every event.
    pub(crate) draft: Option<SelectionState>,
    pub(crate) source_name: String,
    pub(crate) page: Page,
    pub(crate) last_rejection: Option<ValidationError>,
    pub(crate) chart_view: ChartView,
    state: AppState,
    pub(crate) data_rx: Option<Receiver<LoadResult>>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app = Self::default();
        setup_custom_visuals(&cc.egui_ctx);

        let sources = sources_for(args.data);
        app.state = AppState::Loading(LoadingState {
            source_names: sources.iter().map(|s| s.describe()).collect(),
        });

        let (data_tx, data_rx) = mpsc::channel();
        app.data_rx = Some(data_rx);

        #[cfg(not(target_arch = "wasm32"))]
        {
            thread::spawn(move || {
                let result = load_store(&sources);
                let _ = data_tx.send(result);
            });
        }

        // Only the embedded table is available on the web, so parse it in place
        #[cfg(target_arch = "wasm32")]
        {
            let _ = data_tx.send(load_store(&sources));
        }

        app
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, state: &mut LoadingState) -> AppState {
        let received = match &self.data_rx {
            Some(rx) => rx.try_recv(),
            None => Err(TryRecvError::Disconnected),
        };

        match received {
            Ok(Ok((store, name))) => {
                self.data_rx = None;
                self.start_session(ctx, store, name)
            }
            Ok(Err(e)) => {
                self.data_rx = None;
                log::error!("Price data failed to load: {:#}", e);
                AppState::Failed(FailedState {
                    message: format!("{:#}", e),
                })
            }
            Err(TryRecvError::Empty) => {
                render_loading(ctx, state);
                ctx.request_repaint();
                AppState::Loading(mem::take(state))
            }
            Err(TryRecvError::Disconnected) => {
                self.data_rx = None;
                AppState::Failed(FailedState {
                    message: "Loader stopped without delivering a result".to_string(),
                })
            }
        }
    }

    fn start_session(&mut self, ctx: &Context, store: Arc<TimeSeriesStore>, name: String) -> AppState {
        let controller = match ReactiveController::new(store, DATASET.default_metal) {
            Ok(controller) => controller,
            Err(e) => {
                log::error!("Cannot start a session: {}", e);
                return AppState::Failed(FailedState {
                    message: e.to_string(),
                });
            }
        };

        ctx.send_viewport_cmd(ViewportCommand::Title(format!(
            "{} {}",
            UI_TEXT.window_title_subject,
            controller.store().year_bounds()
        )));

        if DF.log_loader {
            log::info!("Session running on {}", name);
        }

        self.draft = Some(controller.selection().clone());
        self.controller = Some(controller);
        self.source_name = name;
        self.chart_view.clear_cache();
        AppState::Running(RunningState)
    }

    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.render_header(ctx);
        self.render_navbar(ctx);
        self.render_status_panel(ctx);
        self.render_page(ctx);
    }

    /// Route a widget change through the controller.
    /// Rejected events keep the previous chart and are surfaced in the status bar.
    pub(crate) fn apply_event(&mut self, event: SelectionEvent) {
        let Some(controller) = &mut self.controller else {
            return;
        };

        match controller.handle_event(event) {
            Ok(_) => self.last_rejection = None,
            Err(e) => {
                log::warn!("Selection rejected: {}", e);
                self.last_rejection = Some(e);
            }
        }

        // Widgets always mirror the committed selection
        self.draft = Some(controller.selection().clone());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.root_background;
    visuals.panel_fill = UI_CONFIG.colors.root_background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
