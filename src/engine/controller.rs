use std::sync::Arc;

use crate::chart::{ChartSpec, DisplayMode, MetalSelection, build, series_color};
use crate::config::{CHART, DF};
use crate::data::{DateWindow, TimeSeriesStore, filter};
use crate::error::{ChartError, ValidationError};

use super::messages::SelectionEvent;
use super::state::SelectionState;

/// Per-session orchestrator: validated event → filter → build → publish.
///
/// Owns the selection and the published spec. The store is shared read-only, so any
/// number of controllers can run against one `Arc<TimeSeriesStore>` without locking.
/// `&mut self` on `handle_event` serialises recomputation within a session.
#[derive(Debug)]
pub struct ReactiveController {
    store: Arc<TimeSeriesStore>,
    selection: SelectionState,
    mode: DisplayMode,

    /// THE FRONT BUFFER. Replaced wholesale on every accepted event, never edited.
    published: Arc<ChartSpec>,
    revision: u64,
}

impl ReactiveController {
    /// Start a session on the full date range and publish the Overview chart.
    pub fn new(store: Arc<TimeSeriesStore>, default_metal: &str) -> Result<Self, ValidationError> {
        // Every selectable metal must be drawable in Focused mode, otherwise a perfectly
        // valid user event could fail inside the builder.
        for metal in store.metals() {
            series_color(metal, DisplayMode::Focused)?;
        }

        let selection = SelectionState::initial(&store, default_metal)?;
        let spec = build(
            &DateWindow::full(&store),
            &overview_lineup(&store),
            DisplayMode::Overview,
        )?;

        if DF.log_selection {
            log::info!(
                "Session started on {} ({} to {}), overview of {} series",
                selection.metal,
                selection.start,
                selection.end,
                spec.series.len()
            );
        }

        Ok(Self {
            store,
            selection,
            mode: DisplayMode::Overview,
            published: Arc::new(spec),
            revision: 0,
        })
    }

    /// Apply one user event.
    ///
    /// On success the new Focused spec is published and returned. On failure nothing
    /// changes: selection, mode and published spec are exactly as before.
    pub fn handle_event(&mut self, event: SelectionEvent) -> Result<Arc<ChartSpec>, ValidationError> {
        let next = self
            .selection
            .apply(&event, &self.store)
            .inspect_err(|e| {
                if DF.log_selection {
                    log::warn!("Rejected event ({}): {}", event, e);
                }
            })?;

        let mode = self.mode.after_interaction();
        let spec = crate::trace_time!("Chart recompute", 2_000, { self.recompute(&next, mode) })?;

        if DF.log_recompute {
            log::info!(
                "Published rev {}: '{}' with {} points",
                self.revision + 1,
                spec.title,
                spec.point_count()
            );
        }

        self.selection = next;
        self.mode = mode;
        self.published = Arc::new(spec);
        self.revision += 1;
        Ok(Arc::clone(&self.published))
    }

    fn recompute(&self, selection: &SelectionState, mode: DisplayMode) -> Result<ChartSpec, ChartError> {
        let window = filter(&self.store, selection.start, selection.end)?;
        build(&window, &MetalSelection::Single(selection.metal.clone()), mode)
    }

    pub fn published(&self) -> Arc<ChartSpec> {
        Arc::clone(&self.published)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Number of specs published since construction (the initial Overview is revision 0)
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn store(&self) -> &Arc<TimeSeriesStore> {
        &self.store
    }
}

/// Overview lineup restricted to metals this store actually tracks, in lineup order.
pub fn overview_lineup(store: &TimeSeriesStore) -> MetalSelection {
    let metals: Vec<&str> = CHART
        .overview_lineup
        .iter()
        .copied()
        .filter(|metal| store.contains_metal(metal))
        .collect();
    MetalSelection::lineup(&metals)
}
