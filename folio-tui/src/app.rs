//! Application state — single-owner, main-thread only.
//!
//! The worker thread owns dataset loading and reports over channels;
//! everything else lives here and is recomputed from `ViewState` snapshots.

use std::sync::mpsc::{Receiver, Sender};

use folio_core::config::FolioConfig;
use folio_core::data::Source;
use folio_core::domain::{Dataset, SeriesCategory};
use folio_core::transform::{smoothing, ViewState};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which lower panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Series,
    View,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Series => 0,
            Panel::View => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Series),
            1 => Some(Panel::View),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Series => "Series",
            Panel::View => "View",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Dataset lifecycle as seen by the UI. While a load is pending the chart
/// shows a neutral state; a started load always runs to completion.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Dataset),
    Failed(String),
}

/// One row of the series panel: group headers interleaved with series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesRow {
    Header(SeriesCategory),
    Series(String),
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Data + view
    pub load: LoadState,
    pub view: ViewState,
    pub series_cursor: usize,
    pub source: Option<Source>,
    pub config: FolioConfig,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        config: FolioConfig,
        source: Option<Source>,
    ) -> Self {
        Self {
            active_panel: Panel::Series,
            running: true,
            load: LoadState::Loading,
            view: ViewState::for_dataset(&Dataset::default()),
            series_cursor: 0,
            source,
            config,
            worker_tx,
            worker_rx,
            status_message: None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.load {
            LoadState::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// Ask the worker for a (re)load of the configured source.
    pub fn request_load(&mut self) {
        self.load = LoadState::Loading;
        let command = WorkerCommand::Load {
            source: self.source.clone(),
            rules: self.config.categories.clone(),
        };
        if self.worker_tx.send(command).is_err() {
            self.load = LoadState::Failed("loader thread is gone".into());
        }
    }

    /// Fresh view snapshot for a newly loaded dataset: everything visible,
    /// display options from config.
    pub fn install_dataset(&mut self, dataset: Dataset) {
        self.view = ViewState::with_defaults(&dataset, &self.config.view);
        self.series_cursor = 0;
        self.load = LoadState::Ready(dataset);
    }

    /// Rows for the series panel, group headers included.
    pub fn series_rows(&self) -> Vec<SeriesRow> {
        let Some(dataset) = self.dataset() else {
            return Vec::new();
        };
        let mut rows = Vec::new();
        for category in [SeriesCategory::Fund, SeriesCategory::Index] {
            let names = dataset.names_in(category);
            if names.is_empty() {
                continue;
            }
            rows.push(SeriesRow::Header(category));
            rows.extend(names.into_iter().map(|name| SeriesRow::Series(name.into())));
        }
        rows
    }

    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.series_rows().len();
        if len == 0 {
            return;
        }
        let cursor = self.series_cursor as i32 + delta;
        self.series_cursor = cursor.clamp(0, len as i32 - 1) as usize;
    }

    /// Space/Enter on the series panel: flip a series, or a whole group
    /// when the cursor sits on its header.
    pub fn toggle_at_cursor(&mut self) {
        let Some(row) = self.series_rows().get(self.series_cursor).cloned() else {
            return;
        };
        match row {
            SeriesRow::Series(name) => self.view.toggle(&name),
            SeriesRow::Header(category) => self.toggle_category(category),
        }
    }

    /// Hide the group if any of it is visible, show it all otherwise.
    pub fn toggle_category(&mut self, category: SeriesCategory) {
        let LoadState::Ready(dataset) = &self.load else {
            return;
        };
        let any_visible = self.view.any_visible_in(dataset, category);
        self.view.set_category(dataset, category, !any_visible);
    }

    pub fn set_category(&mut self, category: SeriesCategory, visible: bool) {
        let LoadState::Ready(dataset) = &self.load else {
            return;
        };
        self.view.set_category(dataset, category, visible);
    }

    pub fn cycle_smoothing(&mut self) {
        self.view.smoothing = smoothing::next_preset(self.view.smoothing);
        self.set_status(format!(
            "Smoothing: {}",
            smoothing::preset_label(self.view.smoothing)
        ));
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Error));
    }
}
