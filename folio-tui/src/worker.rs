//! Background loader thread.
//!
//! Fetching the spreadsheet is the only operation that suspends; the UI
//! polls responses each tick and shows a neutral state until one arrives.
//! A load in flight is never cancelled — it completes or fails.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use folio_core::config::CategoryRules;
use folio_core::data::{self, Source};
use folio_core::domain::Dataset;

#[derive(Debug)]
pub enum WorkerCommand {
    Load {
        /// `None` falls back to the synthetic demo dataset.
        source: Option<Source>,
        rules: CategoryRules,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum WorkerResponse {
    DatasetLoaded { dataset: Dataset, label: String },
    LoadFailed { error: String },
}

pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(command) = rx.recv() {
            match command {
                WorkerCommand::Load { source, rules } => {
                    let response = run_load(source, &rules);
                    if tx.send(response).is_err() {
                        break;
                    }
                }
                WorkerCommand::Shutdown => break,
            }
        }
    })
}

fn run_load(source: Option<Source>, rules: &CategoryRules) -> WorkerResponse {
    match source {
        Some(source) => match data::load_dataset(&source, rules) {
            Ok(dataset) => WorkerResponse::DatasetLoaded {
                dataset,
                label: source.to_string(),
            },
            Err(error) => WorkerResponse::LoadFailed {
                error: error.to_string(),
            },
        },
        None => WorkerResponse::DatasetLoaded {
            dataset: data::demo_dataset(),
            label: "demo data".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn no_source_serves_the_demo_dataset() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx);

        cmd_tx
            .send(WorkerCommand::Load {
                source: None,
                rules: CategoryRules::default(),
            })
            .unwrap();

        match resp_rx.recv().unwrap() {
            WorkerResponse::DatasetLoaded { dataset, label } => {
                assert_eq!(label, "demo data");
                assert!(!dataset.is_empty());
            }
            WorkerResponse::LoadFailed { error } => panic!("unexpected failure: {error}"),
        }

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn bad_source_reports_a_failure_not_a_crash() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx);

        cmd_tx
            .send(WorkerCommand::Load {
                source: Some(Source::parse("/nonexistent/data.csv")),
                rules: CategoryRules::default(),
            })
            .unwrap();

        assert!(matches!(
            resp_rx.recv().unwrap(),
            WorkerResponse::LoadFailed { .. }
        ));

        drop(cmd_tx);
        handle.join().unwrap();
    }
}
