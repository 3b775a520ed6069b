//! Diagnostics emitted for malformed notifications.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use lattice_batch::model::{BatchCompletion, Edit};
use lattice_batch::prelude::*;

/// Shared buffer the subscriber writes formatted events into.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock())
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_info<F: FnOnce()>(f: F) -> Vec<String> {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.lines()
}

#[derive(Default)]
struct CountingSink {
    applied: usize,
}

impl ViewSink for CountingSink {
    type Cell = ();

    fn insert_sections(&mut self, _: &[usize]) {}
    fn delete_sections(&mut self, _: &[usize]) {}
    fn reload_sections(&mut self, _: &[usize]) {}
    fn move_section(&mut self, _: usize, _: usize) {}
    fn insert_items(&mut self, _: &[IndexPath]) {}
    fn delete_items(&mut self, _: &[IndexPath]) {}
    fn move_item(&mut self, _: IndexPath, _: IndexPath) {}
    fn cell_at(&self, _: IndexPath) -> Option<()> {
        None
    }
    fn apply_batch(&mut self, edits: Vec<Edit>, completion: BatchCompletion) {
        self.applied += edits.len();
        completion(true);
    }
}

#[test]
fn test_missing_new_path_logs_once() {
    let mut sink = CountingSink::default();
    let mut record: ViewRecord<(), u32> = ViewRecord::new();

    let lines = capture_info(|| {
        record.translator(&mut sink).handle_events([
            ChangeEvent::WillChangeContent,
            ChangeEvent::item(1, None, 1, None),
            ChangeEvent::item(2, None, 1, Some(IndexPath::new(0, 0))),
            ChangeEvent::DidChangeContent,
        ]);
    });

    assert_eq!(lines.len(), 1, "unexpected log output: {lines:?}");
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("got an insert object change, but no new index path"));
    assert_eq!(sink.applied, 1);
}

#[test]
fn test_invalid_section_kinds_log() {
    let mut sink = CountingSink::default();
    let mut record: ViewRecord<(), u32> = ViewRecord::new();

    let lines = capture_info(|| {
        record.translator(&mut sink).handle_events([
            ChangeEvent::WillChangeContent,
            ChangeEvent::section(0, 3),
            ChangeEvent::section(1, 4),
            ChangeEvent::section(2, 42),
            ChangeEvent::DidChangeContent,
        ]);
    });

    assert_eq!(lines.len(), 2, "unexpected log output: {lines:?}");
    assert!(lines.iter().all(|line| line.contains("got invalid section change")));
    assert_eq!(sink.applied, 0);
}
