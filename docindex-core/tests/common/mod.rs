//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use docindex_core::{Document, DocumentId, InMemoryIndex, Vector, VectorIndex};
use parking_lot::Mutex;
use tracing::subscriber::DefaultGuard;

pub fn ids(raw: &[&str]) -> Vec<DocumentId> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Index holding `"1"` and `"2"`.
pub fn two_doc_index() -> InMemoryIndex {
    let index = InMemoryIndex::new();
    let resp = index
        .upsert_by_vector(
            vec![Document::new("doc one"), Document::new("doc two")],
            vec![Vector::new(&[1.0, 0.0]), Vector::new(&[0.0, 1.0])],
            Some(ids(&["1", "2"])),
        )
        .unwrap();
    assert!(resp.is_complete());
    index
}

pub fn contents(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.content.as_str()).collect()
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
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

/// Routes this thread's `warn` and above into the returned sink until the
/// guard drops.
pub fn capture_warnings() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
