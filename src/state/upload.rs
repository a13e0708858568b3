// src/state/upload.rs
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::model::UploadedFile;

// Finished progress rows linger briefly, then clean themselves up.
const ROW_LINGER: Duration = Duration::from_secs(2);

/// One in-flight upload's progress display. The percentage is not a real
/// transport measurement: 0 at spawn, 100 on success.
#[derive(Debug, Clone)]
pub struct ProgressRow {
    pub id: Uuid,
    pub name: String,
    pub percent: u8,
    completed_at: Option<Instant>,
}

/// Upload bookkeeping: progress rows for in-flight transfers plus the list
/// of backend-confirmed attachments.
#[derive(Debug, Default)]
pub struct UploadState {
    pub rows: Vec<ProgressRow>,
    pub files: Vec<UploadedFile>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.rows.push(ProgressRow {
            id,
            name: name.to_string(),
            percent: 0,
            completed_at: None,
        });
        id
    }

    pub fn succeed(&mut self, row_id: Uuid, file: UploadedFile, now: Instant) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) {
            row.percent = 100;
            row.completed_at = Some(now);
        }
        self.files.push(file);
    }

    pub fn fail(&mut self, row_id: Uuid) {
        self.rows.retain(|r| r.id != row_id);
    }

    /// Drop completed rows that have lingered long enough.
    pub fn prune(&mut self, now: Instant) {
        self.rows.retain(|r| match r.completed_at {
            Some(done) => now.duration_since(done) < ROW_LINGER,
            None => true,
        });
    }

    /// Backend confirmed the deletion; drop the matching list entry.
    pub fn remove_file(&mut self, file_id: &str) {
        self.files.retain(|f| f.file_id != file_id);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(id: &str) -> UploadedFile {
        UploadedFile {
            file_id: id.to_string(),
            name: "doc.pdf".to_string(),
            size: 1024,
        }
    }

    #[test]
    fn success_sets_full_progress_and_appends_entry() {
        let mut uploads = UploadState::new();
        let row = uploads.begin("doc.pdf");
        assert_eq!(uploads.rows[0].percent, 0);

        uploads.succeed(row, receipt("f1"), Instant::now());
        assert_eq!(uploads.rows[0].percent, 100);
        assert_eq!(uploads.files.len(), 1);
    }

    #[test]
    fn completed_rows_prune_after_linger() {
        let mut uploads = UploadState::new();
        let row = uploads.begin("doc.pdf");
        let now = Instant::now();
        uploads.succeed(row, receipt("f1"), now);

        uploads.prune(now + Duration::from_secs(1));
        assert_eq!(uploads.rows.len(), 1);
        uploads.prune(now + ROW_LINGER + Duration::from_millis(1));
        assert!(uploads.rows.is_empty());
        // The confirmed file list is untouched by pruning.
        assert_eq!(uploads.files.len(), 1);
    }

    #[test]
    fn failure_removes_only_that_row() {
        let mut uploads = UploadState::new();
        let a = uploads.begin("a.pdf");
        let _b = uploads.begin("b.pdf");
        uploads.fail(a);
        assert_eq!(uploads.rows.len(), 1);
        assert_eq!(uploads.rows[0].name, "b.pdf");
    }

    #[test]
    fn confirmed_removal_drops_exactly_one_entry() {
        let mut uploads = UploadState::new();
        let a = uploads.begin("a.pdf");
        let b = uploads.begin("b.pdf");
        let now = Instant::now();
        uploads.succeed(a, receipt("f1"), now);
        uploads.succeed(b, receipt("f2"), now);

        uploads.remove_file("f1");
        assert_eq!(uploads.files.len(), 1);
        assert_eq!(uploads.files[0].file_id, "f2");

        // Failed deletions never reach remove_file; the list is unchanged.
        uploads.remove_file("unknown");
        assert_eq!(uploads.files.len(), 1);
    }
}
