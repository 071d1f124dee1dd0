use super::markdown::{parse_markdown, render_markdown};
use crate::{
    error::{Result, StampError},
    model::{Adr, format_filename},
};
use regex::Regex;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tempfile::NamedTempFile;

static ADR_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4,})-(.+)\.md$").expect("valid regex"));

/// Number encoded in an ADR filename, if the name follows `NNNN-slug.md`.
pub(crate) fn filename_number(filename: &str) -> Option<u32> {
    ADR_FILENAME
        .captures(filename)
        .and_then(|caps| caps[1].parse().ok())
}

pub struct AdrStore {
    directory: PathBuf,
}

impl AdrStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of a record's file, whether or not it has been saved yet.
    pub fn path_of(&self, adr: &Adr) -> PathBuf {
        self.directory.join(adr.filename_or_default())
    }

    /// All ADRs in the directory, ordered by number.
    ///
    /// Files that cannot be read are left out without a warning (they show
    /// up in debug logs); a missing directory is an error.
    pub fn list(&self) -> Result<Vec<Adr>> {
        let mut adrs = Vec::new();

        for filename in self.adr_filenames()? {
            match self.load(&filename) {
                Ok(adr) => adrs.push(adr),
                Err(e) => tracing::debug!(
                    file = %filename,
                    error = %e,
                    "Skipping unreadable ADR file"
                ),
            }
        }

        adrs.sort_by_key(|adr| adr.number);
        tracing::debug!(count = adrs.len(), dir = %self.directory.display(), "Listed ADRs");
        Ok(adrs)
    }

    pub fn load(&self, filename: &str) -> Result<Adr> {
        let content = std::fs::read_to_string(self.directory.join(filename))?;
        let mut adr = parse_markdown(&content);
        adr.filename = Some(filename.to_string());
        Ok(adr)
    }

    /// Write an ADR, assigning its filename on first save.
    ///
    /// Overwrites whatever is at that path; number uniqueness is the
    /// caller's concern.
    pub fn save(&self, adr: &mut Adr) -> Result<PathBuf> {
        if adr.filename.is_none() {
            adr.filename = Some(format_filename(adr.number, &adr.title));
        }
        let filename = adr.filename_or_default();
        tracing::info!(number = adr.number, file = %filename, "Saving ADR");

        std::fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(&filename);
        self.atomic_write(&path, render_markdown(adr).as_bytes())?;
        Ok(path)
    }

    /// One past the highest number on disk; 1 for an empty or missing directory.
    pub fn next_number(&self) -> Result<u32> {
        let filenames = match self.adr_filenames() {
            Ok(names) => names,
            Err(StampError::Io(e)) if e.kind() == ErrorKind::NotFound => return Ok(1),
            Err(e) => return Err(e),
        };

        let max = filenames
            .iter()
            .filter_map(|name| filename_number(name))
            .max()
            .unwrap_or(0);
        max.checked_add(1).ok_or_else(|| {
            StampError::Storage(format!("ADR numbers exhausted (highest is {})", max))
        })
    }

    pub fn find_by_number(&self, number: u32) -> Result<Adr> {
        self.list()?
            .into_iter()
            .find(|adr| adr.number == number)
            .ok_or(StampError::NotFound(number))
    }

    /// Allocate the next number, create a Draft and persist it.
    pub fn create(&self, title: &str) -> Result<Adr> {
        let mut adr = Adr::new(self.next_number()?, title);
        self.save(&mut adr)?;
        Ok(adr)
    }

    /// Raw bytes of a stored file, used to undo a partially applied change.
    pub fn read_raw(&self, filename: &str) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.directory.join(filename))?)
    }

    pub fn restore_raw(&self, filename: &str, content: &[u8]) -> Result<()> {
        self.atomic_write(&self.directory.join(filename), content)
    }

    fn adr_filenames(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.directory)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if ADR_FILENAME.is_match(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Write to a temp file in the target directory, then rename over the target.
    fn atomic_write(&self, target_path: &Path, content: &[u8]) -> Result<()> {
        let target_dir = target_path
            .parent()
            .ok_or_else(|| StampError::Storage("Target path has no parent directory".to_string()))?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| StampError::Storage(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content)
            .map_err(|e| StampError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| StampError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| StampError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup_test_store() -> (AdrStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = AdrStore::new(temp_dir.path());
        (store, temp_dir)
    }

    fn record(number: u32, title: &str) -> Adr {
        Adr::new(number, title)
            .with_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .with_status(Status::Accepted)
            .with_context("Context")
            .with_decision("Decision")
            .with_consequences("Consequences")
    }

    #[test]
    fn test_filename_grammar() {
        let cases = [
            ("0001-test.md", Some(1)),
            ("0012-some-title.md", Some(12)),
            ("1234-another-one.md", Some(1234)),
            ("12345-large-number.md", Some(12345)),
            ("README.md", None),
            ("1-no-padding.md", None),
            ("0001-test.txt", None),
            ("0001.md", None),
            ("test-0001.md", None),
            ("0001-test.md.bak", None),
        ];
        for (name, want) in cases {
            assert_eq!(filename_number(name), want, "{}", name);
        }
    }

    #[test]
    fn test_list_empty_directory() {
        let (store, _temp_dir) = setup_test_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_missing_directory_is_error() {
        let store = AdrStore::new("/nonexistent/path/that/does/not/exist");
        assert!(matches!(store.list(), Err(StampError::Io(_))));
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let (store, temp_dir) = setup_test_store();

        // Written out of order on purpose
        store.save(&mut record(10, "Tenth")).unwrap();
        store.save(&mut record(2, "Second")).unwrap();
        store.save(&mut record(1, "First")).unwrap();

        std::fs::write(temp_dir.path().join("README.md"), "# README").unwrap();
        std::fs::create_dir(temp_dir.path().join("0003-a-directory.md")).unwrap();
        std::fs::write(temp_dir.path().join("0004-not-utf8.md"), [0xff, 0xfe, 0x00]).unwrap();

        let adrs = store.list().unwrap();
        let numbers: Vec<_> = adrs.iter().map(|a| a.number).collect();
        assert_eq!(numbers, vec![1, 2, 10]);
        assert_eq!(adrs[0].filename.as_deref(), Some("0001-first.md"));
    }

    #[test]
    fn test_load_stamps_filename() {
        let (store, temp_dir) = setup_test_store();
        let content = "# 1. Test Decision\n\nDate: 2024-01-15\n\n## Status\n\nAccepted\n";
        std::fs::write(temp_dir.path().join("0001-test-decision.md"), content).unwrap();

        let adr = store.load("0001-test-decision.md").unwrap();
        assert_eq!(adr.number, 1);
        assert_eq!(adr.title, "Test Decision");
        assert!(adr.status.is(Status::Accepted));
        assert_eq!(adr.filename.as_deref(), Some("0001-test-decision.md"));
    }

    #[test]
    fn test_load_missing_file() {
        let (store, _temp_dir) = setup_test_store();
        assert!(store.load("nonexistent.md").is_err());
    }

    #[test]
    fn test_save_assigns_filename() {
        let (store, temp_dir) = setup_test_store();
        let mut adr = record(1, "Test Decision");

        let path = store.save(&mut adr).unwrap();

        assert_eq!(adr.filename.as_deref(), Some("0001-test-decision.md"));
        assert_eq!(path, temp_dir.path().join("0001-test-decision.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, adr.to_markdown());
    }

    #[test]
    fn test_save_keeps_existing_filename() {
        let (store, temp_dir) = setup_test_store();
        let mut adr = record(1, "Test Decision").with_filename("custom-filename.md");

        store.save(&mut adr).unwrap();
        // A retitled record stays in its original file
        adr.title = "Renamed".to_string();
        store.save(&mut adr).unwrap();

        assert_eq!(adr.filename.as_deref(), Some("custom-filename.md"));
        assert!(temp_dir.path().join("custom-filename.md").exists());
        assert!(!temp_dir.path().join("0001-renamed.md").exists());
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = AdrStore::new(temp_dir.path().join("docs").join("adr"));

        store.save(&mut record(1, "First")).unwrap();

        assert!(temp_dir.path().join("docs/adr/0001-first.md").exists());
    }

    #[test]
    fn test_next_number() {
        let (store, temp_dir) = setup_test_store();
        assert_eq!(store.next_number().unwrap(), 1);

        for name in ["0001-first.md", "0002-second.md", "0005-fifth.md"] {
            std::fs::write(temp_dir.path().join(name), "# 1. Test\n").unwrap();
        }
        assert_eq!(store.next_number().unwrap(), 6);
    }

    #[test]
    fn test_next_number_missing_directory() {
        let store = AdrStore::new("/nonexistent/path");
        assert_eq!(store.next_number().unwrap(), 1);
    }

    #[test]
    fn test_next_number_ignores_non_adr_files() {
        let (store, temp_dir) = setup_test_store();
        for name in ["README.md", "notes.txt", "1-invalid-format.md"] {
            std::fs::write(temp_dir.path().join(name), "test").unwrap();
        }
        assert_eq!(store.next_number().unwrap(), 1);
    }

    #[test]
    fn test_find_by_number() {
        let (store, _temp_dir) = setup_test_store();
        store.save(&mut record(1, "First")).unwrap();
        store.save(&mut record(2, "Second")).unwrap();

        let found = store.find_by_number(2).unwrap();
        assert_eq!(found.title, "Second");

        let err = store.find_by_number(99).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "ADR 0099 not found");
    }

    #[test]
    fn test_create_allocates_next_number() {
        let (store, temp_dir) = setup_test_store();
        store.save(&mut record(3, "Third")).unwrap();

        let adr = store.create("Use Event Sourcing").unwrap();

        assert_eq!(adr.number, 4);
        assert!(adr.status.is(Status::Draft));
        assert!(temp_dir.path().join("0004-use-event-sourcing.md").exists());
    }

    #[test]
    fn test_restore_raw() {
        let (store, _temp_dir) = setup_test_store();
        let mut adr = record(1, "First");
        store.save(&mut adr).unwrap();
        let before = store.read_raw("0001-first.md").unwrap();

        adr.status_extra.push("Amends [ADR-0002](0002-x.md)".to_string());
        store.save(&mut adr).unwrap();
        store.restore_raw("0001-first.md", &before).unwrap();

        assert!(store.load("0001-first.md").unwrap().status_extra.is_empty());
    }

    #[test]
    fn test_next_number_at_u32_max_is_an_error() {
        let (store, temp_dir) = setup_test_store();
        std::fs::write(temp_dir.path().join("4294967295-x.md"), "# 4294967295. X
").unwrap();

        let err = store.next_number().unwrap_err();
        assert!(matches!(err, StampError::Storage(_)));
        assert!(store.create("After the last").is_err());
    }

    #[test]
    fn test_next_number_with_five_digit_names() {
        let (store, temp_dir) = setup_test_store();
        std::fs::write(temp_dir.path().join("10000-ten-thousand.md"), "# 10000. X
").unwrap();

        assert_eq!(store.next_number().unwrap(), 10001);
    }
}
