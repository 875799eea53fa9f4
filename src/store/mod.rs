//! Record store module
//!
//! One page is one CSV file of `index,date,time,text` rows with no header.
//! The file is the only source of truth; nothing is cached between calls.

use chrono::{Local, NaiveDateTime};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::Result;
use crate::models::{ClockFormat, Record};

/// File extension of page files
pub const PAGE_EXT: &str = "csv";

/// Append-only store over a single page file
pub struct PageStore {
    path: PathBuf,
}

impl PageStore {
    /// The page file must already exist (see `config::ensure_page`)
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a note stamped with the current local time
    pub fn append(&self, text: &str, clock: ClockFormat) -> Result<Record> {
        self.append_at(text, Local::now().naive_local(), clock)
    }

    /// Append a note with an explicit timestamp
    pub fn append_at(&self, text: &str, at: NaiveDateTime, clock: ClockFormat) -> Result<Record> {
        let index = self.scan()?.len() as u64 + 1;
        let record = Record::new(index, at, clock, text);

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(record.to_row())?;
        writer.flush()?;

        tracing::debug!(page = %self.path.display(), index, "appended record");
        Ok(record)
    }

    /// Read every record in file order
    pub fn scan(&self) -> Result<Vec<Record>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            records.push(Record::from_row(&row, line)?);
        }

        tracing::debug!(page = %self.path.display(), count = records.len(), "scanned page");
        Ok(records)
    }

    /// Rewrite every record through `transform`, keeping order and indices.
    ///
    /// The new content goes to a temporary file next to the page which then
    /// replaces it, so a failure leaves the page untouched.
    pub fn rewrite_all<F>(&self, mut transform: F) -> Result<usize>
    where
        F: FnMut(Record) -> Record,
    {
        let records = self.scan()?;
        let count = records.len();

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            for record in records {
                let index = record.index;
                let mut rewritten = transform(record);
                rewritten.index = index;
                writer.write_record(rewritten.to_row())?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.as_file().set_permissions(fs::metadata(&self.path)?.permissions())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(page = %self.path.display(), count, "rewrote page");
        Ok(count)
    }
}

/// Names of the pages in a notebook, sorted
pub fn list_pages(notebook: &Path) -> Vec<String> {
    let mut pages: Vec<String> = WalkDir::new(notebook)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(PAGE_EXT))
        })
        .filter_map(|e| {
            e.path()
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        })
        .collect();
    pages.sort();
    pages
}
