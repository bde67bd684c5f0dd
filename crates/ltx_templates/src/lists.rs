//! Aggregate list files.
//!
//! Each generated fragment can be recorded in two append-only files in the
//! working directory: `listoffloats.tex` collects `\input` directives and
//! `listofrefs.tex` collects `\ref` directives. Every append opens, writes one
//! line and closes the file on its own; there is no locking and no rollback.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AggregateList, LtxError, LtxResult};
use crate::request::FragmentKind;

pub const FLOATS_LIST: &str = "listoffloats.tex";
pub const REFS_LIST: &str = "listofrefs.tex";

/// Inclusion directive for the floats list.
pub fn inclusion_line(fragment_path: &str) -> String {
    format!("\\input{{{}}}\n", fragment_path)
}

/// Reference directive for the refs list.
pub fn reference_line(kind: FragmentKind, label: &str) -> String {
    format!("\\ref{{{}:{}}}\n", kind.ref_prefix(), label)
}

/// Appends fragment entries to the aggregate list files under a root.
pub struct ListAppender {
    root: PathBuf,
}

impl ListAppender {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn floats_path(&self) -> PathBuf {
        self.root.join(FLOATS_LIST)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.root.join(REFS_LIST)
    }

    /// Record a fragment in both lists when `enabled` is set.
    ///
    /// Returns whether anything was written. A failure on the refs list
    /// leaves the floats line in place.
    pub fn update(
        &self,
        kind: FragmentKind,
        fragment_path: &str,
        label: &str,
        enabled: bool,
    ) -> LtxResult<bool> {
        if !enabled {
            return Ok(false);
        }

        let floats = self.floats_path();
        append_line(&floats, AggregateList::Floats, &inclusion_line(fragment_path))?;

        let refs = self.refs_path();
        append_line(&refs, AggregateList::Refs, &reference_line(kind, label))?;

        info!("Recorded {} '{}' in {:?} and {:?}", kind, label, floats, refs);
        Ok(true)
    }
}

fn append_line(path: &Path, list: AggregateList, line: &str) -> LtxResult<()> {
    let to_error = |source: std::io::Error| LtxError::AggregateAppend {
        list,
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;
    file.write_all(line.as_bytes()).map_err(to_error)
}
