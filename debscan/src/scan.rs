// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use debscan_index::{
    ArContainer, Container, PackageRecord, RecordBuilder, RecordError, TarGzContainer,
};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{IoContext, ScanError};

/// Result of processing one archive.
#[derive(Debug)]
pub struct ScanOutcome {
    pub path: PathBuf,
    pub result: Result<PackageRecord, ScanError>,
}

/// Builds records for every package archive in a directory.
///
/// Archives are processed concurrently, at most `jobs` at a time. A failing
/// archive yields a failed [`ScanOutcome`] and never aborts the scan.
#[derive(Debug, Clone)]
pub struct Scanner<O = ArContainer, I = TarGzContainer> {
    builder: Arc<RecordBuilder<O, I>>,
    extension: String,
    jobs: usize,
}

impl Scanner {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RecordBuilder::new().strict(config.strict),
            config.extension(),
            config.jobs(),
        )
    }
}

impl<O, I> Scanner<O, I>
where
    O: Container + Send + Sync + 'static,
    I: Container + Send + Sync + 'static,
{
    pub fn new(builder: RecordBuilder<O, I>, extension: impl Into<String>, jobs: usize) -> Self {
        Self {
            builder: Arc::new(builder),
            extension: extension.into(),
            jobs: jobs.max(1),
        }
    }

    /// Regular files directly inside `dir` whose extension matches, sorted.
    pub async fn list_archives(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .io_context(|| format!("Failed to read directory {}", dir.display()))?;

        let mut archives = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .io_context(|| format!("Failed to list directory {}", dir.display()))?
        {
            let path = entry.path();
            if path.extension() != Some(OsStr::new(&self.extension)) {
                continue;
            }
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => archives.push(path),
                Ok(_) => debug!("skipping {}: not a regular file", path.display()),
                Err(e) => warn!("skipping {}: {e}", path.display()),
            }
        }
        archives.sort();
        Ok(archives)
    }

    /// Builds a record for every archive in `dir`.
    ///
    /// Outcomes are sorted by path. Only a failure to list `dir` is an
    /// error; per-archive failures are carried in the outcomes.
    pub async fn scan_dir(&self, dir: &Path) -> Result<Vec<ScanOutcome>, ScanError> {
        let archives = self.list_archives(dir).await?;
        info!(
            "scanning {} archives in {} with {} jobs",
            archives.len(),
            dir.display(),
            self.jobs
        );

        let mut outcomes = Vec::with_capacity(archives.len());
        let mut pending = archives.into_iter();
        let mut tasks = JoinSet::new();
        let mut in_flight = HashMap::new();

        loop {
            while tasks.len() < self.jobs {
                let Some(path) = pending.next() else { break };
                let builder = Arc::clone(&self.builder);
                let task_path = path.clone();
                let handle = tasks.spawn(build_record(builder, task_path));
                in_flight.insert(handle.id(), path);
            }

            let Some(joined) = tasks.join_next_with_id().await else {
                break;
            };
            let (id, result) = match joined {
                Ok((id, result)) => (id, result),
                Err(e) => (e.id(), Err(ScanError::Join(e))),
            };
            let Some(path) = in_flight.remove(&id) else {
                continue;
            };
            if let Err(e) = &result {
                log_failure(e);
            }
            outcomes.push(ScanOutcome { path, result });
        }

        outcomes.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(outcomes)
    }
}

async fn build_record<O, I>(
    builder: Arc<RecordBuilder<O, I>>,
    path: PathBuf,
) -> Result<PackageRecord, ScanError>
where
    O: Container + Send + Sync + 'static,
    I: Container + Send + Sync + 'static,
{
    let size = tokio::fs::metadata(&path)
        .await
        .io_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    let data = tokio::fs::read(&path)
        .await
        .io_context(|| format!("Failed to read {}", path.display()))?;

    tokio::task::spawn_blocking(move || {
        builder
            .build(&data, &path, size)
            .map_err(|source| ScanError::Record { path, source })
    })
    .await?
}

fn log_failure(e: &ScanError) {
    match e {
        ScanError::Record {
            source: RecordError::Locate(locate),
            ..
        } if locate.is_missing() => warn!("{e}"),
        _ => error!("{e}"),
    }
}
