//! The apply procedure
//!
//! Discover declaration files, decode each, normalize the declared records,
//! and converge remote state through an [`RrsetWriter`]: an idempotent
//! replace first, the collection create as fallback, abort on anything else.

use std::path::Path;

use dns_apply_provider::{RecordType, Rrset, RrsetWriter};

use crate::config::Config;
use crate::declaration::{self, Declaration};
use crate::error::{ApplyError, ApplyResult, WriterError};

/// Counters for the run summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyStats {
    /// Declaration files processed.
    pub files: usize,
    /// Records applied.
    pub records: usize,
}

/// Apply every declared record under `config.records_dir` through `writer`.
///
/// Strictly sequential: one file at a time, one record at a time; a record's
/// replace→create fallback completes before the next record starts. The
/// first error aborts the whole run, leaving later records unattempted.
pub async fn apply_all(config: &Config, writer: &dyn RrsetWriter) -> ApplyResult<ApplyStats> {
    let files = declaration::discover(&config.records_dir)?;

    if files.is_empty() {
        log::info!("No record files found in {}", config.records_dir.display());
        return Ok(ApplyStats::default());
    }

    let mut stats = ApplyStats::default();
    for path in &files {
        log::info!("Processing file: {}", display_name(path));
        let decl = Declaration::load(path)?;
        stats.records += apply_declaration(config, writer, &decl).await?;
        stats.files += 1;
    }

    Ok(stats)
}

/// Apply one declaration's records in order; returns how many were applied.
async fn apply_declaration(
    config: &Config,
    writer: &dyn RrsetWriter,
    decl: &Declaration,
) -> ApplyResult<usize> {
    let subname = &decl.owner.username;
    let mut applied = 0;

    for (type_str, value) in &decl.records {
        // Validation happens before any network call for the record.
        let record_type = RecordType::parse(type_str)?;
        let rrset = Rrset::new(subname.clone(), record_type, value);
        apply_rrset(config, writer, &rrset).await?;
        applied += 1;
    }

    Ok(applied)
}

/// Converge one record set: replace, then create on a non-success status.
async fn apply_rrset(config: &Config, writer: &dyn RrsetWriter, rrset: &Rrset) -> ApplyResult<()> {
    let fqdn = rrset.fully_qualified_name(&config.domain);
    log::info!("Applying {} record for {fqdn}", rrset.record_type);

    match writer.replace(rrset).await {
        Ok(()) => {}
        Err(WriterError::ApiFailure { status, .. }) => {
            log::warn!("PUT failed ({status}), trying POST...");
            match writer.create(std::slice::from_ref(rrset)).await {
                Ok(()) => {}
                Err(WriterError::ApiFailure { body, .. }) => {
                    return Err(ApplyError::RecordFailed {
                        record_type: rrset.record_type.to_string(),
                        name: fqdn,
                        body,
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
        // Transport failures are not a "failure status"; no fallback.
        Err(e) => return Err(e.into()),
    }

    log::info!("Successfully applied {} record for {fqdn}", rrset.record_type);
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| path.display().to_string(), ToString::to_string)
}
