use crate::date::format_date;
use crate::model::DayReport;
use crate::report::weekday_label;
use anyhow::Context;
use chrono::Datelike;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Export JSON des statuts (jolie mise en forme)
pub fn export_period_json<P: AsRef<Path>>(path: P, reports: &[DayReport]) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(reports)?;
    write_atomic(path.as_ref(), &json)
}

/// Export CSV: header `date,weekday,roster,status,holiday`
pub fn export_period_csv<P: AsRef<Path>>(path: P, reports: &[DayReport]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["date", "weekday", "roster", "status", "holiday"])?;
    for r in reports {
        let date = format_date(r.date);
        w.write_record([
            date.as_str(),
            weekday_label(r.date.weekday()),
            r.roster.as_str(),
            r.status.label(),
            r.holiday.as_deref().unwrap_or(""),
        ])?;
    }
    let data = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {}", e.error()))?;
    write_atomic(path.as_ref(), &data)
}

fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    #[cfg(feature = "logging")]
    tracing::debug!(path = %path.display(), bytes = data.len(), "export written");
    Ok(())
}
