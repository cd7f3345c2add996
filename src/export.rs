use std::path::Path;

use crate::{Result, SuburbRecord};

/// `"70.10%"` -> `70.1`, anything missing, unparseable or non-finite counts as `0.0`.
pub fn parse_owner_rate(rate: Option<&str>) -> f64 {
    rate.and_then(|r| r.replace('%', "").trim().parse().ok())
        .filter(|v: &f64| v.is_finite())
        .unwrap_or(0.0)
}

/// Highest 2016 owner occupier rate first. Stable, so equal rates keep their scrape order.
pub fn sort_by_owner_rate(records: &mut [SuburbRecord]) {
    records.sort_by(|a, b| {
        let a = parse_owner_rate(a.owner_occupier_2016.as_deref());
        let b = parse_owner_rate(b.owner_occupier_2016.as_deref());
        b.total_cmp(&a)
    });
}

/// Writes a header row plus one row per record.
/// Nothing is written (and no file created) when there are no records, returns whether a file was written.
pub fn write_csv(path: impl AsRef<Path>, records: &[SuburbRecord]) -> Result<bool> {
    if records.is_empty() {
        return Ok(false);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(true)
}
