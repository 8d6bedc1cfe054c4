use std::path::Path;

use super::scan;
use crate::error::{CombError, Result};
use crate::shared::{CombineUnit, PadId};

// Build the ordered unit list for one pad: one unit per pattern dir, in pattern
// name order (which is the playback order of the combined file).
//
// Within a pattern, the first wav (by name) that starts with the pad id wins.
// If none does, the pattern becomes a gap sized by the *last* wav in that dir.
pub fn collect(base: &Path, allowed: &[String], pad: &PadId) -> Result<Vec<CombineUnit>> {
    let patterns = scan::pattern_dirs(base, allowed)?;
    let mut units = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        let files = scan::wav_files(&pattern.path)?;

        let unit = match files.iter().find(|f| pad.matches(&f.name)) {
            Some(hit) => CombineUnit::real(hit.path.clone(), pad),
            None => {
                let template = files.last().ok_or_else(|| CombError::Config {
                    path: pattern.path.clone(),
                    reason: format!("no wav files to size the gap for pad {pad}"),
                })?;
                CombineUnit::gap(template.path.clone(), pad)
            }
        };
        log::debug!(
            "pad {} / {}: {} {}",
            pad,
            pattern.name,
            if unit.gap { "gap from" } else { "uses" },
            unit.path.display()
        );
        units.push(unit);
    }

    Ok(units)
}
