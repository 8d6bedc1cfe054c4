use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use super::scan;
use crate::error::Result;
use crate::shared::PadId;

// Every distinct pad id across the (allowed) pattern directories, in one pass.
pub fn discover(base: &Path, allowed: &[String]) -> Result<BTreeSet<PadId>> {
    let mut pads = BTreeSet::new();
    for pattern in scan::pattern_dirs(base, allowed)? {
        for file in scan::wav_files(&pattern.path)? {
            let pad = PadId::from_file_name(&file.name)?;
            if pads.insert(pad.clone()) {
                log::debug!("found pad {} in {}", pad, pattern.name);
            }
        }
    }
    Ok(pads)
}

// Rescans and returns the smallest pad id that isn't in `seen` yet.
// Calling it until it returns None visits the same pads `discover` does.
pub fn next_unseen(base: &Path, allowed: &[String], seen: &HashSet<PadId>) -> Result<Option<PadId>> {
    let pads = discover(base, allowed)?;
    Ok(pads.into_iter().find(|p| !seen.contains(p)))
}
