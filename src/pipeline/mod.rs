// Driver: discover pads, collect each pad's units, combine them into out/<bank>/<pad>.wav
pub mod config;
#[cfg(test)]
pub mod test_fixture;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::audio;
use crate::error::{CombError, Result};
use crate::loader::{pad_collector, pad_discovery, scan};
use crate::shared::PadId;

#[derive(Clone, Debug)]
pub struct CombOptions {
    pub base: PathBuf,
    pub out_root: PathBuf,     // files land in out_root/<last segment of base>/
    pub patterns: Vec<String>, // allow-list, empty = all
    pub jobs: usize,           // 1 = sequential
}

#[derive(Debug, Default)]
pub struct CombReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PadId, CombError)>,
}

pub fn run_comb(opts: &CombOptions) -> Result<CombReport> {
    if !scan::dir_exists(&opts.base)? {
        return Err(CombError::Config { path: opts.base.clone(), reason: "dir not exists".to_string() });
    }
    let out_dir = output_dir(&opts.out_root, &opts.base);
    ensure_dir(&out_dir)?;

    let pads: Vec<PadId> = pad_discovery::discover(&opts.base, &opts.patterns)?.into_iter().collect();
    if pads.is_empty() {
        log::warn!("no pads found under {}", opts.base.display());
        return Ok(CombReport::default());
    }
    log::info!("combining {} pads from {} into {}", pads.len(), opts.base.display(), out_dir.display());

    let results: Vec<(PadId, Result<Option<PathBuf>>)> = if opts.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opts.jobs)
            .thread_name(|i| format!("padcomb-{i}"))
            .build()
            .map_err(|e| CombError::io("create thread pool for", &opts.base, std::io::Error::other(e)))?;
        pool.install(|| {
            pads.into_par_iter()
                .map(|pad| {
                    let res = comb_pad(opts, &out_dir, &pad);
                    (pad, res)
                })
                .collect()
        })
    } else {
        pads.into_iter()
            .map(|pad| {
                let res = comb_pad(opts, &out_dir, &pad);
                (pad, res)
            })
            .collect()
    };

    let mut report = CombReport::default();
    for (pad, res) in results {
        match res {
            Ok(Some(path)) => {
                log::info!("wrote {}", path.display());
                report.written.push(path);
            }
            Ok(None) => log::debug!("pad {pad}: nothing to combine"),
            Err(e) => {
                log::error!("pad {pad}: {e}");
                report.failed.push((pad, e));
            }
        }
    }
    Ok(report)
}

// one pad, start to finish; any error drops this pad only
fn comb_pad(opts: &CombOptions, out_dir: &Path, pad: &PadId) -> Result<Option<PathBuf>> {
    let units = pad_collector::collect(&opts.base, &opts.patterns, pad)?;
    audio::combine(&units, out_dir)
}

// out_root/<last segment of base>; trailing "/" and "." are resolved first,
// a base with no name of its own (like "/") writes straight into out_root
pub fn output_dir(out_root: &Path, base: &Path) -> PathBuf {
    let bank = std::path::absolute(base)
        .ok()
        .and_then(|abs| abs.file_name().map(|n| n.to_owned()))
        .unwrap_or_else(|| ".".into());
    out_root.join(bank)
}

// mkdir -p, but refuse if something that isn't a dir is in the way
pub fn ensure_dir(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => {
            let in_the_way = std::io::Error::new(std::io::ErrorKind::NotADirectory, "is not a directory");
            Err(CombError::io("make dir", path, in_the_way))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            std::fs::create_dir_all(path).map_err(|e| CombError::io("make dir", path, e))
        }
        Err(e) => Err(CombError::io("check dir", path, e)),
    }
}
