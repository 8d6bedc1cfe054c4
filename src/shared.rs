// Types passed between the loader (discovery/collection) and the combiner.
//
// Terminology, since it's easy to mix up:
//   "pattern": one immediate subdirectory of the base dir, one step of the sequence
//   "pad":     one sample slot, identified by the first two "-" segments of a file name
//              (A-01-kick.wav -> A-01), shared across patterns
//   "gap":     a pattern that has nothing for a pad; filled with silence

use std::fmt;
use std::path::PathBuf;

use crate::error::{CombError, Result};

pub const WAV_EXT: &str = ".wav";
pub const CONFIG_FILE: &str = ".padcomb.json";
pub const DEFAULT_OUT_DIR: &str = "out";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PadId(pub String);

impl PadId {
    // first two "-" segments of the name, .wav stripped first
    pub fn from_file_name(name: &str) -> Result<Self> {
        let stem = strip_wav_ext(name);
        let mut parts = stem.splitn(3, '-');
        match (parts.next(), parts.next()) {
            (Some(bank), Some(slot)) => Ok(PadId(format!("{bank}-{slot}"))),
            _ => Err(CombError::Naming { name: name.to_string() }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // plain prefix match on the raw file name
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.0)
    }
}

impl fmt::Display for PadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// One pattern's contribution to a pad's combined file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombineUnit {
    pub path: PathBuf,
    pub sample_name: String, // output base name, only read off the first unit
    pub gap: bool,           // true = silence sized by the file at `path`
}

impl CombineUnit {
    pub fn real(path: PathBuf, pad: &PadId) -> Self {
        Self { path, sample_name: pad.to_string(), gap: false }
    }

    pub fn gap(template: PathBuf, pad: &PadId) -> Self {
        Self { path: template, sample_name: pad.to_string(), gap: true }
    }
}

pub fn is_wav(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(WAV_EXT)
}

fn strip_wav_ext(name: &str) -> &str {
    if is_wav(name) {
        // ascii-only suffix, so the byte offset is a char boundary
        &name[..name.len() - WAV_EXT.len()]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_id_takes_first_two_segments() {
        let pad = PadId::from_file_name("A-01-kick.wav").unwrap();
        assert_eq!(pad.as_str(), "A-01");

        let pad = PadId::from_file_name("B-12-snare-tight-v2.WAV").unwrap();
        assert_eq!(pad.as_str(), "B-12");
    }

    #[test]
    fn pad_id_ignores_extension() {
        let pad = PadId::from_file_name("A-01.wav").unwrap();
        assert_eq!(pad.as_str(), "A-01");
    }

    #[test]
    fn pad_id_rejects_single_segment() {
        let err = PadId::from_file_name("kick.wav").unwrap_err();
        match err {
            CombError::Naming { name } => assert_eq!(name, "kick.wav"),
            other => panic!("expected naming error, got {other:?}"),
        }
    }

    #[test]
    fn pad_id_allows_empty_segments() {
        // "-" splits into two (empty) segments, which is still two segments
        let pad = PadId::from_file_name("-x.wav").unwrap();
        assert_eq!(pad.as_str(), "-x");
    }

    #[test]
    fn wav_extension_is_case_insensitive() {
        assert!(is_wav("a.wav"));
        assert!(is_wav("a.WaV"));
        assert!(!is_wav("a.wav.bak"));
        assert!(!is_wav("a.aif"));
    }

    #[test]
    fn prefix_match_is_raw() {
        let pad = PadId("A-01".into());
        assert!(pad.matches("A-01-kick.wav"));
        assert!(!pad.matches("a-01-kick.wav"));
        assert!(!pad.matches("B-01-kick.wav"));
    }
}
