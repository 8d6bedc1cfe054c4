use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::header::{HeaderError, WavHeader};
use crate::error::{CombError, Result};
use crate::shared::{CombineUnit, WAV_EXT};

// Concatenate the payloads of `units` into out_dir/<sample_name>.wav.
// The first unit's header is the output format; later real units must match its
// channels, rate and depth. Gaps add data_size zeros of their template file.
// Nothing is written unless the whole payload was assembled.
pub fn combine(units: &[CombineUnit], out_dir: &Path) -> Result<Option<PathBuf>> {
    let Some(first) = units.first() else {
        return Ok(None);
    };

    let mut out_header: Option<WavHeader> = None;
    let mut payload: Vec<u8> = Vec::new();

    for unit in units {
        let mut file = File::open(&unit.path).map_err(|e| CombError::io("open file", &unit.path, e))?;
        let header = read_header(&mut file, &unit.path)?;

        let first_header = *out_header.get_or_insert(header);
        if !unit.gap {
            // gaps only lend their size, so they skip this
            if let Some(detail) = first_header.format_mismatch(&header) {
                return Err(CombError::Incompatible {
                    first: first.path.clone(),
                    other: unit.path.clone(),
                    detail,
                });
            }
        }

        let len = header.data_size as usize;
        if unit.gap {
            log::debug!("  gap   {} ({} bytes silence)", unit.path.display(), len);
            payload.resize(payload.len() + len, 0);
        } else {
            log::debug!("  audio {} ({} bytes)", unit.path.display(), len);
            // grows with what's actually there, so a lying header can't force a huge buffer
            let got = (&mut file)
                .take(len as u64)
                .read_to_end(&mut payload)
                .map_err(|e| CombError::io("read audio data from", &unit.path, e))?;
            if got != len {
                let short = std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("expected {len} bytes of audio, found {got}"),
                );
                return Err(CombError::io("read audio data from", &unit.path, short));
            }
        }
        // file closes here, before the next unit is opened
    }

    let Some(mut header) = out_header else {
        return Ok(None);
    };
    let total = u32::try_from(payload.len())
        .ok()
        .filter(|n| n.checked_add(WavHeader::RIFF_OVERHEAD).is_some())
        .ok_or_else(|| CombError::Format {
            path: first.path.clone(),
            reason: format!("combined payload of {} bytes doesn't fit a WAV header", payload.len()),
        })?;
    header.set_data_size(total);

    let out_path = out_dir.join(format!("{}{}", first.sample_name, WAV_EXT));
    let mut bytes = Vec::with_capacity(WavHeader::SIZE + payload.len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(&payload);
    std::fs::write(&out_path, bytes).map_err(|e| CombError::io("write output file", &out_path, e))?;

    Ok(Some(out_path))
}

fn read_header(file: &mut File, path: &Path) -> Result<WavHeader> {
    WavHeader::read_from(file).map_err(|e| match e {
        HeaderError::Io(source) => CombError::io("read header from", path, source),
        HeaderError::BadMagic => CombError::Format {
            path: path.to_path_buf(),
            reason: "not a valid WAV file".to_string(),
        },
    })
}
