// Purely for testing: write small canonical WAV files and pattern trees into temp dirs.

use std::path::{Path, PathBuf};

use crate::audio::WavHeader;

pub struct WavSpec {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits: u16,
    pub payload: Vec<u8>,
}

// mono / 8 kHz / 8-bit with `len` bytes of payload
pub fn mono8(len: usize) -> Option<WavSpec> {
    Some(WavSpec { channels: 1, sample_rate: 8000, bits: 8, payload: vec![0x80; len] })
}

pub fn write_wav(dir: &Path, name: &str, channels: u16, sample_rate: u32, bits: u16, payload: &[u8]) -> PathBuf {
    let mut header = WavHeader::pcm(channels, sample_rate, bits);
    header.set_data_size(payload.len() as u32);
    write_wav_with(dir, name, header, payload)
}

// header is written as given, so it can lie about the payload
pub fn write_wav_with(dir: &Path, name: &str, header: WavHeader, payload: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = header.to_bytes().to_vec();
    bytes.extend_from_slice(payload);
    std::fs::write(&path, bytes).unwrap();
    path
}

pub fn read_payload(path: &Path) -> (WavHeader, Vec<u8>) {
    let bytes = std::fs::read(path).unwrap();
    let head: [u8; WavHeader::SIZE] = bytes[..WavHeader::SIZE].try_into().unwrap();
    (WavHeader::from_bytes(&head).unwrap(), bytes[WavHeader::SIZE..].to_vec())
}

// base/<pattern>/<file> builder; `None` writes an empty non-wav file body
pub struct PatternTree<'a> {
    base: &'a Path,
}

impl<'a> PatternTree<'a> {
    pub fn new(base: &'a Path) -> Self {
        Self { base }
    }

    pub fn file(self, pattern: &str, name: &str, spec: Option<WavSpec>) -> Self {
        let dir = self.base.join(pattern);
        std::fs::create_dir_all(&dir).unwrap();
        match spec {
            Some(s) => {
                write_wav(&dir, name, s.channels, s.sample_rate, s.bits, &s.payload);
            }
            None => std::fs::write(dir.join(name), b"").unwrap(),
        }
        self
    }
}
