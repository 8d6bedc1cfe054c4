// Canonical 44-byte PCM WAV header, little-endian:
//   0x00 "RIFF"      0x04 chunk_size (36 + data_size)   0x08 "WAVE"
//   0x0C fmt id      0x10 fmt size       0x14 audio format    0x16 channels
//   0x18 sample rate 0x1C byte rate      0x20 block align     0x22 bits per sample
//   0x24 data id     0x28 data_size (payload length)
// Only RIFF/WAVE is checked; the payload is assumed to start right at byte 44.

use std::io::Read;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavHeader {
    pub chunk_id: [u8; 4],
    pub chunk_size: u32,
    pub format: [u8; 4],
    pub fmt_id: [u8; 4],
    pub fmt_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_id: [u8; 4],
    pub data_size: u32,
}

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("read header: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a valid WAV file")]
    BadMagic,
}

impl WavHeader {
    pub const SIZE: usize = 44;
    pub const RIFF_OVERHEAD: u32 = 36; // chunk_size - data_size

    // plain PCM header with an empty payload, for building test files
    #[cfg(test)]
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        let block_align = channels * bits_per_sample.div_ceil(8);
        Self {
            chunk_id: *b"RIFF",
            chunk_size: Self::RIFF_OVERHEAD,
            format: *b"WAVE",
            fmt_id: *b"fmt ",
            fmt_size: 16,
            audio_format: 1,
            channels,
            sample_rate,
            byte_rate: sample_rate * block_align as u32,
            block_align,
            bits_per_sample,
            data_id: *b"data",
            data_size: 0,
        }
    }

    pub fn read_from(r: &mut impl Read) -> Result<Self, HeaderError> {
        let mut bytes = [0u8; Self::SIZE];
        r.read_exact(&mut bytes).map_err(HeaderError::Io)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, HeaderError> {
        let header = Self {
            chunk_id: tag(bytes, 0),
            chunk_size: u32_at(bytes, 4),
            format: tag(bytes, 8),
            fmt_id: tag(bytes, 12),
            fmt_size: u32_at(bytes, 16),
            audio_format: u16_at(bytes, 20),
            channels: u16_at(bytes, 22),
            sample_rate: u32_at(bytes, 24),
            byte_rate: u32_at(bytes, 28),
            block_align: u16_at(bytes, 32),
            bits_per_sample: u16_at(bytes, 34),
            data_id: tag(bytes, 36),
            data_size: u32_at(bytes, 40),
        };
        if &header.chunk_id != b"RIFF" || &header.format != b"WAVE" {
            return Err(HeaderError::BadMagic);
        }
        Ok(header)
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.chunk_id);
        bytes[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.format);
        bytes[12..16].copy_from_slice(&self.fmt_id);
        bytes[16..20].copy_from_slice(&self.fmt_size.to_le_bytes());
        bytes[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.channels.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        bytes[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        bytes[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes[36..40].copy_from_slice(&self.data_id);
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        bytes
    }

    // rewrite both size fields for a new payload length
    pub fn set_data_size(&mut self, data_size: u32) {
        self.data_size = data_size;
        self.chunk_size = Self::RIFF_OVERHEAD.wrapping_add(data_size);
    }

    // how `other` differs in channels/rate/depth, None if compatible
    pub fn format_mismatch(&self, other: &WavHeader) -> Option<String> {
        let mut diffs = Vec::new();
        if self.channels != other.channels {
            diffs.push(format!("channels {} vs {}", self.channels, other.channels));
        }
        if self.sample_rate != other.sample_rate {
            diffs.push(format!("sample rate {} vs {}", self.sample_rate, other.sample_rate));
        }
        if self.bits_per_sample != other.bits_per_sample {
            diffs.push(format!("bit depth {} vs {}", self.bits_per_sample, other.bits_per_sample));
        }
        if diffs.is_empty() { None } else { Some(diffs.join(", ")) }
    }
}

fn tag(b: &[u8; WavHeader::SIZE], at: usize) -> [u8; 4] {
    [b[at], b[at + 1], b[at + 2], b[at + 3]]
}

fn u16_at(b: &[u8; WavHeader::SIZE], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn u32_at(b: &[u8; WavHeader::SIZE], at: usize) -> u32 {
    u32::from_le_bytes(tag(b, at))
}
