// Combine per-pad drum samples spread over pattern folders into one WAV per pad.
// bank/P1/A-01-kick.wav + bank/P2/(no A-01) -> out/bank/A-01.wav = kick, then silence

pub mod audio;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod shared;
