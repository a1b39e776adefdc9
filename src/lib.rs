pub mod playback;
pub mod spotify;
