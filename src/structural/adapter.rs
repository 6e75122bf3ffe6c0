// Pattern: Adapter
// The mp3 player only understands mp3. Anything else goes through an
// adapter that routes the request to a player that can handle it.

use crate::console::Console;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Mp3,
    Mp4,
    Vr,
}

pub trait Player {
    fn play(&self, media: MediaType, out: &mut dyn Console);
}

pub struct Mp3Player;

impl Player for Mp3Player {
    fn play(&self, media: MediaType, out: &mut dyn Console) {
        if media == MediaType::Mp3 {
            out.line("Playing mp3 file");
        } else {
            debug!(?media, "delegating to adapter");
            PlayerAdapter.play(media, out);
        }
    }
}

pub struct Mp4Player;

impl Player for Mp4Player {
    fn play(&self, _media: MediaType, out: &mut dyn Console) {
        out.line("Playing mp4 file");
    }
}

pub struct VrPlayer;

impl Player for VrPlayer {
    fn play(&self, _media: MediaType, out: &mut dyn Console) {
        out.line("Playing VR file");
    }
}

/// Routes foreign formats to their players. Mp3 is not in its set and
/// falls through to "play nothing".
pub struct PlayerAdapter;

impl Player for PlayerAdapter {
    fn play(&self, media: MediaType, out: &mut dyn Console) {
        match media {
            MediaType::Mp4 => Mp4Player.play(media, out),
            MediaType::Vr => VrPlayer.play(media, out),
            MediaType::Mp3 => out.line("play nothing"),
        }
    }
}

pub fn drive(out: &mut dyn Console) {
    Mp3Player.play(MediaType::Vr, out);
}

// ============================================================================
// Tests
// ============================================================================
