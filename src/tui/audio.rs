//! Dedicated audio thread for the page-flip sound.
//!
//! rodio's `OutputStream` is `!Send`, so it must live on a single OS thread.
//! `FlipPlayer` spawns a persistent `std::thread` that owns the audio output
//! and receives commands via `std::sync::mpsc`. Nothing flows back: the cue
//! is fire-and-forget and every failure ends in a log line.

use std::sync::mpsc as sync_mpsc;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::core::cue::{synthesize_flip, TransitionCue};

/// Sample rate of the synthesized flip; rodio resamples to the device rate.
const SAMPLE_RATE: u32 = 44_100;

// ============================================================================
// Types
// ============================================================================

/// Commands sent from the TUI to the audio thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueCommand {
    Flip,
    SetVolume(f32),
    Shutdown,
}

// ============================================================================
// FlipPlayer
// ============================================================================

/// Non-blocking page-flip player backed by a dedicated OS thread.
pub struct FlipPlayer {
    cmd_tx: sync_mpsc::Sender<CueCommand>,
}

impl FlipPlayer {
    /// Spawn the audio thread and return a handle. If the thread cannot be
    /// spawned the player stays silent.
    pub fn spawn(volume: f32) -> Self {
        let (cmd_tx, cmd_rx) = sync_mpsc::channel();

        if let Err(e) = std::thread::Builder::new()
            .name("flip-audio".into())
            .spawn(move || audio_thread(cmd_rx))
        {
            log::warn!("Failed to spawn audio thread, page flips will be silent: {e}");
        }

        let player = Self { cmd_tx };
        player.send(CueCommand::SetVolume(clamp_gain(volume)));
        player
    }

    fn send(&self, cmd: CueCommand) {
        // A dead audio thread only means silence.
        let _ = self.cmd_tx.send(cmd);
    }
}

impl TransitionCue for FlipPlayer {
    fn play(&self) {
        self.send(CueCommand::Flip);
    }
}

impl Drop for FlipPlayer {
    fn drop(&mut self) {
        self.send(CueCommand::Shutdown);
    }
}

fn clamp_gain(vol: f32) -> f32 {
    if vol.is_nan() {
        0.0
    } else {
        vol.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Audio thread
// ============================================================================

fn audio_thread(cmd_rx: sync_mpsc::Receiver<CueCommand>) {
    // Initialize audio output once for the thread's lifetime.
    let output: Option<(OutputStream, OutputStreamHandle)> = match OutputStream::try_default() {
        Ok(pair) => Some(pair),
        Err(e) => {
            log::warn!("No audio output, page flips will be silent: {e}");
            None
        }
    };

    let mut volume = 0.0f32;
    let mut rng = rand::thread_rng();

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            CueCommand::Flip => {
                let Some((_, ref handle)) = output else {
                    continue;
                };
                match Sink::try_new(handle) {
                    Ok(sink) => {
                        sink.set_volume(volume);
                        sink.append(SamplesBuffer::new(
                            1,
                            SAMPLE_RATE,
                            synthesize_flip(SAMPLE_RATE, &mut rng),
                        ));
                        // Let the flip finish on rodio's mixer thread.
                        sink.detach();
                    }
                    Err(e) => log::debug!("Flip sink error: {e}"),
                }
            }
            CueCommand::SetVolume(vol) => volume = vol,
            CueCommand::Shutdown => return,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
