// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal.
//!
//! The stream is built and kept on a dedicated thread, since cpal streams are
//! not `Send` on every platform. The UI only holds the command sender. A new
//! tone replaces whatever is still ringing.

use super::pluck::pluck;
use crate::error::{Error, Result};
use crate::fretboard::Pitch;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::sync::mpsc;

/// Samples waiting to be played, consumed from the front by the stream.
type SampleBuffer = Arc<Mutex<Vec<f32>>>;

/// Handle to the audio thread.
#[derive(Debug, Clone)]
pub struct TonePlayer {
    command_tx: mpsc::UnboundedSender<Pitch>,
    available: Arc<AtomicBool>,
}

impl TonePlayer {
    /// Starts the audio thread.
    ///
    /// Device problems are logged by the thread; the player then stays silent
    /// and [`TonePlayer::is_available`] turns false.
    #[must_use]
    pub fn spawn() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let available = Arc::new(AtomicBool::new(true));

        let flag = Arc::clone(&available);
        let spawned = thread::Builder::new()
            .name("folio-lens-audio".to_string())
            .spawn(move || {
                if let Err(err) = run(command_rx) {
                    tracing::warn!(error = %err, "audio output unavailable, showing pitches only");
                    flag.store(false, Ordering::Relaxed);
                }
            });

        if let Err(err) = spawned {
            tracing::warn!(error = %err, "audio thread could not be started");
            available.store(false, Ordering::Relaxed);
        }

        Self {
            command_tx,
            available,
        }
    }

    /// False once the output device turned out to be unusable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    /// Plays `pitch`. Dropped when there is no output.
    pub fn play(&self, pitch: Pitch) {
        if self.command_tx.send(pitch).is_err() {
            tracing::debug!(%pitch, "audio thread gone, tone dropped");
        }
    }
}

/// Opens the default output and plays tones until every sender is dropped.
fn run(mut command_rx: mpsc::UnboundedReceiver<Pitch>) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| Error::Audio("no output device found".to_string()))?;

    let supported_config = device
        .default_output_config()
        .map_err(|e| Error::Audio(format!("failed to get output config: {e}")))?;

    let sample_rate = supported_config.sample_rate().0;
    let channels = supported_config.channels();
    let buffer: SampleBuffer = Arc::new(Mutex::new(Vec::new()));

    let stream = match supported_config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &supported_config.into(), Arc::clone(&buffer))?
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &supported_config.into(), Arc::clone(&buffer))?
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &supported_config.into(), Arc::clone(&buffer))?
        }
        other => {
            return Err(Error::Audio(format!("unsupported sample format {other:?}")));
        }
    };

    stream
        .play()
        .map_err(|e| Error::Audio(format!("failed to start stream: {e}")))?;

    while let Some(pitch) = command_rx.blocking_recv() {
        let samples = pluck(pitch.frequency(), sample_rate, channels);
        if let Ok(mut pending) = buffer.lock() {
            *pending = samples;
        }
    }

    Ok(())
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    buffer: SampleBuffer,
) -> Result<cpal::Stream> {
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let Ok(mut pending) = buffer.lock() else {
                    data.fill(T::from_sample(0.0f32));
                    return;
                };

                let available = data.len().min(pending.len());
                for (out, sample) in data.iter_mut().zip(pending.drain(..available)) {
                    // Stay below 1.0, i16 conversion overflows at exactly 1.0
                    *out = T::from_sample(sample.clamp(-1.0, 0.999_999_9));
                }
                data[available..].fill(T::from_sample(0.0f32));
            },
            |err| {
                tracing::warn!(error = %err, "audio stream error");
            },
            None,
        )
        .map_err(|e| Error::Audio(format!("failed to build stream: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playing_never_blocks_or_panics_without_a_device() {
        let player = TonePlayer::spawn();
        player.play(Pitch::from_midi(64));
        player.play(Pitch::from_midi(40));
        // Either outcome is valid on a headless machine
        let _ = player.is_available();
    }

    #[test]
    fn clones_share_availability() {
        let player = TonePlayer::spawn();
        let clone = player.clone();
        player.available.store(false, Ordering::Relaxed);
        assert!(!clone.is_available());
    }
}
