//! Sound cues
//!
//! Catches play a short beep: a high tone for good items, a low one for bad
//! ones. With the `audio` feature the tones are synthesized sine waves played
//! through rodio; otherwise the terminal bell stands in for both.

use std::time::Duration;

use crate::sim::{GameEvent, ItemKind};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Good item caught
    GoodCatch,
    /// Bad item caught
    BadCatch,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::ItemCaught {
                kind: ItemKind::Good,
                ..
            } => Some(SoundEffect::GoodCatch),
            GameEvent::ItemCaught {
                kind: ItemKind::Bad,
                ..
            } => Some(SoundEffect::BadCatch),
            _ => None,
        }
    }

    /// Tone frequency in Hz
    pub fn frequency(self) -> f32 {
        match self {
            SoundEffect::GoodCatch => 700.0,
            SoundEffect::BadCatch => 400.0,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(100)
    }
}

#[cfg(feature = "audio")]
mod backend {
    use rodio::source::SineWave;
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

    use super::SoundEffect;

    /// Open output device. The stream must outlive every sink played on it.
    pub struct Output {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Output {
        pub fn open() -> Option<Self> {
            match OutputStream::try_default() {
                Ok((stream, handle)) => Some(Self {
                    _stream: stream,
                    handle,
                }),
                Err(e) => {
                    log::warn!("No audio output ({}), falling back to the terminal bell", e);
                    None
                }
            }
        }

        pub fn play(&self, effect: SoundEffect, volume: f32) {
            let sink = match Sink::try_new(&self.handle) {
                Ok(sink) => sink,
                Err(e) => {
                    log::warn!("Could not play {:?}: {}", effect, e);
                    return;
                }
            };
            let tone = SineWave::new(effect.frequency())
                .take_duration(effect.duration())
                .amplify(volume);
            sink.append(tone);
            sink.detach();
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(feature = "audio")]
    output: Option<backend::Output>,
    volume: f32,
    /// Cues requested so far
    played: u32,
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        Self {
            #[cfg(feature = "audio")]
            output: backend::Output::open(),
            volume: volume.clamp(0.0, 1.0),
            played: 0,
        }
    }

    /// Manager that never makes a sound
    pub fn silent() -> Self {
        Self {
            #[cfg(feature = "audio")]
            output: None,
            volume: 0.0,
            played: 0,
        }
    }

    pub fn played(&self) -> u32 {
        self.played
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        self.played += 1;

        if !self.play_on_device(effect) {
            log::debug!("Bell for {:?}", effect);
            ring_bell();
        }
    }

    #[cfg(feature = "audio")]
    fn play_on_device(&self, effect: SoundEffect) -> bool {
        match &self.output {
            Some(output) => {
                output.play(effect, self.volume);
                true
            }
            None => false,
        }
    }

    #[cfg(not(feature = "audio"))]
    fn play_on_device(&self, _effect: SoundEffect) -> bool {
        false
    }

    /// Play the cue for every event that has one
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

fn ring_bell() {
    use std::io::Write;

    let mut out = std::io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}
