use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const SAMPLE_RATE: i32 = 44_100;
const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.15;

/// A square wave at `TONE_HZ`
pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Sounds a tone for as long as the machine's sound timer is running.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: TONE_HZ / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;
        Ok(Beeper {
            device,
            playing: false,
        })
    }

    /// Starts or stops the tone; does nothing if it's already in that state
    pub fn set(&mut self, on: bool) {
        if on == self.playing {
            return;
        }
        if on {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.playing = on;
    }
}
