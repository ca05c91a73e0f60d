use crate::audio::{AuxVoice, MixLevels, ParamTarget, SoundBackend, SubOsc};
use crate::auxiliary::{self, AuxParams, AuxVoices};
use crate::config::{ConfigError, EngineConfig};
use crate::constants::{MELODY_JITTER_SECS, ORIENTATION_CHORUS_DEPTH, ORIENTATION_FULL_TILT_DEG};
use crate::core::{
    clip01, current_chord, finite_or, rand_range, transposition, Effect, SpectrumGenerator,
    Transposition,
};
use crate::input::Inputs;
use crate::state::{EngineState, VoiceSnapshot};
use crate::timebase::{SystemClock, TimeBase, WallClock};
use crate::voices::{active_voice_count, BankFrame, Voice};
use rand::prelude::*;

/// One synthesis session: owns the voice bank, the spectrum tables, the RNG
/// and the exported state.
///
/// Typical usage:
/// - Construct with `Engine::new(config, seed)` (or `with_clock` to supply
///   the shared wall clock)
/// - Call `update(frame_ms, &inputs)` once per display frame
/// - Read `state()` for visuals and call `push_to(&mut backend)` for audio
pub struct Engine<C: WallClock = SystemClock> {
    config: EngineConfig,
    clock: C,
    voices: Vec<Voice>,
    spectrum: SpectrumGenerator,
    rng: StdRng,
    melody_jitter_secs: f64,
    aux: AuxVoices,
    mix: MixLevels,
    state: EngineState,
    time: TimeBase,
    last_frame_ms: Option<f64>,
    last_chord: Option<usize>,
}

impl Engine<SystemClock> {
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_clock(config, seed, SystemClock)
    }
}

impl<C: WallClock> Engine<C> {
    pub fn with_clock(config: EngineConfig, seed: u64, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let voices = (0..config.voice_count)
            .map(|i| Voice::new(seed, i))
            .collect::<Vec<_>>();
        let spectrum = SpectrumGenerator::new(
            config.coef_count,
            config.low_spectrum_exponent,
            config.low_spectrum_tail,
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let melody_jitter_secs = rand_range(&mut rng, -MELODY_JITTER_SECS, MELODY_JITTER_SECS);
        log::info!(
            "[engine] voices={} coefs={} chords={} base={:.1}Hz tuning={:?} seed={}",
            config.voice_count,
            config.coef_count,
            config.progression.len(),
            config.base_frequency_hz,
            config.tuning,
            seed
        );
        Ok(Self {
            state: EngineState::new(config.voice_count),
            config,
            clock,
            voices,
            spectrum,
            rng,
            melody_jitter_secs,
            aux: AuxVoices::default(),
            mix: MixLevels::default(),
            time: TimeBase::default(),
            last_frame_ms: None,
            last_chord: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn aux(&self) -> &AuxVoices {
        &self.aux
    }

    pub fn mix(&self) -> MixLevels {
        self.mix
    }

    pub fn spectrum(&self) -> &SpectrumGenerator {
        &self.spectrum
    }

    /// Time base sampled by the last `update`.
    pub fn time(&self) -> TimeBase {
        self.time
    }

    /// Recompute every parameter for the frame at `frame_ms` (local frame
    /// clock, milliseconds, non-decreasing) and return the new snapshot.
    pub fn update(&mut self, frame_ms: f64, inputs: &Inputs) -> &EngineState {
        let frame_ms = match self.last_frame_ms {
            Some(last) if frame_ms < last => {
                log::warn!("[engine] frame clock went backwards: {frame_ms} < {last}");
                last
            }
            _ => frame_ms,
        };
        self.last_frame_ms = Some(frame_ms);
        let time = TimeBase::sample(frame_ms, &self.clock);
        self.time = time;
        let toggles = &inputs.toggles;
        let config = &self.config;

        // Harmony, from shared time
        let selection = current_chord(
            &config.progression,
            time.shared,
            config.chord_duration_secs,
            toggles.max_chords,
        );
        if self.last_chord != Some(selection.index) {
            log::debug!(
                "[harmony] chord {} -> {} ({} notes)",
                self.last_chord.map_or(-1, |c| c as i64),
                selection.index,
                selection.chord.len()
            );
            self.last_chord = Some(selection.index);
        }
        let trans = if toggles.enable_transposition {
            transposition(
                config.tuning,
                time.shared,
                config.transposition_period_secs,
                config.transposition_exponent,
            )
        } else {
            Transposition::IDENTITY
        };
        let root_hz = config.base_frequency_hz * trans.multiplier;
        let active_voices = active_voice_count(config, time.shared, toggles.max_active_voices);

        // Global envelopes
        let triggers = &inputs.triggers;
        let chorus = if toggles.enable_chorus {
            let tilt = clip01(inputs.orientation.length() as f64 / ORIENTATION_FULL_TILT_DEG);
            let env =
                config
                    .chorus_drive
                    .level(Effect::Chorus, frame_ms, triggers.blorp_at_ms, time.shared);
            clip01(env + tilt * ORIENTATION_CHORUS_DEPTH)
        } else {
            0.0
        };
        let detune = if toggles.enable_detune {
            config
                .detune_drive
                .level(Effect::Detune, frame_ms, triggers.detune_at_ms, time.shared)
        } else {
            0.0
        };
        let distortion = if toggles.enable_distortion {
            config.distortion_drive.level(
                Effect::Distortion,
                frame_ms,
                triggers.distort_at_ms,
                time.shared,
            )
        } else {
            0.0
        };

        // Bank
        let bank = BankFrame {
            chord: selection.chord,
            root_hz,
            active_voices,
            chorus,
            detune,
            distortion,
            time,
        };
        let n = self.voices.len();
        let mut amp_sum = 0.0;
        let mut flicker_sum = 0.0;
        let mut pulse_sum = 0.0;
        for (i, voice) in self.voices.iter_mut().enumerate() {
            let params = voice.derive(i, &bank, config, inputs, &mut self.rng);
            self.spectrum.blend_into(
                params.flicker * config.max_high_intensity,
                &mut voice.spectrum,
            );
            amp_sum += params.amplitude;
            flicker_sum += params.amplitude * params.flicker;
            pulse_sum += params.pulse;
            self.state.voices[i] = VoiceSnapshot {
                amplitude: clip01(finite_or(params.amplitude, 0.0)),
                flicker: clip01(finite_or(params.flicker, 0.0)),
            };
            voice.params = params;
        }
        let aggregate = amp_sum / n as f64;

        // Auxiliary voices
        let chord = selection.chord.as_slice();
        self.aux = AuxVoices {
            bass: auxiliary::bass(chord, root_hz, aggregate, toggles.enable_bass),
            melody: auxiliary::melody(
                chord,
                root_hz,
                aggregate,
                time.local,
                self.melody_jitter_secs,
                toggles.enable_melody,
            ),
            point_of_interest: auxiliary::point_of_interest(
                chord,
                root_hz,
                time.local,
                inputs.nearest_pending(),
            ),
        };
        self.mix = MixLevels::from_envelopes(chorus, distortion);

        // Export
        let s = &mut self.state;
        s.amplitude = clip01(finite_or(aggregate, 0.0));
        s.chord_index = clip01(selection.fraction);
        s.chorus = clip01(finite_or(chorus, 0.0));
        s.detune = clip01(finite_or(detune, 0.0));
        s.distortion = clip01(finite_or(distortion, 0.0));
        s.flicker = clip01(finite_or(flicker_sum / n as f64, 0.0));
        s.transposition = clip01(finite_or(trans.level, 0.0));
        s.active_voices = clip01(finite_or(active_voices / n as f64, 0.0));
        s.pulse = clip01(finite_or(pulse_sum / n as f64, 0.0));
        s.bass = self.aux.bass.snapshot();
        s.melody = self.aux.melody.snapshot();
        s.point_of_interest = self.aux.point_of_interest.snapshot();
        &self.state
    }

    /// Write the last frame into `backend`. Non-finite values are replaced
    /// with a neutral fallback before they leave the engine.
    pub fn push_to<B: SoundBackend + ?Sized>(&self, backend: &mut B) {
        let ramp = self.time.local + self.config.ramp_secs;
        let mut set = |target: ParamTarget, value: f64, fallback: f64| {
            backend.set_parameter_value(target, finite_or(value, fallback), ramp);
        };

        for (voice, v) in self.voices.iter().enumerate() {
            let p = &v.params;
            let fallback_hz = self.config.base_frequency_hz;
            for (osc, freq, cents, gain) in [
                (SubOsc::Low, p.freq_low, -p.detune_cents, p.gain_low),
                (SubOsc::High, p.freq_high, p.detune_cents, p.gain_high),
            ] {
                set(ParamTarget::VoiceFrequency { voice, osc }, freq, fallback_hz);
                set(ParamTarget::VoiceDetune { voice, osc }, cents, 0.0);
                set(ParamTarget::VoiceGain { voice, osc }, clip01(gain), 0.0);
            }
            set(ParamTarget::VoicePan { voice }, p.pan.clamp(-1.0, 1.0), 0.0);
        }

        for (which, aux) in [
            (AuxVoice::Bass, &self.aux.bass),
            (AuxVoice::Melody, &self.aux.melody),
            (AuxVoice::PointOfInterest, &self.aux.point_of_interest),
        ] {
            push_aux(&mut set, which, aux, self.config.base_frequency_hz);
        }

        set(ParamTarget::ReverbWet, self.mix.reverb_wet, 0.0);
        set(ParamTarget::ReverbDry, self.mix.reverb_dry, 1.0);
        set(ParamTarget::DistortionWet, self.mix.distortion_wet, 0.0);
        set(ParamTarget::DistortionDry, self.mix.distortion_dry, 1.0);

        drop(set);
        for (voice, v) in self.voices.iter().enumerate() {
            backend.set_spectrum(voice, &v.spectrum, self.spectrum.imag());
        }
    }
}

fn push_aux(
    set: &mut impl FnMut(ParamTarget, f64, f64),
    which: AuxVoice,
    aux: &AuxParams,
    fallback_hz: f64,
) {
    set(ParamTarget::AuxFrequency(which), aux.frequency_hz, fallback_hz);
    set(ParamTarget::AuxGain(which), clip01(aux.gain), 0.0);
    set(ParamTarget::AuxPan(which), aux.pan.clamp(-1.0, 1.0), 0.0);
}
