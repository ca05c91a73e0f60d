use std::sync::Arc;
use std::thread;
use std::time::Duration;

use drone::{
    AuxVoice, EffectToggles, Engine, EngineConfig, Inputs, ParamTarget, SharedTriggers,
    SoundBackend, SubOsc,
};
use fnv::FnvHashMap;
use instant::Instant;

const RUN_SECS: f64 = 30.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const SEED: u64 = 42;

#[derive(Clone, Copy, Debug)]
enum Trigger {
    Distort,
    Blorp,
    Detune,
}

impl Trigger {
    fn fire(self, triggers: &SharedTriggers, at_ms: f64) -> bool {
        match self {
            Trigger::Distort => triggers.fire_distort(at_ms),
            Trigger::Blorp => triggers.fire_blorp(at_ms),
            Trigger::Detune => triggers.fire_detune(at_ms),
        }
    }
}

// Offsets (seconds after start) at which the trigger thread fires effects
const TRIGGER_SCHEDULE: [(f64, Trigger); 3] = [
    (2.0, Trigger::Distort),
    (8.0, Trigger::Blorp),
    (14.0, Trigger::Detune),
];

/// Stands in for an audio graph: keeps the latest value per parameter.
#[derive(Default)]
struct TableBackend {
    params: FnvHashMap<ParamTarget, f64>,
    spectra: FnvHashMap<usize, Vec<f64>>,
    writes: u64,
}

impl SoundBackend for TableBackend {
    fn set_parameter_value(&mut self, target: ParamTarget, value: f64, _ramp_to_secs: f64) {
        self.params.insert(target, value);
        self.writes += 1;
    }

    fn set_spectrum(&mut self, voice: usize, real: &[f64], _imag: &[f64]) {
        let slot = self.spectra.entry(voice).or_default();
        slot.clear();
        slot.extend_from_slice(real);
    }
}

impl TableBackend {
    fn get(&self, target: ParamTarget) -> f64 {
        self.params.get(&target).copied().unwrap_or_default()
    }
}

fn spawn_trigger_thread(triggers: Arc<SharedTriggers>, start: Instant) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for (offset, trigger) in TRIGGER_SCHEDULE {
            let wait = offset - start.elapsed().as_secs_f64();
            if wait > 0.0 {
                thread::sleep(Duration::from_secs_f64(wait));
            }
            let at_ms = start.elapsed().as_secs_f64() * 1000.0;
            if trigger.fire(&triggers, at_ms) {
                log::info!("[trigger] {:?} at {:.0}ms", trigger, at_ms);
            } else {
                log::warn!("[trigger] {:?} at {:.0}ms ignored, not newer", trigger, at_ms);
            }
        }
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = Engine::new(EngineConfig::default(), SEED)?;
    let mut backend = TableBackend::default();
    let triggers = Arc::new(SharedTriggers::default());
    let mut inputs = Inputs {
        toggles: EffectToggles {
            enable_bass: true,
            enable_melody: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let start = Instant::now();
    let trigger_thread = spawn_trigger_thread(Arc::clone(&triggers), start);

    let mut next_report = 0.0;
    loop {
        let elapsed = start.elapsed().as_secs_f64();
        if elapsed >= RUN_SECS {
            break;
        }
        inputs.triggers = triggers.snapshot();
        engine.update(elapsed * 1000.0, &inputs);
        engine.push_to(&mut backend);

        if elapsed >= next_report {
            next_report += 1.0;
            let s = engine.state();
            log::info!(
                "[frame] t={:.1}s amp={:.2} chord={:.2} active={:.2} chorus={:.2} detune={:.2} dist={:.2} flicker={:.2} v0={:.1}Hz bass={:.2} melody={:.2}",
                elapsed,
                s.amplitude,
                s.chord_index,
                s.active_voices,
                s.chorus,
                s.detune,
                s.distortion,
                s.flicker,
                backend.get(ParamTarget::VoiceFrequency { voice: 0, osc: SubOsc::Low }),
                backend.get(ParamTarget::AuxGain(AuxVoice::Bass)),
                backend.get(ParamTarget::AuxGain(AuxVoice::Melody)),
            );
        }
        thread::sleep(FRAME_INTERVAL);
    }

    trigger_thread
        .join()
        .map_err(|_| anyhow::anyhow!("trigger thread panicked"))?;
    log::info!(
        "[backend] {} parameter writes, {} spectra, {} coefficients each",
        backend.writes,
        backend.spectra.len(),
        backend.spectra.get(&0).map_or(0, Vec::len)
    );
    Ok(())
}
