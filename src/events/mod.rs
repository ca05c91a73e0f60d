pub mod triggers;

pub use triggers::{EffectTriggerTimes, SharedTriggers, TriggerCell};
