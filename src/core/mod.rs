pub mod envelope;
pub mod harmony;
pub mod shaping;
pub mod spectrum;

pub use envelope::*;
pub use harmony::*;
pub use shaping::*;
pub use spectrum::*;
