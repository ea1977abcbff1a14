pub mod catalog;
pub mod synth;

pub use synth::synthesize_path;
