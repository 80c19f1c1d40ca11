//! YM7128B Surround Processor Emulator
//!
//! A cycle-accurate emulator of the Yamaha YM7128B Surround Processor: a
//! 32-register DSP built around a tapped delay line, eight stereo gain
//! pairs, and a one-pole low-pass filter in its feedback path. Four engine
//! variants trade bit-exactness for configurable sample rates.
//!
//! # Crate feature flags
//! - `cli` (default): the `ym7128b` binary, sample-format adapters, presets,
//!   and register-dump parsing needed to drive the engine from stdin/stdout.
//!
//! # Quick start
//! ```
//! use ym7128b::engine::{Engine, EngineKind, SurroundProcessor, ProcessData};
//! use ym7128b::registers::Reg;
//!
//! let mut chip = Engine::new(EngineKind::Fixed, 0);
//! chip.write(Reg::Vm.addr(), 0x3F);
//! chip.write(Reg::Vl.addr(), 0x3F);
//! chip.write(Reg::Vr.addr(), 0x3F);
//! chip.start();
//!
//! let mut data = ProcessData::new(1, chip.oversampling());
//! data.inputs[0] = 1.0;
//! chip.process(&mut data);
//! ```

#![warn(missing_docs)]

pub mod delay;
pub mod engine;
pub mod error;
pub mod fixed;
pub mod registers;
pub mod tables;

#[cfg(feature = "cli")]
pub mod format;
#[cfg(feature = "cli")]
pub mod presets;
#[cfg(feature = "cli")]
pub mod regdump;
#[cfg(feature = "cli")]
pub mod volume;

#[cfg(feature = "cli")]
pub mod cli;

pub use engine::{Engine, EngineKind, ProcessData, SurroundProcessor};
pub use error::{Result, Ym7128BError};
pub use registers::{Reg, RegisterBank};

#[cfg(feature = "cli")]
pub use format::SampleFormat;
#[cfg(feature = "cli")]
pub use presets::Preset;
