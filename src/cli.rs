//! Command-line argument parsing for the `ym7128b` driver
//! (SPEC_FULL.md §6.3).
//!
//! Hand-rolled, in the teacher crate's `args` module idiom: a `CliArgs`
//! struct with a `parse` entry point, manual flag matching, and a
//! `print_usage` helper. No external arg-parsing crate.

use std::fmt;

use crate::engine::EngineKind;
use crate::error::{Result, Ym7128BError};
use crate::format::SampleFormat;
use crate::regdump::parse_regdump;
use crate::registers::Reg;

/// Default sample format when `-f/--format` is not given.
pub const DEFAULT_FORMAT: SampleFormat = SampleFormat::S16Le;
/// Default engine variant when `-e/--engine` is not given.
pub const DEFAULT_ENGINE: EngineKind = EngineKind::Fixed;
/// Default operating rate for the Ideal variants when `-r/--rate` is not given.
pub const DEFAULT_RATE: u32 = 44_100;
/// Default dry (unprocessed input) mix level: muted, so a bare invocation
/// plays back only the processed ("wet") signal.
pub const DEFAULT_DRY_DB: f32 = -128.0;
/// Default wet (processed output) mix level: unity gain.
pub const DEFAULT_WET_DB: f32 = 0.0;

/// A single `--reg-<NAME> HEX` override, applied in command-line order
/// after `--regdump`/`--preset` so later flags win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegOverride {
    /// Which register this override targets.
    pub reg: Reg,
    /// Raw byte to write (masking happens at `RegisterBank::write` time).
    pub value: u8,
}

/// Parsed command-line arguments for the `ym7128b` driver.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// `-f/--format`: stream sample encoding.
    pub format: SampleFormat,
    /// `-e/--engine`: numeric engine variant.
    pub engine: EngineKind,
    /// `-r/--rate`: operating rate, Ideal/Short only.
    pub rate: u32,
    /// `--regdump`: full 32-byte register dump, applied before `--preset`.
    pub regdump: Option<Vec<u8>>,
    /// `--preset`: factory preset name, applied after `--regdump`.
    pub preset: Option<&'static str>,
    /// `--reg-<NAME> HEX` overrides, applied last, in order given.
    pub reg_overrides: Vec<RegOverride>,
    /// `--dry DB`: linear mix level for the unprocessed input.
    pub dry_db: f32,
    /// `--wet DB`: linear mix level for the processed output.
    pub wet_db: f32,
    /// `-h/--help`: print usage and exit 0 without processing anything.
    pub show_help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        CliArgs {
            format: DEFAULT_FORMAT,
            engine: DEFAULT_ENGINE,
            rate: DEFAULT_RATE,
            regdump: None,
            preset: None,
            reg_overrides: Vec::new(),
            dry_db: DEFAULT_DRY_DB,
            wet_db: DEFAULT_WET_DB,
            show_help: false,
        }
    }
}

impl CliArgs {
    /// Parse arguments from `std::env::args()` (program name excluded by
    /// the caller via `.skip(1)`).
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments from an arbitrary iterator; split out from [`parse`]
    /// so tests can drive it without touching the real process arguments.
    pub fn parse_from(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = CliArgs::default();
        let mut iter = args;

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.show_help = true,
                "-f" | "--format" => {
                    let value = Self::require_value(&mut iter, &arg)?;
                    parsed.format = SampleFormat::from_str(&value).ok_or_else(|| {
                        Ym7128BError::ConfigError(format!("unknown format: {value}"))
                    })?;
                }
                "-e" | "--engine" => {
                    let value = Self::require_value(&mut iter, &arg)?;
                    parsed.engine = EngineKind::from_str(&value).ok_or_else(|| {
                        Ym7128BError::ConfigError(format!("unknown engine: {value}"))
                    })?;
                }
                "-r" | "--rate" => {
                    let value = Self::require_value(&mut iter, &arg)?;
                    let rate: u32 = value
                        .parse()
                        .map_err(|_| Ym7128BError::ConfigError(format!("invalid rate: {value}")))?;
                    if rate < 1 {
                        return Err(Ym7128BError::ConfigError(
                            "rate must be >= 1".to_string(),
                        ));
                    }
                    parsed.rate = rate;
                }
                "--regdump" => {
                    let value = Self::require_value(&mut iter, &arg)?;
                    parsed.regdump = Some(parse_regdump(&value)?);
                }
                "--preset" => {
                    let value = Self::require_value(&mut iter, &arg)?;
                    let preset = crate::presets::find(&value).ok_or_else(|| {
                        Ym7128BError::ConfigError(format!("unknown preset: {value}"))
                    })?;
                    parsed.preset = Some(preset.name);
                }
                "--dry" => {
                    let value = Self::require_value(&mut iter, &arg)?;
                    parsed.dry_db = value
                        .parse()
                        .map_err(|_| Ym7128BError::ConfigError(format!("invalid --dry: {value}")))?;
                }
                "--wet" => {
                    let value = Self::require_value(&mut iter, &arg)?;
                    parsed.wet_db = value
                        .parse()
                        .map_err(|_| Ym7128BError::ConfigError(format!("invalid --wet: {value}")))?;
                }
                _ if arg.starts_with("--reg-") => {
                    let name = &arg["--reg-".len()..];
                    let reg = Reg::from_name(name).ok_or_else(|| {
                        Ym7128BError::ConfigError(format!("unknown register: {name}"))
                    })?;
                    let value = Self::require_value(&mut iter, &arg)?;
                    let byte = u8::from_str_radix(value.trim_start_matches("0x"), 16)
                        .map_err(|_| {
                            Ym7128BError::ConfigError(format!(
                                "invalid value for --reg-{name}: {value}"
                            ))
                        })?;
                    if byte > reg.mask() {
                        return Err(Ym7128BError::ConfigError(format!(
                            "value {value} out of range for {name} (mask {:#04x})",
                            reg.mask()
                        )));
                    }
                    parsed.reg_overrides.push(RegOverride { reg, value: byte });
                }
                _ => {
                    return Err(Ym7128BError::ConfigError(format!(
                        "unrecognized argument: {arg}"
                    )));
                }
            }
        }

        Ok(parsed)
    }

    fn require_value(
        iter: &mut impl Iterator<Item = String>,
        flag: &str,
    ) -> Result<String> {
        iter.next()
            .ok_or_else(|| Ym7128BError::ConfigError(format!("{flag} requires a value")))
    }

    /// Usage text printed for `-h/--help` and on a parse error.
    pub fn usage() -> &'static str {
        "Usage: ym7128b [OPTIONS] < input > output\n\n\
         Reads interleaved two-channel samples from stdin, runs them through a\n\
         YM7128B surround-processor emulation, and writes interleaved stereo\n\
         samples to stdout.\n\n\
         Options:\n\
         \x20 -f, --format FMT     sample format (default s16le)\n\
         \x20                       u8 s8 u16le u16be s16le s16be u32le u32be\n\
         \x20                       s32le s32be floatle floatbe float64le\n\
         \x20                       float64be dummy\n\
         \x20 -e, --engine ENG     engine variant: fixed float ideal short (default fixed)\n\
         \x20 -r, --rate HZ        sample rate, ideal/short only (default 44100)\n\
         \x20 --reg-<NAME> HEX     set a single register, e.g. --reg-vm 3f\n\
         \x20 --regdump HEX..      set all 32 registers from a hex dump\n\
         \x20 --preset NAME        load a named factory preset\n\
         \x20 --dry DB             linear mix level of the dry input (default -128, muted)\n\
         \x20 --wet DB             linear mix level of the wet output (default 0)\n\
         \x20 -h, --help           print this message and exit\n"
    }
}

impl fmt::Display for CliArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format={:?} engine={:?} rate={} overrides={}",
            self.format,
            self.engine,
            self.rate,
            self.reg_overrides.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Result<CliArgs> {
        CliArgs::parse_from(tokens.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_when_no_args() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.format, DEFAULT_FORMAT);
        assert_eq!(parsed.engine, DEFAULT_ENGINE);
        assert!(!parsed.show_help);
    }

    #[test]
    fn help_flag_sets_show_help() {
        assert!(args(&["-h"]).unwrap().show_help);
        assert!(args(&["--help"]).unwrap().show_help);
    }

    #[test]
    fn format_and_engine_parse() {
        let parsed = args(&["-f", "floatle", "-e", "ideal"]).unwrap();
        assert_eq!(parsed.format, SampleFormat::FloatLe);
        assert_eq!(parsed.engine, EngineKind::IdealFloat);
    }

    #[test]
    fn unknown_format_is_config_error() {
        assert!(args(&["-f", "bogus"]).is_err());
    }

    #[test]
    fn rate_must_be_positive() {
        assert!(args(&["-r", "0"]).is_err());
        assert!(args(&["-r", "-5"]).is_err());
        assert_eq!(args(&["-r", "48000"]).unwrap().rate, 48_000);
    }

    #[test]
    fn reg_override_parses_hex_and_checks_mask() {
        let parsed = args(&["--reg-vm", "3f"]).unwrap();
        assert_eq!(parsed.reg_overrides.len(), 1);
        assert_eq!(parsed.reg_overrides[0].reg, Reg::Vm);
        assert_eq!(parsed.reg_overrides[0].value, 0x3F);
    }

    #[test]
    fn reg_override_out_of_range_is_error() {
        assert!(args(&["--reg-t0", "ff"]).is_err());
    }

    #[test]
    fn reg_override_unknown_name_is_error() {
        assert!(args(&["--reg-bogus", "00"]).is_err());
    }

    #[test]
    fn overrides_preserve_command_line_order() {
        let parsed = args(&["--reg-vm", "10", "--reg-vl", "20", "--reg-vm", "30"]).unwrap();
        let values: Vec<u8> = parsed.reg_overrides.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![0x10, 0x20, 0x30]);
    }

    #[test]
    fn preset_and_regdump_parse() {
        let parsed = args(&["--preset", "direct", "--regdump", "3f00ff"]).unwrap();
        assert_eq!(parsed.preset, Some("direct"));
        assert_eq!(parsed.regdump, Some(vec![0x3F, 0x00, 0xFF]));
    }

    #[test]
    fn unknown_preset_is_error() {
        assert!(args(&["--preset", "nonexistent"]).is_err());
    }

    #[test]
    fn dry_and_wet_parse_as_floats() {
        let parsed = args(&["--dry", "-6.0", "--wet", "3.5"]).unwrap();
        assert_eq!(parsed.dry_db, -6.0);
        assert_eq!(parsed.wet_db, 3.5);
    }

    #[test]
    fn missing_value_is_error() {
        assert!(args(&["--format"]).is_err());
        assert!(args(&["--reg-vm"]).is_err());
    }

    #[test]
    fn unrecognized_flag_is_error() {
        assert!(args(&["--bogus"]).is_err());
    }

    #[test]
    fn usage_mentions_every_flag() {
        let text = CliArgs::usage();
        for flag in ["--format", "--engine", "--rate", "--reg-", "--regdump", "--preset", "--dry", "--wet", "--help"] {
            assert!(text.contains(flag), "usage text missing {flag}");
        }
    }
}
