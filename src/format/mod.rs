//! Sample Format Adapters
//!
//! One `SampleFormat` variant per byte-stream encoding the CLI driver can
//! read from stdin and write to stdout (SPEC_FULL.md §6.2). Every variant
//! converts to/from a normalized `f32` in `[-1.0, 1.0]` so the core engine
//! never sees a format-specific type.

use std::io::{self, Read, Write};

/// A single CLI-selectable sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Unsigned 8-bit, midpoint 128.
    U8,
    /// Signed 8-bit.
    S8,
    /// Unsigned 16-bit, little-endian.
    U16Le,
    /// Unsigned 16-bit, big-endian.
    U16Be,
    /// Signed 16-bit, little-endian.
    S16Le,
    /// Signed 16-bit, big-endian.
    S16Be,
    /// Unsigned 32-bit, little-endian.
    U32Le,
    /// Unsigned 32-bit, big-endian.
    U32Be,
    /// Signed 32-bit, little-endian.
    S32Le,
    /// Signed 32-bit, big-endian.
    S32Be,
    /// 32-bit IEEE float, little-endian.
    FloatLe,
    /// 32-bit IEEE float, big-endian.
    FloatBe,
    /// 64-bit IEEE float, little-endian.
    Float64Le,
    /// 64-bit IEEE float, big-endian.
    Float64Be,
    /// No real I/O: reads a constant stream of zeros, discards writes.
    /// Used for throughput benchmarking without a backing file or pipe.
    Dummy,
}

impl SampleFormat {
    /// Parse a `-f/--format` CLI token.
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "u8" => Some(SampleFormat::U8),
            "s8" => Some(SampleFormat::S8),
            "u16le" => Some(SampleFormat::U16Le),
            "u16be" => Some(SampleFormat::U16Be),
            "s16le" => Some(SampleFormat::S16Le),
            "s16be" => Some(SampleFormat::S16Be),
            "u32le" => Some(SampleFormat::U32Le),
            "u32be" => Some(SampleFormat::U32Be),
            "s32le" => Some(SampleFormat::S32Le),
            "s32be" => Some(SampleFormat::S32Be),
            "floatle" | "f32le" => Some(SampleFormat::FloatLe),
            "floatbe" | "f32be" => Some(SampleFormat::FloatBe),
            "float64le" | "f64le" => Some(SampleFormat::Float64Le),
            "float64be" | "f64be" => Some(SampleFormat::Float64Be),
            "dummy" => Some(SampleFormat::Dummy),
            _ => None,
        }
    }

    /// Width in bytes of one sample in this format (`0` for `Dummy`).
    pub fn sample_width(&self) -> usize {
        match self {
            SampleFormat::U8 | SampleFormat::S8 => 1,
            SampleFormat::U16Le
            | SampleFormat::U16Be
            | SampleFormat::S16Le
            | SampleFormat::S16Be => 2,
            SampleFormat::U32Le
            | SampleFormat::U32Be
            | SampleFormat::S32Le
            | SampleFormat::S32Be
            | SampleFormat::FloatLe
            | SampleFormat::FloatBe => 4,
            SampleFormat::Float64Le | SampleFormat::Float64Be => 8,
            SampleFormat::Dummy => 0,
        }
    }

    /// Read one sample, normalized to `[-1.0, 1.0]`.
    ///
    /// Returns `Ok(None)` on a clean EOF (zero bytes read before the first
    /// byte of a sample); a short read partway through a sample is an
    /// `Err`.
    pub fn read(&self, r: &mut impl Read) -> io::Result<Option<f32>> {
        if *self == SampleFormat::Dummy {
            return Ok(Some(0.0));
        }

        let width = self.sample_width();
        let mut buf = [0u8; 8];
        let mut filled = 0;
        while filled < width {
            let n = r.read(&mut buf[filled..width])?;
            if n == 0 {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "short read mid-sample",
                ));
            }
            filled += n;
        }

        Ok(Some(self.decode(&buf[..width])))
    }

    /// Write one normalized `[-1.0, 1.0]` sample.
    pub fn write(&self, w: &mut impl Write, sample: f32) -> io::Result<()> {
        if *self == SampleFormat::Dummy {
            return Ok(());
        }
        let width = self.sample_width();
        let mut buf = [0u8; 8];
        self.encode(sample, &mut buf[..width]);
        w.write_all(&buf[..width])
    }

    fn decode(&self, bytes: &[u8]) -> f32 {
        match self {
            SampleFormat::U8 => (bytes[0] as f32 - 128.0) / 128.0,
            SampleFormat::S8 => bytes[0] as i8 as f32 / 128.0,
            SampleFormat::U16Le => {
                (u16::from_le_bytes([bytes[0], bytes[1]]) as f32 - 32_768.0) / 32_768.0
            }
            SampleFormat::U16Be => {
                (u16::from_be_bytes([bytes[0], bytes[1]]) as f32 - 32_768.0) / 32_768.0
            }
            SampleFormat::S16Le => i16::from_le_bytes([bytes[0], bytes[1]]) as f32 / 32_768.0,
            SampleFormat::S16Be => i16::from_be_bytes([bytes[0], bytes[1]]) as f32 / 32_768.0,
            SampleFormat::U32Le => {
                (u32::from_le_bytes(bytes.try_into().unwrap()) as f64 - 2_147_483_648.0) as f32
                    / 2_147_483_648.0
            }
            SampleFormat::U32Be => {
                (u32::from_be_bytes(bytes.try_into().unwrap()) as f64 - 2_147_483_648.0) as f32
                    / 2_147_483_648.0
            }
            SampleFormat::S32Le => {
                i32::from_le_bytes(bytes.try_into().unwrap()) as f64 as f32 / 2_147_483_648.0
            }
            SampleFormat::S32Be => {
                i32::from_be_bytes(bytes.try_into().unwrap()) as f64 as f32 / 2_147_483_648.0
            }
            SampleFormat::FloatLe => f32::from_le_bytes(bytes.try_into().unwrap()),
            SampleFormat::FloatBe => f32::from_be_bytes(bytes.try_into().unwrap()),
            SampleFormat::Float64Le => f64::from_le_bytes(bytes.try_into().unwrap()) as f32,
            SampleFormat::Float64Be => f64::from_be_bytes(bytes.try_into().unwrap()) as f32,
            SampleFormat::Dummy => 0.0,
        }
    }

    fn encode(&self, sample: f32, out: &mut [u8]) {
        let s = sample.clamp(-1.0, 1.0) as f64;
        match self {
            SampleFormat::U8 => out[0] = ((s * 128.0) + 128.0).clamp(0.0, 255.0).round() as u8,
            SampleFormat::S8 => out[0] = (s * 128.0).clamp(-128.0, 127.0).round() as i8 as u8,
            SampleFormat::U16Le => out.copy_from_slice(
                &(((s * 32_768.0) + 32_768.0).clamp(0.0, 65_535.0).round() as u16).to_le_bytes(),
            ),
            SampleFormat::U16Be => out.copy_from_slice(
                &(((s * 32_768.0) + 32_768.0).clamp(0.0, 65_535.0).round() as u16).to_be_bytes(),
            ),
            SampleFormat::S16Le => out.copy_from_slice(
                &((s * 32_768.0).clamp(-32_768.0, 32_767.0).round() as i16).to_le_bytes(),
            ),
            SampleFormat::S16Be => out.copy_from_slice(
                &((s * 32_768.0).clamp(-32_768.0, 32_767.0).round() as i16).to_be_bytes(),
            ),
            SampleFormat::U32Le => out.copy_from_slice(
                &(((s * 2_147_483_648.0) + 2_147_483_648.0)
                    .clamp(0.0, 4_294_967_295.0)
                    .round() as u32)
                    .to_le_bytes(),
            ),
            SampleFormat::U32Be => out.copy_from_slice(
                &(((s * 2_147_483_648.0) + 2_147_483_648.0)
                    .clamp(0.0, 4_294_967_295.0)
                    .round() as u32)
                    .to_be_bytes(),
            ),
            SampleFormat::S32Le => out.copy_from_slice(
                &((s * 2_147_483_648.0)
                    .clamp(-2_147_483_648.0, 2_147_483_647.0)
                    .round() as i32)
                    .to_le_bytes(),
            ),
            SampleFormat::S32Be => out.copy_from_slice(
                &((s * 2_147_483_648.0)
                    .clamp(-2_147_483_648.0, 2_147_483_647.0)
                    .round() as i32)
                    .to_be_bytes(),
            ),
            SampleFormat::FloatLe => out.copy_from_slice(&(s as f32).to_le_bytes()),
            SampleFormat::FloatBe => out.copy_from_slice(&(s as f32).to_be_bytes()),
            SampleFormat::Float64Le => out.copy_from_slice(&s.to_le_bytes()),
            SampleFormat::Float64Be => out.copy_from_slice(&s.to_be_bytes()),
            SampleFormat::Dummy => {}
        }
    }
}
