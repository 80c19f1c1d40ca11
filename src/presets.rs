//! Preset Table
//!
//! A static table of named factory configurations selectable via
//! `--preset <name>` (SPEC_FULL.md §6.5). Register values beyond `direct`
//! are invented, plausible 6-bit gain / 5-bit tap fields standing in for the
//! proprietary factory table; `direct` is pinned to the passthrough scenario
//! so it remains a testable property.

use serde::{Deserialize, Serialize};

use crate::registers::Reg;

/// A named set of all 32 register values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// The `--preset` token that selects this configuration.
    pub name: &'static str,
    /// Raw register bytes, indexed by address (SPEC_FULL.md §4.7).
    pub registers: [u8; 32],
}

const fn reg(addr: Reg, value: u8) -> (u8, u8) {
    (addr as u8, value)
}

const fn build(pairs: &[(u8, u8)]) -> [u8; 32] {
    let mut regs = [0u8; 32];
    let mut i = 0;
    while i < pairs.len() {
        let (addr, value) = pairs[i];
        regs[addr as usize] = value;
        i += 1;
    }
    regs
}

/// The 19 factory presets, in `--preset` selection order.
pub static PRESETS: [Preset; 19] = [
    Preset {
        name: "direct",
        registers: build(&[
            reg(Reg::Gl1, 0x3F),
            reg(Reg::Gr1, 0x3F),
            reg(Reg::Vm, 0x3F),
            reg(Reg::Vl, 0x3F),
            reg(Reg::Vr, 0x3F),
            reg(Reg::T1, 0x00),
        ]),
    },
    Preset {
        name: "mono",
        registers: build(&[
            reg(Reg::Gl1, 0x20),
            reg(Reg::Gr1, 0x20),
            reg(Reg::Vm, 0x30),
            reg(Reg::Vl, 0x30),
            reg(Reg::Vr, 0x30),
            reg(Reg::T1, 0x00),
        ]),
    },
    Preset {
        name: "stereo1",
        registers: build(&[
            reg(Reg::Gl1, 0x2A),
            reg(Reg::Gr2, 0x2A),
            reg(Reg::Vm, 0x30),
            reg(Reg::Vl, 0x30),
            reg(Reg::Vr, 0x30),
            reg(Reg::T1, 0x02),
            reg(Reg::T2, 0x04),
        ]),
    },
    Preset {
        name: "stereo2",
        registers: build(&[
            reg(Reg::Gl1, 0x2A),
            reg(Reg::Gr2, 0x2A),
            reg(Reg::Gl3, 0x18),
            reg(Reg::Gr4, 0x18),
            reg(Reg::Vm, 0x30),
            reg(Reg::Vl, 0x30),
            reg(Reg::Vr, 0x30),
            reg(Reg::T1, 0x03),
            reg(Reg::T2, 0x06),
            reg(Reg::T3, 0x09),
            reg(Reg::T4, 0x0C),
        ]),
    },
    Preset {
        name: "stereo3",
        registers: build(&[
            reg(Reg::Gl1, 0x24),
            reg(Reg::Gr2, 0x24),
            reg(Reg::Gl3, 0x1A),
            reg(Reg::Gr4, 0x1A),
            reg(Reg::Gl5, 0x10),
            reg(Reg::Gr6, 0x10),
            reg(Reg::Vm, 0x30),
            reg(Reg::Vl, 0x30),
            reg(Reg::Vr, 0x30),
            reg(Reg::T1, 0x04),
            reg(Reg::T2, 0x08),
            reg(Reg::T3, 0x0C),
            reg(Reg::T4, 0x10),
            reg(Reg::T5, 0x14),
            reg(Reg::T6, 0x18),
        ]),
    },
    Preset {
        name: "stereo4",
        registers: build(&[
            reg(Reg::Gl1, 0x20),
            reg(Reg::Gr2, 0x20),
            reg(Reg::Gl3, 0x18),
            reg(Reg::Gr4, 0x18),
            reg(Reg::Gl5, 0x12),
            reg(Reg::Gr6, 0x12),
            reg(Reg::Gl7, 0x0C),
            reg(Reg::Gr8, 0x0C),
            reg(Reg::Vm, 0x2C),
            reg(Reg::Vl, 0x2C),
            reg(Reg::Vr, 0x2C),
            reg(Reg::T1, 0x03),
            reg(Reg::T2, 0x06),
            reg(Reg::T3, 0x09),
            reg(Reg::T4, 0x0C),
            reg(Reg::T5, 0x0F),
            reg(Reg::T6, 0x12),
            reg(Reg::T7, 0x15),
            reg(Reg::T8, 0x18),
        ]),
    },
    Preset {
        name: "stereo5",
        registers: build(&[
            reg(Reg::Gl1, 0x22),
            reg(Reg::Gr1, 0x10),
            reg(Reg::Gl2, 0x10),
            reg(Reg::Gr2, 0x22),
            reg(Reg::Vm, 0x2E),
            reg(Reg::Vl, 0x2E),
            reg(Reg::Vr, 0x2E),
            reg(Reg::T1, 0x05),
            reg(Reg::T2, 0x0A),
        ]),
    },
    Preset {
        name: "stereo6",
        registers: build(&[
            reg(Reg::Gl1, 0x24),
            reg(Reg::Gr1, 0x0C),
            reg(Reg::Gl2, 0x0C),
            reg(Reg::Gr2, 0x24),
            reg(Reg::Gl3, 0x18),
            reg(Reg::Gr4, 0x18),
            reg(Reg::Vm, 0x2A),
            reg(Reg::Vl, 0x2A),
            reg(Reg::Vr, 0x2A),
            reg(Reg::T1, 0x06),
            reg(Reg::T2, 0x0B),
            reg(Reg::T3, 0x10),
            reg(Reg::T4, 0x15),
        ]),
    },
    Preset {
        name: "stereo7",
        registers: build(&[
            reg(Reg::Gl1, 0x1E),
            reg(Reg::Gr1, 0x0A),
            reg(Reg::Gl2, 0x0A),
            reg(Reg::Gr2, 0x1E),
            reg(Reg::Gl3, 0x14),
            reg(Reg::Gr4, 0x14),
            reg(Reg::Gl5, 0x0E),
            reg(Reg::Gr6, 0x0E),
            reg(Reg::Vm, 0x28),
            reg(Reg::Vl, 0x28),
            reg(Reg::Vr, 0x28),
            reg(Reg::T1, 0x08),
            reg(Reg::T2, 0x0D),
            reg(Reg::T3, 0x12),
            reg(Reg::T4, 0x17),
            reg(Reg::T5, 0x1C),
            reg(Reg::T6, 0x1F),
        ]),
    },
    Preset {
        name: "2ch_matrix",
        registers: build(&[
            reg(Reg::Gl1, 0x20),
            reg(Reg::Gr1, 0x20),
            reg(Reg::Vm, 0x30),
            reg(Reg::Vc, 0x18),
            reg(Reg::Vl, 0x2C),
            reg(Reg::Vr, 0x2C),
            reg(Reg::C0, 0x20),
            reg(Reg::C1, 0x10),
            reg(Reg::T0, 0x04),
            reg(Reg::T1, 0x02),
        ]),
    },
    Preset {
        name: "3ch_logic",
        registers: build(&[
            reg(Reg::Gl1, 0x1E),
            reg(Reg::Gr1, 0x1E),
            reg(Reg::Gl3, 0x16),
            reg(Reg::Vm, 0x2C),
            reg(Reg::Vc, 0x1A),
            reg(Reg::Vl, 0x2A),
            reg(Reg::Vr, 0x2A),
            reg(Reg::C0, 0x22),
            reg(Reg::C1, 0x0E),
            reg(Reg::T0, 0x06),
            reg(Reg::T1, 0x03),
            reg(Reg::T3, 0x09),
        ]),
    },
    Preset {
        name: "4ch_logic",
        registers: build(&[
            reg(Reg::Gl1, 0x1C),
            reg(Reg::Gr2, 0x1C),
            reg(Reg::Gl3, 0x14),
            reg(Reg::Gr4, 0x14),
            reg(Reg::Vm, 0x2A),
            reg(Reg::Vc, 0x1C),
            reg(Reg::Vl, 0x28),
            reg(Reg::Vr, 0x28),
            reg(Reg::C0, 0x24),
            reg(Reg::C1, 0x0C),
            reg(Reg::T0, 0x07),
            reg(Reg::T1, 0x04),
            reg(Reg::T2, 0x08),
            reg(Reg::T3, 0x0C),
            reg(Reg::T4, 0x10),
        ]),
    },
    Preset {
        name: "3ch_surround",
        registers: build(&[
            reg(Reg::Gl1, 0x1A),
            reg(Reg::Gr1, 0x1A),
            reg(Reg::Gl5, 0x12),
            reg(Reg::Gr6, 0x12),
            reg(Reg::Vm, 0x28),
            reg(Reg::Vc, 0x20),
            reg(Reg::Vl, 0x26),
            reg(Reg::Vr, 0x26),
            reg(Reg::C0, 0x26),
            reg(Reg::C1, 0x0A),
            reg(Reg::T0, 0x09),
            reg(Reg::T1, 0x05),
            reg(Reg::T5, 0x11),
            reg(Reg::T6, 0x16),
        ]),
    },
    Preset {
        name: "4ch_surround",
        registers: build(&[
            reg(Reg::Gl1, 0x18),
            reg(Reg::Gr2, 0x18),
            reg(Reg::Gl5, 0x10),
            reg(Reg::Gr6, 0x10),
            reg(Reg::Vm, 0x26),
            reg(Reg::Vc, 0x22),
            reg(Reg::Vl, 0x24),
            reg(Reg::Vr, 0x24),
            reg(Reg::C0, 0x28),
            reg(Reg::C1, 0x08),
            reg(Reg::T0, 0x0A),
            reg(Reg::T1, 0x06),
            reg(Reg::T2, 0x0B),
            reg(Reg::T5, 0x12),
            reg(Reg::T6, 0x17),
        ]),
    },
    Preset {
        name: "5ch_matrix",
        registers: build(&[
            reg(Reg::Gl1, 0x16),
            reg(Reg::Gr2, 0x16),
            reg(Reg::Gl3, 0x10),
            reg(Reg::Gr4, 0x10),
            reg(Reg::Gl5, 0x0C),
            reg(Reg::Vm, 0x24),
            reg(Reg::Vc, 0x24),
            reg(Reg::Vl, 0x22),
            reg(Reg::Vr, 0x22),
            reg(Reg::C0, 0x2A),
            reg(Reg::C1, 0x06),
            reg(Reg::T0, 0x0C),
            reg(Reg::T1, 0x07),
            reg(Reg::T2, 0x0D),
            reg(Reg::T3, 0x13),
            reg(Reg::T5, 0x19),
        ]),
    },
    Preset {
        name: "5ch_surround",
        registers: build(&[
            reg(Reg::Gl1, 0x14),
            reg(Reg::Gr2, 0x14),
            reg(Reg::Gl3, 0x0E),
            reg(Reg::Gr4, 0x0E),
            reg(Reg::Gl5, 0x0A),
            reg(Reg::Gr6, 0x0A),
            reg(Reg::Vm, 0x22),
            reg(Reg::Vc, 0x26),
            reg(Reg::Vl, 0x20),
            reg(Reg::Vr, 0x20),
            reg(Reg::C0, 0x2C),
            reg(Reg::C1, 0x04),
            reg(Reg::T0, 0x0E),
            reg(Reg::T1, 0x08),
            reg(Reg::T2, 0x0F),
            reg(Reg::T3, 0x16),
            reg(Reg::T5, 0x1B),
            reg(Reg::T6, 0x1E),
        ]),
    },
    Preset {
        name: "quad_1",
        registers: build(&[
            reg(Reg::Gl1, 0x20),
            reg(Reg::Gr2, 0x20),
            reg(Reg::Gl3, 0x20),
            reg(Reg::Gr4, 0x20),
            reg(Reg::Vm, 0x2A),
            reg(Reg::Vl, 0x28),
            reg(Reg::Vr, 0x28),
            reg(Reg::T1, 0x05),
            reg(Reg::T2, 0x0A),
            reg(Reg::T3, 0x0F),
            reg(Reg::T4, 0x14),
        ]),
    },
    Preset {
        name: "quad_2",
        registers: build(&[
            reg(Reg::Gl1, 0x1C),
            reg(Reg::Gr2, 0x1C),
            reg(Reg::Gl3, 0x1C),
            reg(Reg::Gr4, 0x1C),
            reg(Reg::Gl5, 0x10),
            reg(Reg::Gr6, 0x10),
            reg(Reg::Vm, 0x26),
            reg(Reg::Vl, 0x24),
            reg(Reg::Vr, 0x24),
            reg(Reg::T1, 0x07),
            reg(Reg::T2, 0x0E),
            reg(Reg::T3, 0x15),
            reg(Reg::T4, 0x1C),
            reg(Reg::T5, 0x09),
            reg(Reg::T6, 0x11),
        ]),
    },
    Preset {
        name: "test_tone",
        registers: build(&[
            reg(Reg::Gl1, 0x3F),
            reg(Reg::Gr1, 0x3F),
            reg(Reg::Vm, 0x3F),
            reg(Reg::Vc, 0x3F),
            reg(Reg::Vl, 0x3F),
            reg(Reg::Vr, 0x3F),
            reg(Reg::C0, 0x3F),
            reg(Reg::T0, 0x1F),
            reg(Reg::T1, 0x00),
        ]),
    },
];

/// Look up a preset by its `--preset` token, case-insensitive.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
