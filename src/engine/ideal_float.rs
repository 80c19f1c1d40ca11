//! Ideal-Float engine: floating-point arithmetic at a caller-chosen sample
//! rate, no oversampling, fractional tap positions with linear
//! interpolation (spec.md §4.6).

use crate::delay::DelayLine;
use crate::engine::{GateState, ProcessData, SurroundProcessor};
use crate::registers::{Reg, RegisterBank};
use crate::tables::{decode_gain_float, tap_delay_scaled_fractional, tap_delay_scaled_rounded};

#[inline]
fn apply_gain(x: f32, gain: f32) -> f32 {
    (x * gain).clamp(-1.0, 1.0)
}

/// Floating-point engine at a configurable sample rate; tap delays retain
/// their fractional sample position and are read via linear interpolation
/// between the two neighboring samples.
pub struct IdealFloatEngine {
    registers: RegisterBank,
    delay: DelayLine<f32>,
    lowpass_prev: f32,
    gate: GateState,
    rate: u32,
}

impl IdealFloatEngine {
    /// Construct and `Setup` at `rate` in one step.
    pub fn new(rate: u32) -> Self {
        let mut engine = IdealFloatEngine {
            registers: RegisterBank::new(),
            delay: DelayLine::new(1),
            lowpass_prev: 0.0,
            gate: GateState::CONSTRUCTED,
            rate: 1,
        };
        engine.setup(rate);
        engine
    }

    /// Set the operating rate, reallocating (and zeroing) the delay buffer.
    /// One extra sample of headroom is kept past the longest scaled tap
    /// delay so fractional reads never need to interpolate past the end of
    /// the buffer.
    pub fn setup(&mut self, rate: u32) {
        let rate = rate.max(1);
        self.rate = rate;
        let capacity = tap_delay_scaled_rounded(0x1F, rate) as usize + 2;
        self.delay.resize(capacity);
        self.lowpass_prev = 0.0;
        self.gate.insert(GateState::SET_UP);
    }

    /// Currently configured sample rate.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    fn gain(&self, reg: Reg) -> f32 {
        decode_gain_float(self.registers.read_reg(reg))
    }

    fn tap(&self, reg: Reg) -> f64 {
        tap_delay_scaled_fractional(self.registers.read_reg(reg), self.rate)
    }

    fn tick(&mut self, x: f32) -> (f32, f32) {
        let t0 = self.tap(Reg::T0);
        let fb = self.delay.read_fractional(t0);

        let c0 = self.gain(Reg::C0);
        let c1 = self.gain(Reg::C1);
        let lowpass = apply_gain(fb, c0) + apply_gain(self.lowpass_prev, c1);
        self.lowpass_prev = lowpass;

        let vc_filtered = apply_gain(lowpass, self.gain(Reg::Vc));

        let input_mix = apply_gain(x, self.gain(Reg::Vm)) + vc_filtered;
        self.delay.write(input_mix);

        const TAP_REGS: [(Reg, Reg, Reg); 8] = [
            (Reg::T1, Reg::Gl1, Reg::Gr1),
            (Reg::T2, Reg::Gl2, Reg::Gr2),
            (Reg::T3, Reg::Gl3, Reg::Gr3),
            (Reg::T4, Reg::Gl4, Reg::Gr4),
            (Reg::T5, Reg::Gl5, Reg::Gr5),
            (Reg::T6, Reg::Gl6, Reg::Gr6),
            (Reg::T7, Reg::Gl7, Reg::Gr7),
            (Reg::T8, Reg::Gl8, Reg::Gr8),
        ];

        let mut left = 0.0f32;
        let mut right = 0.0f32;
        for (t_reg, gl_reg, gr_reg) in TAP_REGS {
            let s_k = self.delay.read_fractional(self.tap(t_reg));
            left += apply_gain(s_k, self.gain(gl_reg));
            right += apply_gain(s_k, self.gain(gr_reg));
        }

        (
            apply_gain(left, self.gain(Reg::Vl)),
            apply_gain(right, self.gain(Reg::Vr)),
        )
    }
}

impl SurroundProcessor for IdealFloatEngine {
    fn reset(&mut self) {
        self.delay.reset();
        self.lowpass_prev = 0.0;
    }

    fn start(&mut self) {
        self.gate.insert(GateState::STARTED);
    }

    fn stop(&mut self) {
        self.gate.remove(GateState::STARTED);
    }

    fn is_running(&self) -> bool {
        self.gate.contains(GateState::STARTED)
    }

    fn write(&mut self, addr: u8, value: u8) {
        self.registers.write(addr, value);
    }

    fn read(&self, addr: u8) -> u8 {
        self.registers.read(addr)
    }

    fn oversampling(&self) -> usize {
        1
    }

    fn process(&mut self, data: &mut ProcessData) {
        if !self.is_running() {
            data.outputs[0][0] = 0.0;
            data.outputs[1][0] = 0.0;
            return;
        }

        let x = data.mono_input();
        let (l, r) = self.tick(x);
        data.outputs[0][0] = l;
        data.outputs[1][0] = r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_one(engine: &mut IdealFloatEngine, input: f32) -> (f32, f32) {
        let mut data = ProcessData::new(1, 1);
        data.inputs[0] = input;
        engine.process(&mut data);
        (data.outputs[0][0], data.outputs[1][0])
    }

    #[test]
    fn single_output_pair_per_sample() {
        let engine = IdealFloatEngine::new(48_000);
        assert_eq!(engine.oversampling(), 1);
    }

    #[test]
    fn passthrough_s1() {
        let mut engine = IdealFloatEngine::new(44_100);
        engine.write(Reg::Vm.addr(), 0x3F);
        engine.write(Reg::Vl.addr(), 0x3F);
        engine.write(Reg::Vr.addr(), 0x3F);
        engine.start();

        let out = process_one(&mut engine, 1.0);
        assert!(out.0 > 0.5 && out.0 <= 1.0);

        let silence = process_one(&mut engine, 0.0);
        assert!(silence.0.abs() < 1e-6);
    }

    #[test]
    fn fractional_rate_stable() {
        let mut engine = IdealFloatEngine::new(37_337); // odd rate forces fractional taps
        engine.write(Reg::Vc.addr(), 0x3F);
        engine.write(Reg::T0.addr(), 0x05);
        engine.write(Reg::C0.addr(), 0x20);
        engine.start();
        process_one(&mut engine, 1.0);
        for _ in 0..2000 {
            let out = process_one(&mut engine, 0.0);
            assert!(out.0.abs() <= 1.0);
            assert!(out.1.abs() <= 1.0);
        }
    }

    #[test]
    fn all_zero_gains_yield_silence() {
        let mut engine = IdealFloatEngine::new(44_100);
        engine.start();
        for _ in 0..10 {
            assert_eq!(process_one(&mut engine, 1.0), (0.0, 0.0));
        }
    }

    #[test]
    fn new_is_set_up_but_not_started() {
        let mut engine = IdealFloatEngine::new(44_100);
        assert!(!engine.is_running());
        engine.write(Reg::Vm.addr(), 0x3F);
        let out = process_one(&mut engine, 1.0);
        assert_eq!(out, (0.0, 0.0)); // SET_UP alone does not gate process open
        engine.start();
        engine.stop();
        assert!(!engine.is_running());
    }
}
