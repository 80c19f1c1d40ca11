//! Ideal-Short engine: fixed-point arithmetic at a caller-chosen sample
//! rate, no oversampling, integer (rounded) tap scaling (spec.md §4.6).

use crate::delay::DelayLine;
use crate::engine::{GateState, ProcessData, SurroundProcessor};
use crate::fixed::{add_sat, mul_sat};
use crate::registers::{Reg, RegisterBank};
use crate::tables::{decode_gain_fixed, tap_delay_scaled_rounded};

fn float_to_fixed(x: f32) -> i16 {
    crate::fixed::sat((x * 8192.0).round() as i32)
}

fn fixed_to_float(x: i16) -> f32 {
    x as f32 / 8192.0
}

/// Fixed-point engine at a configurable sample rate; tap delays are scaled
/// from the native-rate table and rounded to the nearest integer sample.
pub struct IdealShortEngine {
    registers: RegisterBank,
    delay: DelayLine<i16>,
    lowpass_prev: i16,
    gate: GateState,
    rate: u32,
}

impl IdealShortEngine {
    /// Construct and `Setup` at `rate` in one step.
    pub fn new(rate: u32) -> Self {
        let mut engine = IdealShortEngine {
            registers: RegisterBank::new(),
            delay: DelayLine::new(1),
            lowpass_prev: 0,
            gate: GateState::CONSTRUCTED,
            rate: 1,
        };
        engine.setup(rate);
        engine
    }

    /// Set the operating rate, reallocating (and zeroing) the delay buffer
    /// to fit the longest tap delay at the new rate.
    pub fn setup(&mut self, rate: u32) {
        let rate = rate.max(1);
        self.rate = rate;
        let capacity = tap_delay_scaled_rounded(0x1F, rate) as usize + 1;
        self.delay.resize(capacity);
        self.lowpass_prev = 0;
        self.gate.insert(GateState::SET_UP);
    }

    /// Currently configured sample rate.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    fn gain(&self, reg: Reg) -> i16 {
        decode_gain_fixed(self.registers.read_reg(reg))
    }

    fn tap(&self, reg: Reg) -> u32 {
        tap_delay_scaled_rounded(self.registers.read_reg(reg), self.rate)
    }

    fn tick(&mut self, x: i16) -> (i16, i16) {
        let t0 = self.tap(Reg::T0);
        let fb = self.delay.read(t0);

        let c0 = self.gain(Reg::C0);
        let c1 = self.gain(Reg::C1);
        let lowpass = add_sat(mul_sat(fb, c0), mul_sat(self.lowpass_prev, c1));
        self.lowpass_prev = lowpass;

        let vc_filtered = mul_sat(lowpass, self.gain(Reg::Vc));

        let input_mix = add_sat(mul_sat(x, self.gain(Reg::Vm)), vc_filtered);
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

        let mut left = 0i16;
        let mut right = 0i16;
        for (t_reg, gl_reg, gr_reg) in TAP_REGS {
            let s_k = self.delay.read(self.tap(t_reg));
            left = add_sat(left, mul_sat(s_k, self.gain(gl_reg)));
            right = add_sat(right, mul_sat(s_k, self.gain(gr_reg)));
        }

        (mul_sat(left, self.gain(Reg::Vl)), mul_sat(right, self.gain(Reg::Vr)))
    }
}

impl SurroundProcessor for IdealShortEngine {
    fn reset(&mut self) {
        self.delay.reset();
        self.lowpass_prev = 0;
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

        let x = float_to_fixed(data.mono_input());
        let (l, r) = self.tick(x);
        data.outputs[0][0] = fixed_to_float(l);
        data.outputs[1][0] = fixed_to_float(r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_one(engine: &mut IdealShortEngine, input: f32) -> (f32, f32) {
        let mut data = ProcessData::new(1, 1);
        data.inputs[0] = input;
        engine.process(&mut data);
        (data.outputs[0][0], data.outputs[1][0])
    }

    #[test]
    fn single_output_pair_per_sample() {
        let engine = IdealShortEngine::new(48_000);
        assert_eq!(engine.oversampling(), 1);
    }

    #[test]
    fn setup_reallocates_and_clears_delay() {
        let mut engine = IdealShortEngine::new(44_100);
        engine.write(Reg::Vc.addr(), 0x3F);
        engine.write(Reg::T0.addr(), 0x05);
        engine.start();
        process_one(&mut engine, 1.0);
        engine.setup(88_200);
        assert_eq!(engine.rate(), 88_200);
        let out = process_one(&mut engine, 0.0);
        assert_eq!(out, (0.0, 0.0));
    }

    #[test]
    fn rate_scaling_stretches_delay() {
        let mut slow = IdealShortEngine::new(23_550);
        let mut fast = IdealShortEngine::new(47_100);
        for e in [&mut slow, &mut fast] {
            e.write(Reg::Vm.addr(), 0x3F);
            e.write(Reg::Gl1.addr(), 0x3F);
            e.write(Reg::T1.addr(), 0x10);
            e.start();
        }
        process_one(&mut slow, 1.0);
        process_one(&mut fast, 1.0);

        let mut slow_first_nonzero = None;
        let mut fast_first_nonzero = None;
        for i in 0..4000 {
            let s = process_one(&mut slow, 0.0);
            if slow_first_nonzero.is_none() && s.0 != 0.0 {
                slow_first_nonzero = Some(i);
            }
            let f = process_one(&mut fast, 0.0);
            if fast_first_nonzero.is_none() && f.0 != 0.0 {
                fast_first_nonzero = Some(i);
            }
        }
        // double the rate roughly doubles the tap delay in samples
        let ratio = fast_first_nonzero.unwrap() as f32 / slow_first_nonzero.unwrap() as f32;
        assert!(ratio > 1.5 && ratio < 2.5);
    }

    #[test]
    fn all_zero_gains_yield_silence() {
        let mut engine = IdealShortEngine::new(44_100);
        engine.start();
        for _ in 0..10 {
            assert_eq!(process_one(&mut engine, 1.0), (0.0, 0.0));
        }
    }

    #[test]
    fn new_is_set_up_but_not_started() {
        let mut engine = IdealShortEngine::new(44_100);
        assert!(!engine.is_running());
        engine.write(Reg::Vm.addr(), 0x3F);
        let out = process_one(&mut engine, 1.0);
        assert_eq!(out, (0.0, 0.0)); // SET_UP alone does not gate process open
        engine.start();
        engine.stop();
        assert!(!engine.is_running());
    }
}
