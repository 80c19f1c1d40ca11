//! `ym7128b`: a read-process-write driver around the YM7128B surround
//! processor emulation (SPEC_FULL.md §6.3).
//!
//! Reads interleaved two-channel samples from stdin in the selected
//! [`SampleFormat`], runs them through the selected engine variant, mixes
//! the processed ("wet") output with the unprocessed ("dry") input, and
//! writes interleaved stereo samples to stdout.

use std::io::{self, BufReader, BufWriter, Write};

use anyhow::Context;

use ym7128b::cli::CliArgs;
use ym7128b::engine::{Engine, ProcessData, SurroundProcessor};
use ym7128b::volume::db_to_linear;

fn main() {
    if let Err(err) = run() {
        eprintln!("ym7128b: {err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = match CliArgs::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("ym7128b: {err}");
            eprint!("{}", CliArgs::usage());
            std::process::exit(1);
        }
    };

    if args.show_help {
        print!("{}", CliArgs::usage());
        return Ok(());
    }

    let mut chip = Engine::new(args.engine, args.rate);

    if let Some(dump) = &args.regdump {
        for (addr, &value) in dump.iter().enumerate() {
            chip.write(addr as u8, value);
        }
    }
    if let Some(name) = args.preset {
        let preset = ym7128b::presets::find(name)
            .expect("preset name was validated during argument parsing");
        for (addr, &value) in preset.registers.iter().enumerate() {
            chip.write(addr as u8, value);
        }
    }
    for over in &args.reg_overrides {
        chip.write(over.reg.addr(), over.value);
    }

    chip.start();

    let dry_gain = db_to_linear(args.dry_db);
    let wet_gain = db_to_linear(args.wet_db);
    let oversampling = chip.oversampling();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = BufReader::new(stdin.lock());
    let mut writer = BufWriter::new(stdout.lock());

    let mut data = ProcessData::new(2, oversampling);

    loop {
        let ch0 = match args
            .format
            .read(&mut reader)
            .context("reading input channel 0")?
        {
            Some(sample) => sample,
            None => break,
        };
        let ch1 = match args
            .format
            .read(&mut reader)
            .context("reading input channel 1")?
        {
            Some(sample) => sample,
            None => {
                anyhow::bail!("short read: input channel 1 missing mid-frame");
            }
        };

        data.inputs[0] = ch0;
        data.inputs[1] = ch1;
        chip.process(&mut data);

        for k in 0..oversampling {
            let left = dry_gain * ch0 + wet_gain * data.outputs[0][k];
            let right = dry_gain * ch1 + wet_gain * data.outputs[1][k];
            args.format
                .write(&mut writer, left)
                .context("writing output channel 0")?;
            args.format
                .write(&mut writer, right)
                .context("writing output channel 1")?;
        }
    }

    writer.flush().context("flushing output")?;
    Ok(())
}
