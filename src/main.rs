use std::{path::PathBuf, time::Duration};

use anyhow::{anyhow, Context};
use chip::{
    chip8::ChipSet,
    definitions::cpu,
    devices::{FrameBuffer, Keypad},
    resources::Rom,
    Runner,
};
use clap::Parser;

mod terminal;

use terminal::{Terminal, TerminalBell};

/// Runs a chip8 rom in the terminal.
///
/// Keys `1234 QWER ASDF ZXCV` are the hex keypad, `Esc` or `Ctrl+Q` quits.
/// Logging is configured with `RUST_LOG`, it is written to stderr.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the rom
    rom: PathBuf,
    /// Instructions executed per second
    #[arg(long, default_value_t = cpu::HERTZ)]
    hertz: u64,
    /// Milliseconds a key stays down after the terminal reported it
    #[arg(long, default_value_t = 150)]
    hold: u64,
    /// Print the state after loading the rom and exit
    #[arg(long)]
    dump: bool,
}

type TerminalRunner = Runner<FrameBuffer, Keypad, TerminalBell>;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom = Rom::from_path(&args.rom)
        .with_context(|| format!("Unable to load the rom '{}'", args.rom.display()))?;
    let keypad = Keypad::new();
    let chip = ChipSet::new(rom, FrameBuffer::new(), keypad.clone(), TerminalBell);

    if args.dump {
        println!("{}", chip);
        return Ok(());
    }

    let mut runner = Runner::new(chip, args.hertz);
    let res = play(&mut runner, keypad, Duration::from_millis(args.hold));

    // the terminal is restored at this point
    if runner.chip().is_halted() {
        eprintln!("{}", runner.chip());
    }
    res
}

fn play(runner: &mut TerminalRunner, keypad: Keypad, hold: Duration) -> anyhow::Result<()> {
    let stop = runner.stop_signal();
    let mut screen = Terminal::new().context("Unable to prepare the terminal")?;
    let input = terminal::spawn_input(keypad, stop.clone(), hold)
        .context("Unable to start the input thread")?;

    let mut render = Ok(());
    let res = runner.run(|chip, _| {
        if chip.display_mut().take_dirty() {
            render = screen.render(chip.display());
            if render.is_err() {
                stop.stop();
            }
        }
    });
    stop.stop();

    let input = input
        .join()
        .map_err(|_| anyhow!("The input thread panicked"))?;

    res?;
    render.context("Unable to draw the display")?;
    input.context("Unable to read the keyboard")?;
    Ok(())
}
