//! The crossterm based frontend: a renderer for the frame buffer, the thread
//! feeding key presses into the keypad and the terminal bell.
use std::{
    io::{self, Stdout, Write},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use chip::{
    definitions::{display, keyboard},
    devices::{FrameBuffer, Keypad, SoundCommands},
    StopSignal,
};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, style,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use hashbrown::HashMap;
use once_cell::sync::Lazy;

/// The keys on a qwerty keyboard, at the position of the hex keypad
const QWERTY_LAYOUT: [[char; 4]; 4] = [
    ['1', '2', '3', '4'],
    ['q', 'w', 'e', 'r'],
    ['a', 's', 'd', 'f'],
    ['z', 'x', 'c', 'v'],
];

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A pixel is two cells wide, so that it looks about square.
const PIXEL_ON: &str = "██";
const PIXEL_OFF: &str = "  ";

/// maps the qwerty keyboard layout to the hex keypad
static LAYOUT_MAP: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (qwerty, hex) in QWERTY_LAYOUT.iter().zip(keyboard::LAYOUT.iter()) {
        for (&cell, &key) in qwerty.iter().zip(hex.iter()) {
            map.insert(cell, key);
        }
    }
    map
});

pub fn map_key(key: char) -> Option<u8> {
    LAYOUT_MAP.get(&key.to_ascii_lowercase()).copied()
}

/// What a key event means to the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Press(u8),
    Release(u8),
    Stop,
    Ignored,
}

impl From<KeyEvent> for KeyInput {
    fn from(event: KeyEvent) -> Self {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Esc => KeyInput::Stop,
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => KeyInput::Stop,
            KeyCode::Char(c) => match map_key(c) {
                Some(key) if event.kind == KeyEventKind::Release => KeyInput::Release(key),
                Some(key) => KeyInput::Press(key),
                None => KeyInput::Ignored,
            },
            _ => KeyInput::Ignored,
        }
    }
}

/// Holds the terminal in raw mode on the alternate screen, until dropped.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        ) {
            // there is no guard yet to undo the raw mode
            if let Err(raw) = terminal::disable_raw_mode() {
                log::warn!("unable to disable the raw mode: {}", raw);
            }
            return Err(err);
        }
        Ok(Self { out })
    }

    pub fn render(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        let mut line = String::with_capacity(display::WIDTH * PIXEL_ON.len());
        for (y, row) in frame.rows().enumerate() {
            line.clear();
            for &pixel in row {
                line.push_str(if pixel { PIXEL_ON } else { PIXEL_OFF });
            }
            queue!(self.out, cursor::MoveTo(0, y as u16), style::Print(&line))?;
        }
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, cursor::Show, LeaveAlternateScreen) {
            log::warn!("unable to leave the alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("unable to disable the raw mode: {}", err);
        }
    }
}

/// Starts the thread reading the keyboard, it ends with the stop signal.
/// When reading the keyboard fails the stop signal is raised as well.
///
/// Most terminals never report a key release, so a key is let go once it
/// was not reported for `hold`.
pub fn spawn_input(
    keypad: Keypad,
    stop: StopSignal,
    hold: Duration,
) -> io::Result<JoinHandle<io::Result<()>>> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || stop_after(&stop, || input_loop(&keypad, &stop, hold)))
}

/// Runs `work` and raises the stop signal once it returns, however it ends.
fn stop_after<F>(stop: &StopSignal, work: F) -> io::Result<()>
where
    F: FnOnce() -> io::Result<()>,
{
    let res = work();
    if let Err(err) = &res {
        log::error!("reading the keyboard failed: {}", err);
    }
    stop.stop();
    res
}

fn input_loop(keypad: &Keypad, stop: &StopSignal, hold: Duration) -> io::Result<()> {
    let mut held: [Option<Instant>; keyboard::SIZE] = [None; keyboard::SIZE];

    while !stop.is_stopped() {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(event) = event::read()? {
                match KeyInput::from(event) {
                    KeyInput::Press(key) => {
                        keypad.press(key);
                        held[key as usize] = Some(Instant::now());
                    }
                    KeyInput::Release(key) => {
                        keypad.release(key);
                        held[key as usize] = None;
                    }
                    KeyInput::Stop => {
                        log::info!("stop requested from the keyboard");
                        stop.stop();
                    }
                    KeyInput::Ignored => {}
                }
            }
        }

        let now = Instant::now();
        for (key, since) in held.iter_mut().enumerate() {
            if matches!(since, Some(at) if now.duration_since(*at) >= hold) {
                keypad.release(key as u8);
                *since = None;
            }
        }
    }
    Ok(())
}

/// Rings the terminal bell whenever the sound timer starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl SoundCommands for TerminalBell {
    fn set_active(&mut self, active: bool) {
        if !active {
            return;
        }
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            log::warn!("unable to ring the bell: {}", err);
        }
    }
}
