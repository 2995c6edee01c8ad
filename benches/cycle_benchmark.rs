use chip::{
    chip8::ChipSet,
    devices::{FrameBuffer, Keypad, Silent},
    resources::Rom,
};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::mock::StepRng;

/// Draws the zero glyph across the screen forever:
/// `A000 6000 6100 D015 7008 1206`
const PROGRAM: [u8; 12] = [
    0xA0, 0x00, 0x60, 0x00, 0x61, 0x00, 0xD0, 0x15, 0x70, 0x08, 0x12, 0x06,
];

static BASE_ROM: once_cell::sync::Lazy<Rom> = once_cell::sync::Lazy::new(|| {
    Rom::new("DRAWLOOP", PROGRAM.to_vec()).expect("The benchmark rom fits into memory.")
});

/// will setup the default configured chip
fn get_default_chip() -> ChipSet<FrameBuffer, Keypad, Silent> {
    ChipSet::new(BASE_ROM.clone(), FrameBuffer::new(), Keypad::new(), Silent)
        .with_rng(StepRng::new(0, 1))
}

pub fn cycle_bench(c: &mut Criterion) {
    let mut chip = get_default_chip();
    c.bench_function("cycle_bench", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let _ = chip.next();
            }
        });
    });
}

pub fn print_bench(c: &mut Criterion) {
    let chip = get_default_chip();
    c.bench_function("print_bench", |b| {
        b.iter(|| {
            let _ = format!("{}", chip);
        });
    });
}

criterion_group!(benches, cycle_bench, print_bench);
criterion_main!(benches);
