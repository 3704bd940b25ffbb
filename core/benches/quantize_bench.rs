use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rgb565_core::{Sprite, write_header};

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut raw = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            raw.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, (x + y) as u8]);
        }
    }
    raw
}

fn bench_quantize(c: &mut Criterion) {
    let raw = gradient(240, 240);
    c.bench_function("quantize 240x240", |b| {
        b.iter(|| Sprite::from_rgba8(240, 240, black_box(&raw)).unwrap())
    });
}

fn bench_header(c: &mut Criterion) {
    let sprite = Sprite::from_rgba8(240, 240, &gradient(240, 240)).unwrap();
    c.bench_function("header 240x240", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(400 * 1024);
            write_header(&mut out, "bench.png", "bench", black_box(&sprite)).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_quantize, bench_header);
criterion_main!(benches);
