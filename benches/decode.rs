use colortext::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};

fn decode_names(n: usize) {
    for _ in 0..n {
        for (name, color) in &NAMED_COLORS {
            let decoded = decode(name, GRAY);
            debug_assert_eq!(decoded, *color);
        }
    }
}

fn decode_hex(n: usize) {
    for i in 0..n {
        let text = format!("#{:06x}", i * 7919 % 0x1000000);
        let decoded = decode(&text, GRAY);
        debug_assert!(decoded.is_opaque());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("decode names 100", |b| b.iter(|| decode_names(100)));
    c.bench_function("decode hex 100", |b| b.iter(|| decode_hex(100)));
    c.bench_function("decode hex 1000", |b| b.iter(|| decode_hex(1000)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
