// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tessera_map::{MapDocument, Viewport, codec};

fn gen_document(count: usize) -> MapDocument {
    let mut doc = MapDocument::new();
    doc.create_new(10_000, 10_000, "Bench", "Criterion");
    let mut state = 0x1234_5678_u32;
    for i in 0..count {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let x = (state % 10_000) as f32;
        let y = ((state / 10_000) % 10_000) as f32;
        let _ = doc.add_block(x, y, (i % 24) as f32 * 15.0, (i % 40) as i32);
    }
    doc
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_edits");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("add_then_remove_10k", |b| {
        b.iter_batched(
            || gen_document(0),
            |mut doc| {
                let ids: Vec<_> = (0..10_000)
                    .filter_map(|i| doc.add_block((i % 100) as f32 * 100.0, (i / 100) as f32 * 100.0, 0.0, 1))
                    .collect();
                for id in ids {
                    black_box(doc.remove_block(id));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_queries");
    let doc = gen_document(50_000);
    group.bench_function("blocks_in_viewport", |b| {
        b.iter(|| {
            let hits = doc.blocks_in_viewport(&Viewport::from_center_size(5_000.0, 5_000.0, 1_920.0, 972.0));
            black_box(hits.len());
        });
    });
    group.bench_function("pick_block", |b| {
        b.iter(|| black_box(doc.pick_block(black_box(5_000.0), black_box(5_000.0), 32.0)));
    });
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let doc = gen_document(50_000);
    let bytes = codec::encode(doc.info(), doc.blocks()).unwrap_or_default();
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("encode_50k", |b| {
        b.iter(|| black_box(codec::encode(doc.info(), doc.blocks())));
    });
    group.bench_function("decode_50k", |b| {
        b.iter(|| black_box(codec::decode(black_box(&bytes))));
    });
    group.finish();
}

criterion_group!(benches, bench_edits, bench_queries, bench_codec);
criterion_main!(benches);
