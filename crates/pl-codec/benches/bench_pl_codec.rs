use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pl_codec::{compress, transcode, LinkCodec};
use rand::{Rng, SeedableRng};

fn generate_bytes(size: usize) -> Vec<u8> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen()).collect()
}

fn generate_records(count: usize) -> Vec<(String, u64, f64)> {
    (0..count)
        .map(|i| (format!("entry-{i}"), i as u64 * 7, i as f64 / 3.0))
        .collect()
}

fn bench_codec_roundtrip(c: &mut Criterion) {
    let codec = LinkCodec::new();

    for &(name, count) in &[("small", 4), ("medium", 64), ("large", 1024)] {
        let records = generate_records(count);
        let token = codec.encode(&records).unwrap();
        c.bench_function(&format!("encode_records_{name}"), |b| {
            b.iter(|| black_box(codec.encode(black_box(&records))))
        });
        c.bench_function(&format!("decode_records_{name}"), |b| {
            b.iter(|| black_box(codec.decode::<Vec<(String, u64, f64)>>(black_box(&token))))
        });
    }
}

fn bench_stages(c: &mut Criterion) {
    let random_16k = generate_bytes(16 * 1024);
    let packed = compress::compress(&random_16k, 6).unwrap();
    let text = transcode::to_text(&random_16k);

    c.bench_function("deflate_random_16kb", |b| {
        b.iter(|| black_box(compress::compress(black_box(&random_16k), 6)))
    });
    c.bench_function("inflate_random_16kb", |b| {
        b.iter(|| black_box(compress::decompress(black_box(&packed), 1 << 20)))
    });
    c.bench_function("transcode_to_text_16kb", |b| {
        b.iter(|| black_box(transcode::to_text(black_box(&random_16k))))
    });
    c.bench_function("transcode_from_text_16kb", |b| {
        b.iter(|| black_box(transcode::from_text(black_box(&text))))
    });
}

criterion_group!(benches, bench_codec_roundtrip, bench_stages);
criterion_main!(benches);
