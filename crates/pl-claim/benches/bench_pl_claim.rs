use std::io::Write;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pl_claim::{decode_any, decode_claim, encode_claim, to_compact, Claim};
use pl_claim::legacy::encode_legacy;

fn sample_claim() -> Claim {
    Claim::new(
        "This is my message.",
        "0xd98f53bc52e3f4e01530412f5c0ad3c55d54b6b671799e6df326c52afabcad0f23c0820098a511cf873a025f89fcd46453844079512ead86aab7463c8561ffdd91c",
    )
    .with_doi("2025-12-09T19:45:30.255Z")
    .with_signer("0x6A9AeE50B363025E25137195f04295bDF14a4bcE")
}

/// JSON of the compact record, deflated and base64url'd: the baseline the
/// binary encoding is measured against.
fn encode_json_deflate(claim: &Claim) -> String {
    let json = serde_json::to_vec(&to_compact(claim)).unwrap();
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json).unwrap();
    URL_SAFE_NO_PAD.encode(encoder.finish().unwrap())
}

fn bench_claim_codec(c: &mut Criterion) {
    let claim = sample_claim();
    let token = encode_claim(&claim).unwrap();
    let legacy = encode_legacy(&claim).unwrap();

    c.bench_function("encode_claim", |b| {
        b.iter(|| black_box(encode_claim(black_box(&claim))))
    });
    c.bench_function("decode_claim", |b| {
        b.iter(|| black_box(decode_claim(black_box(&token))))
    });
    c.bench_function("decode_any_legacy", |b| {
        b.iter(|| black_box(decode_any(black_box(&legacy))))
    });
}

fn bench_token_size(c: &mut Criterion) {
    let claim = sample_claim();
    let json = encode_json_deflate(&claim);
    let cbor = encode_claim(&claim).unwrap();
    let legacy = encode_legacy(&claim).unwrap();
    eprintln!(
        "token length: json+deflate={} cbor+deflate={} legacy={} delta={}",
        json.len(),
        cbor.len(),
        legacy.len(),
        json.len() as i64 - cbor.len() as i64
    );

    c.bench_function("encode_json_deflate", |b| {
        b.iter(|| black_box(encode_json_deflate(black_box(&claim))))
    });
    c.bench_function("encode_cbor_deflate", |b| {
        b.iter(|| black_box(encode_claim(black_box(&claim))))
    });
}

criterion_group!(benches, bench_claim_codec, bench_token_size);
criterion_main!(benches);
