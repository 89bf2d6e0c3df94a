#![allow(unused_crate_dependencies)]
use std::hint::black_box;

use base62::{decode, decoded_len, encode, encode_to_string, encoded_len};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_encode(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, data: &[u8]) {
        let mut buf = vec![0u8; encoded_len(data.len())];

        c.bench_function(name, |b| {
            b.iter(|| encode(black_box(&mut buf), black_box(data)))
        });
    }

    bench(c, "encode_small", &create_data::<16>());
    bench(c, "encode_large", &create_data::<12000>());
}

fn bench_encode_to_string(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, data: &[u8]) {
        c.bench_function(name, |b| b.iter(|| encode_to_string(black_box(data))));
    }

    bench(c, "encode_to_string_small", &create_data::<16>());
    bench(c, "encode_to_string_large", &create_data::<12000>());
}

fn bench_decode(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, data: &[u8]) {
        let encoded = encode_to_string(data);
        let mut buf = vec![0u8; decoded_len(encoded.len())];

        c.bench_function(name, |b| {
            b.iter(|| {
                decode(black_box(&mut buf), black_box(encoded.as_bytes()))
                    .expect("data is valid")
            })
        });
    }

    bench(c, "decode_small", &create_data::<16>());
    bench(c, "decode_large", &create_data::<12000>());
}

fn create_data<const LEN: usize>() -> [u8; LEN] {
    let mut buf = [0u8; LEN];

    #[expect(clippy::cast_possible_truncation)]
    for (index, b) in buf.iter_mut().enumerate() {
        *b = (index * 37) as u8;
    }

    buf
}

criterion_group!(codec, bench_encode, bench_encode_to_string, bench_decode);
criterion_main!(codec);
