use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key};
use eidocrypt::{decrypt_bytes, encrypt_bytes, encrypt_message, Aes128Key};

fn bench_block(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key", |b| b.iter(|| expand_key(&key)));
    let round_keys = expand_key(&key);
    group.bench_function("encrypt_block", |b| {
        let block = [0x5au8; 16];
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.finish();
}

fn bench_ecb(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let key = Aes128Key::from([1u8; 16]);

    let mut group = c.benchmark_group("ecb");
    for size in [64usize, 1024, 16 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        let ciphertext = encrypt_bytes(&data, &key);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &data, |b, data| {
            b.iter(|| encrypt_bytes(data, &key));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &ciphertext, |b, ct| {
            b.iter(|| decrypt_bytes(ct, &key));
        });
    }
    group.finish();
}

fn bench_message(c: &mut Criterion) {
    let key = Aes128Key::from_text("ThisIsASecretKey").expect("key");
    c.bench_function("encrypt_message", |b| {
        b.iter(|| encrypt_message("Hello, World!", &key));
    });
}

criterion_group!(benches, bench_block, bench_ecb, bench_message);
criterion_main!(benches);
