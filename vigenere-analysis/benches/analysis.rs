use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigenere_analysis::{break_cipher, encrypt, estimate_key_length};

const PLAINTEXT: &str = "It was a bright cold day in April, and the clocks were striking \
thirteen. Winston Smith, his chin nuzzled into his breast in an effort to escape the vile \
wind, slipped quickly through the glass doors of Victory Mansions, though not quickly \
enough to prevent a swirl of gritty dust from entering along with him.";

fn bench_analysis(c: &mut Criterion) {
    let ciphertext = encrypt(&PLAINTEXT.repeat(4), "CIPHER").unwrap();

    c.bench_function("estimate_key_length", |b| {
        b.iter(|| estimate_key_length(black_box(&ciphertext), 20).unwrap())
    });
    c.bench_function("break_cipher", |b| {
        b.iter(|| break_cipher(black_box(&ciphertext), 6).unwrap())
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
