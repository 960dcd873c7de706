//! Benchmark fg_parser::parse() throughput across expression complexity.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_parser(c: &mut Criterion) {
    let inputs = [
        ("single_filter", "scale=1280:720"),
        (
            "labelled_chain",
            "[0:v]scale=1280:720,eq=brightness=0.1[v1];[0:a]volume=2.0[a1]",
        ),
        (
            "split_overlay",
            "[0:v]split[main][tmp];[tmp]crop=iw:ih/2:0:0,vflip[flip];[main][flip]overlay=0:H/2[out]",
        ),
        (
            "quoted_drawtext",
            r"[in]drawtext=fontfile=/usr/share/fonts/DejaVuSans.ttf:text='Frame\: %{n}, Time\: %{pts}':x=10:y=10:fontcolor=white[out]",
        ),
        (
            "audio_mix",
            "[0:a]aresample=48000,asetpts=PTS-STARTPTS[a0];[1:a]aresample=48000,asetpts=PTS-STARTPTS[a1];[a0][a1]amix=inputs=2:duration=longest:dropout_transition=2[aout]",
        ),
    ];

    let mut group = c.benchmark_group("parser");
    for (name, input) in &inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(*name, |b| {
            b.iter(|| fg_parser::parse(black_box(input)));
        });
    }
    group.finish();
}

fn bench_tokenizer(c: &mut Criterion) {
    let long = "[0:v]scale=1280:720,eq=brightness=0.1[v1];".repeat(64);

    let mut group = c.benchmark_group("tokenizer");
    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("repeated_chains", |b| {
        b.iter(|| fg_parser::tokenize(black_box(&long)));
    });
    group.finish();
}

criterion_group!(benches, bench_parser, bench_tokenizer);
criterion_main!(benches);
