use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use wordcloud_engine::{
    CloudConfig, FrequencyAggregator, LineResult, TextInput, Tokenizer, WordCloudEngine,
};

const VOCAB: &[&str] = &[
    "memory", "graph", "cloud", "clouds", "word", "words", "the", "and", "of", "rust", "thread",
    "threads", "queue", "channel", "weight", "weights", "render", "layout", "font", "size",
];

fn make_lines(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(1234);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..24);
            (0..len)
                .map(|_| *VOCAB.choose(&mut rng).unwrap())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();
    let lines = make_lines(1_000);
    c.bench_function("tokenize_1k_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(tokenizer.tokenize(line));
            }
        })
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();
    let results: Vec<LineResult> = make_lines(10_000)
        .iter()
        .enumerate()
        .map(|(i, line)| LineResult::new(i, tokenizer.tokenize(line)))
        .collect();
    c.bench_function("aggregate_10k_lines", |b| {
        b.iter(|| black_box(FrequencyAggregator::new().aggregate(&results)))
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let lines = make_lines(10_000);
    let engine = WordCloudEngine::new(CloudConfig::default()).unwrap();
    c.bench_function("engine_run_10k_lines", |b| {
        b.iter(|| black_box(engine.run(vec![TextInput::from(lines.clone())]).unwrap()))
    });
}

criterion_group!(benches, bench_tokenize, bench_aggregate, bench_end_to_end);
criterion_main!(benches);
