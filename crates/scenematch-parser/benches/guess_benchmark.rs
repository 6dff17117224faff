//! Benchmarks for scenematch-parser.
//!
//! Run with: cargo bench -p scenematch-parser

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scenematch_parser::config::ParserConfig;
use scenematch_parser::{guess, Parser};

const EPISODE_SAMPLES: &[&str] = &[
    "Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND",
    "The.Office.US.S02E01E02.720p.BluRay.x264-DEMAND",
    "Show.Name.S01E01-04.1080p.WEB-DL.mkv",
    "Show.Name.1x01&03.HDTV.avi",
    "Show.Name.Season.2.Episode.5.mkv",
];

const AMBIGUOUS_SAMPLES: &[&str] = &[
    "The.100.109.mkv",
    "Show.Name.112.mkv",
    "Movie.Name.2010.1080p.mkv",
    "OSS.117.Lost.in.Rio.2009.mkv",
    "Series/Show Name/Season 2/Show.Name.03.Special.mkv",
];

fn bench_guess_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("guess_single");

    group.bench_function("sxxexx", |b| {
        b.iter(|| guess(black_box("Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND")))
    });

    group.bench_function("range", |b| {
        b.iter(|| guess(black_box("Show.Name.S01E01-04.1080p.WEB-DL.mkv")))
    });

    group.bench_function("weak_duplicate", |b| {
        b.iter(|| guess(black_box("The.100.109.mkv")))
    });

    group.finish();
}

fn bench_guess_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("guess_batch");

    for (name, samples) in [("episodes", EPISODE_SAMPLES), ("ambiguous", AMBIGUOUS_SAMPLES)] {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), samples, |b, samples| {
            b.iter(|| {
                for input in samples.iter() {
                    black_box(guess(black_box(input)));
                }
            })
        });
    }

    group.finish();
}

fn bench_parser_build(c: &mut Criterion) {
    c.bench_function("parser_build_with_titles", |b| {
        b.iter(|| {
            let config = ParserConfig::builder()
                .attended_title("The 100")
                .attended_title("Mr Robot")
                .build();
            Parser::new(black_box(config))
        })
    });
}

criterion_group!(benches, bench_guess_single, bench_guess_batch, bench_parser_build);
criterion_main!(benches);
