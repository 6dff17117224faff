//! Benchmarks for rule matching
//!
//! Tests performance of full guess runs, from pattern scanning through the
//! disambiguation rules, under the configurations the CLI produces.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scenematch::config::{Config, Overrides};
use scenematch_parser::Parser;

const INPUTS: &[&str] = &[
    "Breaking.Bad.S05E14.Ozymandias.720p.HDTV.x264-IMMERSE.mkv",
    "Show.Name.S01E01-E04.1080p.WEB-DL.mkv",
    "Show.Name.1x01x02x03.HDTV.avi",
    "The.100.109.mkv",
    "Series/Show Name/Season 3/Show.Name.05.Pilot.mkv",
    "Movie.Name.2012.1080p.BluRay.mkv",
    "OSS.117.Cairo.Nest.of.Spies.2006.mkv",
    "Show.Name.Minisode.Extras.mkv",
];

fn parser_with(overrides: Overrides) -> Parser {
    let mut config = Config::default();
    config.apply_overrides(&overrides);
    Parser::new(config.parser).unwrap()
}

fn bench_single_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_input");
    let parser = parser_with(Overrides::default());

    group.bench_function("explicit/sxxexx", |b| {
        b.iter(|| parser.guess(black_box(INPUTS[0])))
    });

    group.bench_function("explicit/range", |b| {
        b.iter(|| parser.guess(black_box(INPUTS[1])))
    });

    group.bench_function("weak/duplicate", |b| {
        b.iter(|| parser.guess(black_box(INPUTS[3])))
    });

    group.bench_function("weak/path", |b| {
        b.iter(|| parser.guess(black_box(INPUTS[4])))
    });

    group.bench_function("movie/year", |b| {
        b.iter(|| parser.guess(black_box(INPUTS[5])))
    });

    group.finish();
}

fn bench_configurations(c: &mut Criterion) {
    let mut group = c.benchmark_group("configurations");
    group.throughput(Throughput::Elements(INPUTS.len() as u64));

    let configs = [
        ("default", Overrides::default()),
        (
            "prefer_number",
            Overrides {
                prefer_number: true,
                ..Overrides::default()
            },
        ),
        (
            "attended_titles",
            Overrides {
                titles: vec!["The 100".to_string(), "Breaking Bad".to_string()],
                ..Overrides::default()
            },
        ),
    ];

    for (name, overrides) in configs {
        let parser = parser_with(overrides);
        group.bench_with_input(BenchmarkId::from_parameter(name), &parser, |b, parser| {
            b.iter(|| {
                for input in INPUTS {
                    black_box(parser.matches(black_box(input)));
                }
            })
        });
    }

    group.finish();
}

fn bench_input_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_length");
    let parser = parser_with(Overrides::default());

    for segments in [1usize, 4, 16] {
        let input = vec!["Show.Name.S01E02"; segments].join("/");
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(segments), &input, |b, input| {
            b.iter(|| parser.guess(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_input,
    bench_configurations,
    bench_input_length
);
criterion_main!(benches);
