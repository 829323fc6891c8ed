// benches/benchmarks.rs — Performance benchmarks (criterion)
//
// Hot paths on every request:
//   1. Prompt assembly — persona prompt plus turn context
//   2. Reply parsing — sentiment and decision extraction
//   3. CSV row formatting for the append-only logs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use screenpass::core::analysis::{parse_decision, parse_sentiment};
use screenpass::core::prompts::{build_system_prompt, build_turn_system_prompt};
use screenpass::persistence::csv::format_row;
use screenpass::roles::RoleConfig;

// ─── Helpers ────────────────────────────────────────────────────────────────

fn build_history(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                format!(">Screenpass: Question #{i}: how many years have you driven Class A?")
            } else {
                format!(">Trucker: Answer #{i}: about six years, mostly regional, some OTR nights.")
            }
        })
        .collect()
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_prompts(c: &mut Criterion) {
    let roles = RoleConfig::defaults();
    let questions = vec![
        "Do you have any moving violations in the last 3 years?".to_string(),
        "Are you comfortable with team driving?".to_string(),
    ];
    let context = build_history(10);

    let mut group = c.benchmark_group("prompts");

    group.bench_function("system_prompt", |b| {
        b.iter(|| {
            build_system_prompt(
                black_box(&roles.server),
                black_box(&roles.company_b),
                black_box(&questions),
            )
        })
    });

    group.bench_function("turn_system_prompt_10_lines", |b| {
        b.iter(|| {
            build_turn_system_prompt(
                black_box(&roles.server),
                black_box(&roles.company_a),
                black_box(&questions),
                black_box(&context),
            )
        })
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let long_reason = format!("QUALIFIED - {}", "meets requirements and is flexible. ".repeat(20));

    let mut group = c.benchmark_group("parsing");

    group.bench_function("sentiment", |b| b.iter(|| parse_sentiment(black_box(" 4 \n"))));

    group.bench_function("decision_short", |b| {
        b.iter(|| parse_decision(black_box("NOT_QUALIFIED - no CDL")))
    });

    group.bench_function("decision_long_reason", |b| {
        b.iter(|| parse_decision(black_box(&long_reason)))
    });

    group.finish();
}

fn bench_csv(c: &mut Criterion) {
    let conversation = build_history(40).join("\n");

    let mut group = c.benchmark_group("csv");

    group.bench_function("plain_row", |b| {
        b.iter(|| {
            format_row(black_box(&[
                "2025-06-02T09:10:00.000000",
                "companyA",
                "google",
                "4",
                "conversation_20250602_090000_20250602_091000",
            ]))
        })
    });

    group.bench_function("quoted_multiline_row", |b| {
        b.iter(|| {
            format_row(black_box(&[
                "2025-06-02T09:10:00.000000",
                "companyB",
                "indeed, \"paid\"",
                "3",
                &conversation,
            ]))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_prompts, bench_parsing, bench_csv);
criterion_main!(benches);
