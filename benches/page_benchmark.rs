use atomic_plsql::{contains_header_line, parse_header, parse_page, split_header_and_body};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn generate_page(size_kb: usize) -> String {
    let body = "<p>procedure output line</p>\n".repeat(size_kb * 1024 / 29 + 1);
    format!(
        "Content-type: text/html; charset=UTF-8\nStatus: 200 ok\nX-DB-Content-length: {}\nSet-Cookie: session=abc123\nSet-Cookie: theme=dark mode\nX-Custom: value\n\n{}",
        body.len(),
        body
    )
}

// 헤더/바디 분리 벤치마크
fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in [1, 10, 100].iter() {
        let page = generate_page(*size);
        let body_only = page.replace("\n\n", "\n");

        group.bench_with_input(BenchmarkId::new("with_separator", size), size, |b, _| {
            b.iter(|| black_box(split_header_and_body(&page)))
        });

        group.bench_with_input(BenchmarkId::new("body_only", size), size, |b, _| {
            b.iter(|| black_box(contains_header_line(body_only.as_str())))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [1, 10, 100].iter() {
        let page = generate_page(*size);
        let (header, _) = split_header_and_body(&page);

        group.bench_with_input(BenchmarkId::new("header", size), size, |b, _| {
            b.iter(|| black_box(parse_header(header)))
        });

        group.bench_with_input(BenchmarkId::new("page", size), size, |b, _| {
            b.iter(|| black_box(parse_page(&page)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_parse);
criterion_main!(benches);
