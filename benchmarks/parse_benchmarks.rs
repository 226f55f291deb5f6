#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use purl::{Parser, SuffixList, split_domain};

fn bench_parse_url(c: &mut Criterion) {
    let parser = Parser::default();
    c.bench_function("parse_url", |b| {
        b.iter(|| {
            parser
                .parse_url(black_box(
                    "https://user:pw@sub.domain.example.co.uk:8443/a/b?x=1&y=2#frag",
                ))
                .unwrap()
        });
    });
}

fn bench_parse_bare_path(c: &mut Criterion) {
    let parser = Parser::default();
    c.bench_function("parse_bare_path", |b| {
        b.iter(|| parser.parse_url(black_box("/a/b/c?x=1")).unwrap());
    });
}

fn bench_split_domain(c: &mut Criterion) {
    let list = SuffixList::shared();
    c.bench_function("split_domain", |b| {
        b.iter(|| split_domain(&list, black_box("www.example.co.uk")));
    });
}

fn bench_suffix_list_build(c: &mut Criterion) {
    c.bench_function("suffix_list_build", |b| {
        b.iter(|| SuffixList::bundled().unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse_url,
    bench_parse_bare_path,
    bench_split_domain,
    bench_suffix_list_build
);
criterion_main!(benches);
