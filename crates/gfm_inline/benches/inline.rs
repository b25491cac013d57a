use criterion::{criterion_group, criterion_main, Criterion};

use gfm_inline::parse_inline;

static INLINE_HEAVY: &str = "*this ***has some* various things* that** \
[create multiple elements](while/inline 'but without') taking _too_ much \
![effort] to parse, and should `be a decent` test` ``of ``whether this \
works quickly, with <http://autolinks.example/x> and <span class=\"tags\">, \
&amp; some entities&#33;";

static PLAIN: &str = "mostly plain words with no inline structure at all, \
just a lot of ordinary text that the lexer should fly through without \
creating any delimiters or speculative parses along the way";

fn inlines(c: &mut Criterion) {
    let mut group = c.benchmark_group("inlines");
    group.bench_function("gfm_inline", |b| {
        b.iter(|| parse_inline(INLINE_HEAVY));
    });
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = pulldown_cmark::Parser::new(INLINE_HEAVY);
            let mut html_output = String::new();
            pulldown_cmark::html::push_html(&mut html_output, parser);
        });
    });
    group.finish();
}

fn plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain text");
    group.bench_function("gfm_inline", |b| {
        b.iter(|| parse_inline(PLAIN));
    });
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = pulldown_cmark::Parser::new(PLAIN);
            let mut html_output = String::new();
            pulldown_cmark::html::push_html(&mut html_output, parser);
        });
    });
    group.finish();
}

criterion_group!(benches, inlines, plain_text);
criterion_main!(benches);
