use blogcraft_core::{
    ComposerSession, Format, Selection, compute_metrics, derive_slug, render_preview,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn large_body(paragraphs: usize) -> String {
    let mut out = String::with_capacity(paragraphs * 160);
    for i in 0..paragraphs {
        out.push_str(&format!(
            "## Section {i}\nThe **quick** brown fox *jumps* over the [lazy](https://example.com) dog.\n- item {i}\n> quote {i}\n"
        ));
    }
    // Drop the final '\n' so the body does not end in an empty line.
    out.pop();
    out
}

fn bench_preview_render(c: &mut Criterion) {
    let body = large_body(5_000);
    c.bench_function("preview_render/5k_sections", |b| {
        b.iter(|| black_box(render_preview(black_box(&body))))
    });
}

fn bench_metrics(c: &mut Criterion) {
    let body = large_body(5_000);
    c.bench_function("metrics/5k_sections", |b| {
        b.iter(|| black_box(compute_metrics(black_box(&body))))
    });
}

fn bench_slug(c: &mut Criterion) {
    let title = "Ten Things I Learned Writing a Headless Blog Editor, in 2024!".repeat(10);
    c.bench_function("slug/long_title", |b| {
        b.iter(|| black_box(derive_slug(black_box(&title))))
    });
}

fn bench_format_in_middle(c: &mut Criterion) {
    let body = large_body(5_000);
    c.bench_function("format_middle/100_bold", |b| {
        b.iter_batched(
            || {
                let mut session = ComposerSession::new();
                session.set_body(body.clone());
                session
            },
            |mut session| {
                let mut offset = session.metrics().char_count / 2;
                for _ in 0..100 {
                    offset = session.apply_format(Format::Bold, Selection::new(offset, offset + 3));
                }
                black_box(session.version());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_preview_render,
    bench_metrics,
    bench_slug,
    bench_format_in_middle
);
criterion_main!(benches);
