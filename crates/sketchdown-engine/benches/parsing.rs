use criterion::{Criterion, criterion_group, criterion_main};
use sketchdown_engine::parse_markdown;

fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("## Section {i}\n\n"));
        content.push_str("A paragraph with `code`, **bold**, and *italic* text.\n\n");
        content.push_str("- first item\n- second item\n- third item\n\n");
        content.push_str("- [x] done\n- [ ] pending\n\n");
        content.push_str("> a quoted line\n> and another\n\n");
        content.push_str("```rust\nfn demo() {\n    println!(\"hi\");\n}\n```\n\n");
    }
    content
}

fn bench_parse_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    group.bench_function("parse_markdown", |b| {
        b.iter(|| {
            let blocks = parse_markdown(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_markdown);
criterion_main!(benches);
