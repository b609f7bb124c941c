//! Performance benchmarks for arbor

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use arbor::test_utils::TestDir;
use arbor::{Depth, RenderConfig, TreeRenderer, parse};

/// Build a tree with `dirs` directories of `files_per_dir` files each, nested two deep.
fn create_test_tree(dirs: usize, files_per_dir: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            dir.add_file(&format!("dir_{}/sub_{}/file_{}.rs", d, d % 3, f), "");
        }
    }
    dir
}

fn render_text(dir: &TestDir) -> String {
    TreeRenderer::new(RenderConfig::with_depth(Depth::Pierce))
        .render(dir.path())
        .unwrap()
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let small = create_test_tree(5, 10);
    group.bench_function("small_tree_50_files", |b| {
        let renderer = TreeRenderer::new(RenderConfig::with_depth(Depth::Pierce));
        b.iter(|| renderer.render(black_box(small.path())))
    });

    let large = create_test_tree(50, 20);
    group.bench_function("large_tree_1000_files", |b| {
        let renderer = TreeRenderer::new(RenderConfig::with_depth(Depth::Pierce));
        b.iter(|| renderer.render(black_box(large.path())))
    });

    group.bench_function("large_tree_depth_0", |b| {
        let renderer = TreeRenderer::new(RenderConfig::with_depth(Depth::Current));
        b.iter(|| renderer.render(black_box(large.path())))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let small = render_text(&create_test_tree(5, 10));
    group.bench_function("small_diagram", |b| b.iter(|| parse(black_box(&small))));

    let large = render_text(&create_test_tree(50, 20));
    group.bench_function("large_diagram", |b| b.iter(|| parse(black_box(&large))));

    let commented: String = large
        .lines()
        .map(|l| format!("{}   # generated", l))
        .collect::<Vec<_>>()
        .join("\n");
    group.bench_function("large_diagram_with_comments", |b| {
        b.iter(|| parse(black_box(&commented)))
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_parse);
criterion_main!(benches);
