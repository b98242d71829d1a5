//! Benchmark for the greedy column distribution.
//!
//! Each assignment rescans every column, so a full pass is
//! O(posts² / columns) in content scoring; this tracks how that holds
//! up for realistic feed sizes.

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use postwall::layout::distribute;
use postwall::model::{ColumnCount, Post};

fn feed(len: usize) -> Vec<Post> {
    (0..len)
        .map(|i| {
            let mut post = Post::new(format!("post body number {i}, some filler text #tag{i}"));
            post.split_trailing_tag();
            post
        })
        .collect()
}

fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute");
    for &size in &[10usize, 100, 500] {
        let posts = feed(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &posts, |b, posts| {
            b.iter(|| distribute(black_box(posts), ColumnCount::FOUR));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distribute);
criterion_main!(benches);
