//! Element Specification Benchmarks
//!
//! Benchmarks for building, refining, merging and rendering specifications.
//!
//! Run with: `cargo bench --bench spec_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use elementspec::prelude::*;

fn bench_start_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("start_points");

    group.bench_function("an_element", |bench| {
        bench.iter(|| black_box(an_element()));
    });
    group.bench_function("an_element_of_type", |bench| {
        bench.iter(|| black_box(an_element_of_type(black_box("button"))));
    });
    group.bench_function("an_element_with_id", |bench| {
        bench.iter(|| black_box(an_element_with_id(black_box("submit-btn"))));
    });

    group.finish();
}

fn bench_refinement_chaining(c: &mut Criterion) {
    let mut group = c.benchmark_group("refinement_chaining");

    let depths = vec![1, 2, 3, 5, 10];

    for depth in depths {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("depth_{}", depth)),
            &depth,
            |bench, &d| {
                bench.iter(|| {
                    let mut spec = an_element_of_type("div");
                    for i in 0..d {
                        spec = spec
                            .that_contains_any_element()
                            .with_class(format!("level-{}", i));
                    }
                    black_box(spec);
                });
            },
        );
    }

    group.finish();
}

fn bench_legacy_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy_dispatch");

    let locators = vec![
        ("css", "css=div.container > button.btn-primary"),
        ("xpath_prefix", "xpath=//div[@id='main']"),
        ("xpath_slashes", "(//li)[3]"),
        ("id", "submit-btn"),
    ];

    for (name, locator) in locators {
        group.bench_with_input(BenchmarkId::from_parameter(name), &locator, |bench, l| {
            bench.iter(|| black_box(from_legacy_locator(black_box(l))));
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let specs = vec![
        ("bare_id", an_element_with_id("submit-btn")),
        (
            "css",
            an_element_of_type("form")
                .with_class("login")
                .that_contains_a_child_of_type("input")
                .with_attribute_value("type", "password"),
        ),
        (
            "xpath_fallback",
            an_element_of_type("table")
                .that_contains_a("td")
                .with_text("Total"),
        ),
    ];

    for (name, spec) in specs {
        group.bench_with_input(BenchmarkId::new("legacy", name), &spec, |bench, s| {
            bench.iter(|| black_box(s).as_legacy_locator().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("driver", name), &spec, |bench, s| {
            bench.iter(|| black_box(s).as_driver_locator().unwrap().to_query());
        });
    }

    group.finish();
}

fn bench_sub_specification(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_specification");

    let counts = vec![2, 5, 10];

    for count in counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_parts", count)),
            &count,
            |bench, &n| {
                bench.iter(|| {
                    let mut spec = an_element_of_type("main");
                    for i in 1..n {
                        spec = spec.add_sub_specification(
                            &an_element_of_type("section").with_class(format!("part-{}", i)),
                        );
                    }
                    black_box(spec);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_start_points,
    bench_refinement_chaining,
    bench_legacy_dispatch,
    bench_rendering,
    bench_sub_specification,
);
criterion_main!(benches);
