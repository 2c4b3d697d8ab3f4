//! Criterion benchmarks for cfoplan_core derivation
//!
//! Run with: cargo bench -p cfoplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cfoplan_core::model::{Scenario, Sheet, SheetId};
use cfoplan_core::{SheetStore, derive};

fn example_sheet(new_hires: u32) -> Sheet {
    let mut sheet = Sheet::new(SheetId(1), "Bench");
    sheet.scenario = Scenario {
        new_hires,
        marketing_boost: 25_000.0,
        price_change: -5.0,
    };
    sheet.live_data.latest_misc_expense = 12_000.0;
    sheet
}

fn bench_derive(c: &mut Criterion) {
    let sheet = example_sheet(3);
    c.bench_function("derive_single_sheet", |b| {
        b.iter(|| derive(black_box(&sheet)))
    });
}

fn bench_derive_all_sheets(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_all_sheets");
    for count in [10usize, 100, 1_000] {
        let mut store = SheetStore::new();
        for i in 0..count {
            store.create_sheet(format!("Sheet {i}"));
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| {
                store
                    .sheets()
                    .iter()
                    .map(|s| derive(s).projected.profit)
                    .sum::<f64>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_derive, bench_derive_all_sheets);
criterion_main!(benches);
