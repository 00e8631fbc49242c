use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_core::ProductId;
use storefront_infra::catalog::{CatalogStore, InMemoryCatalogStore};
use storefront_products::{NewProduct, ProductPatch, ProductQuery, SortOrder};

const CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Accessories", "general"];

fn populated_store(size: usize) -> InMemoryCatalogStore {
    let store = InMemoryCatalogStore::new();
    for i in 0..size {
        let input = NewProduct::try_new(
            Some(format!("Product {i} Deluxe")),
            Some((i % 500) as f64 + 0.99),
            None,
            Some(CATEGORIES[i % CATEGORIES.len()].to_string()),
        )
        .unwrap();
        store.create(input);
    }
    store
}

fn bench_list_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_list");

    for size in [10usize, 100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let store = populated_store(*size);

        group.bench_with_input(BenchmarkId::new("unfiltered", size), size, |b, _| {
            let query = ProductQuery::new();
            b.iter(|| black_box(store.list(&query)));
        });

        group.bench_with_input(BenchmarkId::new("category_and_search", size), size, |b, _| {
            let query = ProductQuery::new().category("electronics").search("deluxe");
            b.iter(|| black_box(store.list(&query)));
        });

        group.bench_with_input(BenchmarkId::new("sorted_by_price", size), size, |b, _| {
            let query = ProductQuery::new().sort(SortOrder::Price);
            b.iter(|| black_box(store.list(&query)));
        });
    }

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_mutations");

    group.bench_function("create", |b| {
        let store = populated_store(100);
        b.iter(|| {
            let input =
                NewProduct::try_new(Some(black_box("Bench Widget".to_string())), Some(1.0), None, None)
                    .unwrap();
            black_box(store.create(input));
        });
    });

    group.bench_function("update_price", |b| {
        let store = populated_store(1000);
        let id = ProductId::from("500");
        let patch = ProductPatch {
            price: Some(42.0),
            ..ProductPatch::default()
        };
        b.iter(|| black_box(store.update(&id, &patch).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_list_filter, bench_mutations);
criterion_main!(benches);
