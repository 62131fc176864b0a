use criterion::{criterion_group, criterion_main, Criterion};
use skin_storefront::{
    response::ItemsPage,
    TradeLink,
};

fn criterion_benchmark(c: &mut Criterion) {
    let items_page_bytes = include_bytes!("../src/response/fixtures/items.json");
    
    c.bench_function("deserializes items page", |b| b.iter(|| {
        serde_json::from_slice::<ItemsPage>(items_page_bytes).ok();
    }));
    
    c.bench_function("parses trade link", |b| b.iter(|| {
        TradeLink::parse("https://steamcommunity.com/tradeoffer/new/?partner=59566827&amp;token=CBl2pinD").ok();
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
