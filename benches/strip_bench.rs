use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Map, Value};
use wti_sync::document::{strip_null_values, to_pretty_string};

/// Locale document with `sections` groups of 50 keys, every third key null.
fn make_document(sections: usize) -> Value {
    let mut root = Map::new();
    for s in 0..sections {
        let mut group = Map::new();
        for k in 0..50 {
            let value = if k % 3 == 0 {
                Value::Null
            } else {
                json!(format!("translated string {} in section {}", k, s))
            };
            group.insert(format!("key_{}", k), value);
        }
        group.insert("nested".to_string(), json!({"a": null, "b": "kept", "c": [null, 1]}));
        root.insert(format!("section_{}", s), Value::Object(group));
    }
    Value::Object(root)
}

fn bench_strip_null_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_null_values");

    for sections in [10, 100, 1000].iter() {
        let doc = make_document(*sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), sections, |b, _| {
            b.iter(|| {
                let mut doc = doc.clone();
                strip_null_values(black_box(&mut doc));
                doc
            });
        });
    }
    group.finish();
}

fn bench_pretty_print(c: &mut Criterion) {
    let doc = make_document(100);
    c.bench_function("to_pretty_string_100_sections", |b| {
        b.iter(|| to_pretty_string(black_box(&doc)).unwrap());
    });
}

criterion_group!(benches, bench_strip_null_values, bench_pretty_print);
criterion_main!(benches);
