use std::thread;

use criterion::{criterion_group, criterion_main, Criterion};

use guarded::GuardedValue;

fn uncontended(c: &mut Criterion) {
    let value = GuardedValue::new(0usize);

    c.bench_function("uncontended with_lock", |b| {
        b.iter(|| value.with_lock(|val| *val += 1))
    });

    c.bench_function("uncontended guard", |b| b.iter(|| *value.lock() += 1));
}

fn contended(c: &mut Criterion) {
    static VALUE: GuardedValue<usize> = GuardedValue::new(0);

    c.bench_function("contended with_lock", |b| {
        b.iter(|| {
            let threads: Vec<_> = (0..4)
                .map(|_| {
                    thread::spawn(|| {
                        for _ in 0..1_000 {
                            VALUE.with_lock(|val| *val += 1);
                        }
                    })
                })
                .collect();

            for t in threads {
                t.join().unwrap();
            }
        })
    });
}

criterion_group!(benches, uncontended, contended);
criterion_main!(benches);
