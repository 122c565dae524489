// benches/buffer_bench.rs
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wirebuf::prelude::*;

fn bench_primitive_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_operations");

    group.bench_function("write_read_i64", |b| {
        let mut buf = Buffer::allocate(4096);
        b.iter(|| {
            buf.set_writer_index(0).unwrap();
            buf.set_reader_index(0).unwrap();
            for i in 0..64 {
                buf.write_i64(black_box(i));
            }
            for _ in 0..64 {
                black_box(buf.read_i64().unwrap());
            }
        });
    });

    group.bench_function("unsafe_put_get_i64", |b| {
        let mut buf = Buffer::allocate(4096);
        b.iter(|| unsafe {
            for i in 0..64usize {
                buf.unsafe_put_i64(i * 8, black_box(i as i64));
            }
            for i in 0..64usize {
                black_box(buf.unsafe_get_i64(i * 8));
            }
        });
    });

    group.finish();
}

fn bench_varint(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");

    for &value in [127u32, 16384, 268435456].iter() {
        group.bench_with_input(BenchmarkId::new("var_u32", value), &value, |b, &value| {
            let mut buf = Buffer::allocate(1024);
            b.iter(|| {
                buf.set_writer_index(0).unwrap();
                buf.set_reader_index(0).unwrap();
                for _ in 0..32 {
                    buf.write_var_u32(black_box(value));
                }
                for _ in 0..32 {
                    black_box(buf.read_var_u32().unwrap());
                }
            });
        });
    }

    group.bench_function("sli_i64_small", |b| {
        let mut buf = Buffer::allocate(1024);
        b.iter(|| {
            buf.set_writer_index(0).unwrap();
            buf.set_reader_index(0).unwrap();
            for i in 0..32 {
                buf.write_sli_i64(black_box(i));
            }
            for _ in 0..32 {
                black_box(buf.read_sli_i64().unwrap());
            }
        });
    });

    group.bench_function("var_u32_aligned", |b| {
        let mut buf = Buffer::allocate(1024);
        b.iter(|| {
            buf.set_writer_index(0).unwrap();
            buf.set_reader_index(0).unwrap();
            for i in 0..32 {
                buf.write_var_u32_aligned(black_box(i * 977));
            }
            for _ in 0..32 {
                black_box(buf.read_var_u32_aligned().unwrap());
            }
        });
    });

    group.finish();
}

fn bench_bulk_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_copy");

    for size in [64usize, 1024, 16384].iter() {
        group.bench_with_input(BenchmarkId::new("copy_to", size), size, |b, &size| {
            let mut src = Buffer::allocate(size);
            src.write_bytes(&vec![0xAB; size]);
            let mut dst = Buffer::allocate(size);
            b.iter(|| {
                src.copy_to(0, &mut dst, 0, black_box(size)).unwrap();
            });
        });

        group.bench_with_input(
            BenchmarkId::new("write_bytes_grow", size),
            size,
            |b, &size| {
                let payload = vec![0xCD; size];
                b.iter(|| {
                    let mut buf = Buffer::allocate(16);
                    buf.write_bytes(black_box(&payload));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_primitive_write_read,
    bench_varint,
    bench_bulk_copy
);
criterion_main!(benches);
