use criterion::{black_box, criterion_group, criterion_main, Criterion};
use settle_core::{ActivePiece, Cell, Position, Shape};
use settle_engine::{enumerate_drops, par_resolved_fields, resolve_drop, Field};

fn bumpy_field() -> Field {
    let mut field = Field::new(10, 20).unwrap();
    for i in 0..6 {
        let row = 19 - i;
        for col in 0..10 {
            if col != (i * 3) % 10 {
                field.set(row, col, Cell::Filled(Shape::J));
            }
        }
    }
    for col in 0..10 {
        field.recompute_column_height(col);
    }
    field
}

fn bench_resolve_drop(c: &mut Criterion) {
    let field = bumpy_field();

    for shape in Shape::ALL {
        c.bench_function(&format!("resolve_drop_{}", shape.glyph()), |b| {
            b.iter(|| {
                for &rotation in shape.distinct_rotations() {
                    for col in 0..10 {
                        let start = ActivePiece::new(shape, rotation, Position::new(0, col));
                        black_box(resolve_drop(black_box(&field), start));
                    }
                }
            })
        });
    }
}

fn bench_enumeration(c: &mut Criterion) {
    let field = bumpy_field();

    c.bench_function("enumerate_drops_all_shapes", |b| {
        b.iter(|| {
            for shape in Shape::ALL {
                black_box(enumerate_drops(black_box(&field), shape));
            }
        })
    });

    c.bench_function("par_resolved_fields_all_shapes", |b| {
        b.iter(|| par_resolved_fields(black_box(&field), black_box(&Shape::ALL)))
    });
}

criterion_group!(benches, bench_resolve_drop, bench_enumeration);
criterion_main!(benches);
