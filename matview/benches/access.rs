use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matview::{BoundsPolicy, DenseMatrix, Index, Matrix, MutableMatrix, Rectangle, Size, Submatrix};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIDE: usize = 256;
const LOOKUPS: usize = 4096;
const SEED: u64 = 0x8c2b_781f_2866_90fd;

fn root() -> DenseMatrix<u64> {
    DenseMatrix::from_fn(Size::new(SIDE, SIDE), |index| {
        (index.row as u64) << 32 | index.column as u64
    })
}

/// Shrink the view by one cell on every side, `depth` times
fn nested(matrix: &DenseMatrix<u64>, depth: usize) -> Submatrix<'_, u64> {
    let mut view = matrix
        .submatrix(Rectangle::from_size(matrix.size()), BoundsPolicy::Local)
        .unwrap();
    for _ in 0..depth {
        let bottom_right = view.size().to_index() - Index::new(1, 1);
        view = view
            .narrow(Rectangle::new(Index::new(1, 1), bottom_right), BoundsPolicy::Local)
            .unwrap();
    }
    view
}

fn lookups(size: Size) -> Vec<Index> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..LOOKUPS)
        .map(|_| {
            Index::new(
                rng.gen_range(0..size.rows as isize),
                rng.gen_range(0..size.columns as isize),
            )
        })
        .collect()
}

fn bench_get(c: &mut Criterion) {
    let matrix = root();
    let mut group = c.benchmark_group("get");

    let indices = lookups(matrix.size());
    group.bench_function("root", |b| {
        b.iter(|| {
            for &index in &indices {
                black_box(matrix.get(black_box(index)).unwrap());
            }
        })
    });

    for depth in [1, 8] {
        let view = nested(&matrix, depth);
        let indices = lookups(view.size());
        group.bench_with_input(BenchmarkId::new("nested", depth), &view, |b, view| {
            b.iter(|| {
                for &index in &indices {
                    black_box(view.get(black_box(index)).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_cursor(c: &mut Criterion) {
    let mut matrix = root();
    let mut group = c.benchmark_group("cursor");

    group.bench_function("read", |b| {
        b.iter(|| matrix.cursor().fold(0u64, |sum, value| sum.wrapping_add(*value)))
    });

    group.bench_function("set_view", |b| {
        b.iter(|| {
            let window = Rectangle::new(Index::new(16, 16), Index::new(240, 240));
            let mut view = matrix.submatrix_mut(window, BoundsPolicy::Local).unwrap();
            let mut cursor = view.cursor_mut();
            while cursor.has_next() {
                let value = cursor.try_next().unwrap().wrapping_add(1);
                cursor.set(value).unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_get, bench_cursor);
criterion_main!(benches);
