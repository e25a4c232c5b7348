use log::info;
use matview::{BoundsPolicy, DenseMatrix, Index, Matrix, MutableMatrix, Rectangle, Size};

fn print_view<M>(label: &str, view: &M)
where
    M: Matrix + std::fmt::Display,
{
    println!("{label}: {} at {} in root coordinates", view.size(), view.rectangle());
    print!("{view}");
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let mut root = DenseMatrix::from_fn(Size::new(5, 6), |index| index.row * 10 + index.column);
    print_view("Root", &root);

    let outer = root.submatrix(
        Rectangle::new(Index::new(1, 1), Index::new(5, 5)),
        BoundsPolicy::Local,
    )?;
    print_view("Outer view", &outer);

    let inner = outer.submatrix(
        Rectangle::new(Index::new(1, 1), Index::new(3, 3)),
        BoundsPolicy::Extended,
    )?;
    print_view("Inner view", &inner);

    // The inner view reaches past both windows up to the root's edge
    println!("inner(-2, -2) = {}", inner.get_at(-2, -2)?);
    println!("inner(2, 3) = {}", inner.get_at(2, 3)?);
    if let Err(err) = outer.get_at(-1, -1) {
        println!("outer(-1, -1) rejected: {err}");
    }
    let oversized = Rectangle::new(Index::ZERO, Index::new(5, 5));
    if let Err(err) = outer.submatrix(oversized, BoundsPolicy::Local) {
        println!("Oversized nested view rejected: {err}");
    }
    println!();

    // Writes through a nested writable view land in the root
    let mut writable = root.submatrix_mut(
        Rectangle::new(Index::new(1, 1), Index::new(5, 5)),
        BoundsPolicy::Local,
    )?;
    let mut corner = writable.submatrix_mut(
        Rectangle::new(Index::new(2, 2), Index::new(4, 4)),
        BoundsPolicy::Local,
    )?;
    let mut cursor = corner.cursor_mut();
    while cursor.has_next() {
        let value = -*cursor.try_next()?;
        cursor.set(value)?;
    }
    info!("Negated {} cells through a nested view", corner.size().area());

    print_view("Root after negating the corner", &root);
    Ok(())
}
