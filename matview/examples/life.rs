use clap::Parser;
use log::{debug, info};
use matview::{BoundsPolicy, DenseMatrix, Index, Matrix, MutableMatrix, Rectangle, Size};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Conway's Game of Life, counting neighbours through bounds-extended 1x1 views")]
struct Cli {
    /// Board height
    #[arg(long, default_value_t = 12)]
    rows: usize,

    /// Board width
    #[arg(long, default_value_t = 24)]
    columns: usize,

    /// Number of generations to simulate
    #[arg(long, default_value_t = 8)]
    generations: usize,

    /// Seed for the initial board
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Probability of a cell starting alive
    #[arg(long, default_value_t = 0.3)]
    density: f64,
}

const NEIGHBOURS: [Index; 8] = [
    Index::new(-1, -1),
    Index::new(-1, 0),
    Index::new(-1, 1),
    Index::new(0, -1),
    Index::new(0, 1),
    Index::new(1, -1),
    Index::new(1, 0),
    Index::new(1, 1),
];

/// Count live neighbours of `index`, treating cells past the board edge as dead
fn live_neighbours(board: &DenseMatrix<bool>, index: Index) -> matview::Result<usize> {
    let window = Rectangle::new(index, index + Index::new(1, 1));
    let cell = board.submatrix(window, BoundsPolicy::Extended)?;
    Ok(NEIGHBOURS
        .iter()
        .filter(|&&offset| cell.get(offset).is_ok_and(|alive| *alive))
        .count())
}

fn step(board: &mut DenseMatrix<bool>) -> matview::Result<usize> {
    let mut next = Vec::with_capacity(board.size().area());
    for (index, alive) in board.iter() {
        let count = live_neighbours(board, index)?;
        next.push(matches!((*alive, count), (true, 2) | (_, 3)));
    }

    let mut changed = 0;
    let mut cursor = board.cursor_mut();
    for alive in next {
        if *cursor.try_next()? != alive {
            changed += 1;
        }
        cursor.set(alive)?;
    }
    Ok(changed)
}

fn render(board: &DenseMatrix<bool>) {
    for row in board.rows() {
        let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    let cli = Cli::parse();

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let density = cli.density.clamp(0.0, 1.0);
    let mut board =
        DenseMatrix::from_fn(Size::new(cli.rows, cli.columns), |_| rng.gen_bool(density));
    info!("Board {} seeded with {} live cells", board.size(), population(&board));

    println!("Generation 0:");
    render(&board);

    for generation in 1..=cli.generations {
        let changed = step(&mut board)?;
        debug!("Generation {generation}: {changed} cells changed");

        println!("\nGeneration {generation}:");
        render(&board);

        if changed == 0 {
            info!("Board is stable after {generation} generations");
            break;
        }
    }

    info!("Final population: {}", population(&board));
    Ok(())
}

fn population(board: &DenseMatrix<bool>) -> usize {
    board.as_slice().iter().filter(|&&alive| alive).count()
}
