//! Example listing the cells of a tensor-product grid with their indices.
//!
//! This example shows how to:
//! - Parse a `GridShape` from the command line
//! - Build a `Lexicographic` enumerator for a chosen cell dimension
//! - Decode every index, or a single one, into an `Element`
//!
//! # Usage
//!
//! List the edges of a grid with 2 cells along x and 3 along y:
//!
//! ```sh
//! cargo run --example list_cells -- --shape 2x3 --dimension 1
//! ```
//!
//! Print a single cell:
//!
//! ```sh
//! cargo run --example list_cells -- --shape 2x2x2 --dimension 2 --index 11
//! ```
//!
//! Look up the index of a cell given its directions and coordinates:
//!
//! ```sh
//! cargo run --example list_cells -- --shape 2x2x2 --dimension 2 --find 0,1:1,1,2
//! ```
//!
//! Set `RUST_LOG=debug` to see the block table being built.

use std::{error::Error, process};

use clap::Parser;
use tensor_enumeration::{
    Combination, DimensionIndex, Element, FiberIndex, GlobalIndex, GridShape, Lexicographic,
    shape,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid extents, such as `2x3x4`. Between 1 and 4 axes are supported.
    #[arg(short, long, value_name = "EXTENTS")]
    shape: String,

    /// Dimension of the listed cells (0 for vertices).
    #[arg(short, long, value_name = "K", default_value_t = 0)]
    dimension: usize,

    /// Print only the cell at this index.
    #[arg(short, long, value_name = "INDEX", conflicts_with = "find")]
    index: Option<GlobalIndex>,

    /// Print the index of the cell `AXES:COORDINATES`, such as `0,1:1,1,2`.
    #[arg(short, long, value_name = "CELL")]
    find: Option<String>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let order = shape::split_extents(&args.shape).count();

    if let Err(err) = dispatch(order, &args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn dispatch(order: usize, args: &Args) -> Result<(), Box<dyn Error>> {
    macro_rules! dispatch {
        ($(($n:literal, $k:literal)),* $(,)?) => {
            match (order, args.dimension) {
                $(($n, $k) => run::<$n, $k>(args),)*
                (order, dimension) => Err(format!(
                    "unsupported grid order {order} with cell dimension {dimension}"
                )
                .into()),
            }
        };
    }
    dispatch!(
        (1, 0), (1, 1),
        (2, 0), (2, 1), (2, 2),
        (3, 0), (3, 1), (3, 2), (3, 3),
        (4, 0), (4, 1), (4, 2), (4, 3), (4, 4),
    )
}

fn run<const N: usize, const K: usize>(args: &Args) -> Result<(), Box<dyn Error>> {
    let shape: GridShape<N> = args.shape.parse()?;
    let lex = Lexicographic::<N, K>::new(shape)?;
    log::info!("{} {K}-cells in a {shape} grid", lex.size());

    if let Some(cell) = &args.find {
        let element = parse_cell::<N, K>(cell)?;
        println!("{}: {element}", lex.try_index_of(&element)?);
        return Ok(());
    }

    if let Some(index) = args.index {
        println!("{index}: {}", lex.try_at(index)?);
        return Ok(());
    }

    for index in 0..lex.size() {
        println!("{index}: {}", lex.at(index));
    }
    Ok(())
}

fn parse_cell<const N: usize, const K: usize>(cell: &str) -> Result<Element<N, K>, Box<dyn Error>> {
    let (axes, coordinates) = cell
        .split_once(':')
        .ok_or("expected a cell of the form AXES:COORDINATES")?;

    let axes = parse_list::<DimensionIndex>(axes)?;
    let axes: [DimensionIndex; K] = axes
        .try_into()
        .map_err(|axes: Vec<_>| format!("expected {K} axes, got {}", axes.len()))?;
    let coordinates = parse_list::<FiberIndex>(coordinates)?;
    let coordinates: [FiberIndex; N] = coordinates
        .try_into()
        .map_err(|coordinates: Vec<_>| format!("expected {N} coordinates, got {}", coordinates.len()))?;

    Ok(Element::from_coordinates(Combination::new(axes)?, coordinates))
}

fn parse_list<T>(list: &str) -> Result<Vec<T>, Box<dyn Error>>
where
    T: std::str::FromStr,
    T::Err: Error + 'static,
{
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<T>().map_err(Into::into))
        .collect()
}
