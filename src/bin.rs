use std::fmt::Display;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rust_heap::{Compare, Heap, HeapError, MaxHeap, MinHeap, DEFAULT_CAPACITY};

/// Fill a min-heap and a max-heap with random values and print them back in polled order
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Values generated per demo
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting capacity of each heap
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn print_polled<T: Display, C: Compare<T>>(title: &str, heap: &mut Heap<T, C>, sep: &str) {
    println!("\n {} Poll Values:\n------------------------", title);
    for value in heap.drain_sorted() {
        print!("{}{}", value, sep);
    }
    println!();
}

fn report<T: Display, C: Compare<T>>(heap: &Heap<T, C>) -> Result<(), HeapError> {
    let top = heap.try_peek()?;
    debug!("top {} of {} (capacity {})", top, heap.len(), heap.capacity());
    Ok(())
}

pub fn int_heap_example(rng: &mut StdRng, count: usize, capacity: usize) -> Result<(), HeapError> {
    println!("\n-------------------Integer Heap Demo-------------------");
    let mut min_heap = MinHeap::with_capacity(capacity);
    let mut max_heap = MaxHeap::with_capacity(capacity);
    for _ in 0..count {
        let value: u64 = rng.gen_range(1..count as u64 * 10);
        min_heap.push(value);
        max_heap.push(value);
        print!("{} ", value);
    }
    report(&min_heap)?;
    report(&max_heap)?;
    print_polled("MinHeap", &mut min_heap, " ");
    print_polled("MaxHeap", &mut max_heap, " ");
    Ok(())
}

pub fn double_heap_example(
    rng: &mut StdRng,
    count: usize,
    capacity: usize,
) -> Result<(), HeapError> {
    println!("\n-------------------Double Heap Demo-------------------");
    let mut min_heap = Heap::with_capacity_and_order(capacity, |a: &f64, b: &f64| a.total_cmp(b));
    let mut max_heap = Heap::with_capacity_and_order(capacity, |a: &f64, b: &f64| b.total_cmp(a));
    for _ in 0..count {
        let value: f64 = rng.gen();
        min_heap.push(value);
        max_heap.push(value);
        println!("{} ", value);
    }
    report(&min_heap)?;
    report(&max_heap)?;
    print_polled("MinHeap", &mut min_heap, "\n");
    print_polled("MaxHeap", &mut max_heap, "\n");
    Ok(())
}

pub fn string_heap_example(
    rng: &mut StdRng,
    count: usize,
    capacity: usize,
) -> Result<(), HeapError> {
    println!("\n-------------------String Heap Demo-------------------");
    let mut min_heap = MinHeap::with_capacity(capacity);
    let mut max_heap = MaxHeap::with_capacity(capacity);
    for _ in 0..count {
        let value: String = (0..11).map(|_| char::from(rng.sample(Alphanumeric))).collect();
        println!("{} ", value);
        min_heap.push(value.clone());
        max_heap.push(value);
    }
    report(&min_heap)?;
    report(&max_heap)?;
    print_polled("MinHeap", &mut min_heap, "\n");
    print_polled("MaxHeap", &mut max_heap, "\n");
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("running demos with {} values each", cli.count);
    int_heap_example(&mut rng, cli.count, cli.capacity)?;
    double_heap_example(&mut rng, cli.count, cli.capacity)?;
    string_heap_example(&mut rng, cli.count, cli.capacity)?;
    Ok(())
}

pub fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.count == 0 {
        eprintln!("Error: --count must be at least 1");
        return ExitCode::FAILURE;
    }
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
