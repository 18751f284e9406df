// havoc-mutation/src/bin/havoc.rs
//! Reproducible havoc driver
//!
//! Feeds a hex-encoded value through repeated havoc calls and prints each
//! round's result, for eyeballing mutation behavior and reproducing a
//! mutation sequence from a seed.

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use havoc_mutation::havoc;

#[derive(Parser, Debug)]
#[command(name = "havoc", about = "Apply stacked havoc mutations to a byte buffer")]
struct Args {
    /// Hex-encoded starting value; eight zero bytes when omitted
    #[arg(long)]
    input: Option<String>,

    /// Buffer capacity in bytes; defaults to twice the input length
    #[arg(long)]
    capacity: Option<usize>,

    /// RNG seed, for reproducible runs
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of havoc rounds, each mutating the previous round's output
    #[arg(long, default_value_t = 16)]
    rounds: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let value = match &args.input {
        Some(input) => hex::decode(input)?,
        None => vec![0u8; 8],
    };
    let capacity = args.capacity.unwrap_or((value.len() * 2).max(8));
    if capacity < value.len() {
        return Err(format!(
            "capacity {} cannot hold the {}-byte input",
            capacity,
            value.len()
        )
        .into());
    }

    let mut buffer = vec![0u8; capacity];
    buffer[..value.len()].copy_from_slice(&value);
    let mut size = value.len();
    let mut rng = StdRng::seed_from_u64(args.seed);

    info!(
        "seed {}, {} rounds, {} of {} bytes in use",
        args.seed, args.rounds, size, capacity
    );
    for round in 0..args.rounds {
        size = havoc(&mut buffer, size, &mut rng)?;
        println!("{:>4}  {}", round, hex::encode(&buffer[..size]));
    }

    Ok(())
}
