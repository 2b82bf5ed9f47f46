use std::{
	io::{self, BufWriter, Write},
	time::Instant,
};

use anyhow::Context;
use clap::Parser;
use mst::{kruskal_by, points::RandomPoints, total_weight};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use rand_seeder::Seeder;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scatters random points in a square, connects every pair of them, and
/// prints the minimum-weight spanning tree of the resulting graph.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Number of distinct points to generate.
	#[arg(short, long, default_value_t = 1000)]
	points: usize,
	/// Coordinates are drawn from -RADIUS..=RADIUS on both axes.
	#[arg(short, long, default_value_t = 100_000, allow_negative_numbers = true)]
	radius: i32,
	/// Any string; the same seed reproduces the same points. Drawn from
	/// entropy if omitted.
	#[arg(short, long)]
	seed: Option<String>,
	/// Run the search to completion instead of stopping once the tree spans
	/// every point.
	#[arg(long)]
	no_hint: bool,
	/// Print only the timing and summary, not every edge.
	#[arg(short, long)]
	quiet: bool,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(io::stderr)
		.init();

	let args = Args::parse();
	let rng: Pcg32 = match &args.seed {
		Some(seed) => Seeder::from(seed.as_str()).make_rng(),
		None => Pcg32::from_entropy(),
	};

	let start = Instant::now();
	let mut points = RandomPoints::new(args.radius, rng);
	points
		.generate(args.points)
		.with_context(|| format!("radius {} is too small", args.radius))?;
	// A spanning tree over n points is complete after n - 1 edges.
	let hint = (!args.no_hint).then_some(args.points);
	let tree = kruskal_by(points.into_edges(), hint, f64::total_cmp);
	let elapsed = start.elapsed();
	info!(?elapsed, edges = tree.len(), "computed minimum spanning tree");

	let mut out = BufWriter::new(io::stdout().lock());
	writeln!(out, "{elapsed:?}")?;
	if !args.quiet {
		for edge in &tree {
			writeln!(out, "{edge}")?;
		}
	}
	writeln!(out, "{}", tree.len())?;
	writeln!(out, "total distance {}", total_weight(&tree))?;
	out.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_is_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn defaults() {
		let args = Args::parse_from(["mst"]);
		assert_eq!(args.points, 1000);
		assert_eq!(args.radius, 100_000);
		assert!(args.seed.is_none());
		assert!(!args.no_hint && !args.quiet);
	}

	#[test]
	fn flags() {
		let args = Args::parse_from([
			"mst", "-p", "12", "-r", "-40", "--seed", "abc", "--no-hint", "-q",
		]);
		assert_eq!(args.points, 12);
		assert_eq!(args.radius, -40);
		assert_eq!(args.seed.as_deref(), Some("abc"));
		assert!(args.no_hint && args.quiet);
	}
}
