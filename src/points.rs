use std::{collections::HashSet, error::Error, fmt};

use rand::Rng;
use rand_pcg::Pcg32;
use tracing::debug;

use crate::{
	geometry::{LatticePoint, LatticeVector},
	weighted_edge::WeightedEdge,
};

pub type DistanceEdge = WeightedEdge<LatticePoint, f64>;

/// Randomly scattered, pairwise distinct lattice points, together with the
/// complete graph over them weighted by Euclidean distance.
#[derive(Debug)]
pub struct RandomPoints {
	rng: Pcg32,
	radius: i32,
	points: HashSet<LatticePoint>,
	edges: Vec<DistanceEdge>,
}

impl RandomPoints {
	/// Creates an empty point set whose coordinates will be drawn uniformly
	/// from `-radius..=radius` on both axes. The sign of `radius` is ignored.
	pub fn new(radius: i32, rng: Pcg32) -> RandomPoints {
		RandomPoints {
			rng,
			radius: radius.saturating_abs(),
			points: HashSet::new(),
			edges: Vec::new(),
		}
	}

	/// The number of distinct points that fit in the square.
	pub fn capacity(&self) -> u64 {
		let side = 2 * self.radius as u64 + 1;
		side * side
	}

	/// Adds random points until there are `count` of them. Each new point is
	/// joined by an edge to every point already present; a point landing on an
	/// existing one is discarded.
	pub fn generate(&mut self, count: usize) -> Result<(), TooManyPoints> {
		if count as u64 > self.capacity() {
			return Err(TooManyPoints {
				requested: count,
				capacity: self.capacity(),
			});
		}
		let origin = LatticePoint::new(0, 0);
		let mut duplicates = 0usize;
		while self.points.len() < count {
			let offset = LatticeVector::new(
				self.rng.gen_range(-self.radius..=self.radius),
				self.rng.gen_range(-self.radius..=self.radius),
			);
			let point = origin + offset;
			if self.points.contains(&point) {
				duplicates += 1;
				continue;
			}
			self.edges.extend(self.points.iter().map(|&other| {
				WeightedEdge::new(point, other, point.distance(other))
			}));
			self.points.insert(point);
		}
		debug!(
			points = self.points.len(),
			edges = self.edges.len(),
			duplicates,
			"generated points"
		);
		Ok(())
	}

	pub fn points(&self) -> &HashSet<LatticePoint> {
		&self.points
	}

	pub fn edges(&self) -> &[DistanceEdge] {
		&self.edges
	}

	pub fn into_edges(self) -> Vec<DistanceEdge> {
		self.edges
	}
}

/// More points were requested than there are lattice points in the square.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TooManyPoints {
	pub requested: usize,
	pub capacity: u64,
}

impl fmt::Display for TooManyPoints {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"cannot place {} distinct points; only {} fit",
			self.requested, self.capacity
		)
	}
}

impl Error for TooManyPoints {}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	fn points(radius: i32, seed: u64) -> RandomPoints {
		RandomPoints::new(radius, Pcg32::seed_from_u64(seed))
	}

	#[test]
	fn builds_a_complete_graph() {
		let mut points = points(50, 1);
		points.generate(20).unwrap();
		assert_eq!(points.points().len(), 20);
		assert_eq!(points.edges().len(), 20 * 19 / 2);

		let distinct: HashSet<_> = points.edges().iter().copied().collect();
		assert_eq!(distinct.len(), points.edges().len());
		for edge in points.edges() {
			assert!(!edge.is_loop());
			assert_eq!(edge.weight, edge.u.distance(edge.v));
			assert!(edge.u.x.abs() <= 50 && edge.u.y.abs() <= 50);
		}
	}

	#[test]
	fn generating_more_extends_the_graph() {
		let mut points = points(10, 2);
		points.generate(5).unwrap();
		points.generate(8).unwrap();
		assert_eq!(points.points().len(), 8);
		assert_eq!(points.into_edges().len(), 8 * 7 / 2);
	}

	#[test]
	fn fills_a_tiny_square_exactly() {
		let mut points = points(-1, 3);
		assert_eq!(points.capacity(), 9);
		points.generate(9).unwrap();
		assert_eq!(points.points().len(), 9);
	}

	#[test]
	fn rejects_more_points_than_fit() {
		let mut points = points(1, 4);
		assert_eq!(
			points.generate(10),
			Err(TooManyPoints {
				requested: 10,
				capacity: 9,
			})
		);
		assert!(points.points().is_empty());
	}

	#[test]
	fn same_seed_same_points() {
		let mut a = points(1000, 5);
		let mut b = points(1000, 5);
		a.generate(30).unwrap();
		b.generate(30).unwrap();
		assert_eq!(a.points(), b.points());
	}
}
