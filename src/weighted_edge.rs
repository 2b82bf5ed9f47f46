use std::{
	fmt,
	hash::{BuildHasher, Hash, Hasher},
};

/// An undirected edge between two vertices of a graph, carrying a weight.
///
/// Equality and hashing look only at the endpoints and ignore their order, so
/// `{u, v}` and `{v, u}` are the same edge whatever their weights.
#[derive(Clone, Copy, Debug)]
pub struct WeightedEdge<V, W> {
	/// An endpoint of the edge.
	pub u: V,
	/// An endpoint of the edge.
	pub v: V,
	/// The weight of the edge.
	pub weight: W,
}

impl<V, W> WeightedEdge<V, W> {
	pub fn new(u: V, v: V, weight: W) -> Self {
		WeightedEdge { u, v, weight }
	}

	/// Whether `vertex` is either endpoint of this edge.
	pub fn is_endpoint(&self, vertex: &V) -> bool
	where
		V: PartialEq,
	{
		self.u == *vertex || self.v == *vertex
	}

	/// Whether both endpoints are the same vertex.
	pub fn is_loop(&self) -> bool
	where
		V: PartialEq,
	{
		self.u == self.v
	}
}

impl<V: PartialEq, W> PartialEq for WeightedEdge<V, W> {
	fn eq(&self, other: &Self) -> bool {
		(self.u == other.u && self.v == other.v)
			|| (self.u == other.v && self.v == other.u)
	}
}

impl<V: Eq, W> Eq for WeightedEdge<V, W> {}

impl<V: Hash, W> Hash for WeightedEdge<V, W> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// Hash each endpoint on its own, then feed the pair in a canonical
		// order so that swapping endpoints yields the same hash.
		let build = std::hash::BuildHasherDefault::<
			std::collections::hash_map::DefaultHasher,
		>::default();
		let (a, b) = (build.hash_one(&self.u), build.hash_one(&self.v));
		state.write_u64(a.min(b));
		state.write_u64(a.max(b));
	}
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for WeightedEdge<V, W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ==> {} (distance {})", self.u, self.v, self.weight)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn equality_ignores_endpoint_order_and_weight() {
		assert_eq!(WeightedEdge::new('a', 'b', 1), WeightedEdge::new('b', 'a', 7));
		assert_ne!(WeightedEdge::new('a', 'b', 1), WeightedEdge::new('a', 'c', 1));
	}

	#[test]
	fn loop_is_not_equal_to_an_edge_sharing_one_endpoint() {
		assert_ne!(WeightedEdge::new('a', 'a', 1), WeightedEdge::new('a', 'b', 1));
		assert!(WeightedEdge::new('a', 'a', 1).is_loop());
	}

	#[test]
	fn reversed_edges_collapse_in_a_hash_set() {
		let edges: HashSet<_> = [
			WeightedEdge::new(1, 2, 3),
			WeightedEdge::new(2, 1, 4),
			WeightedEdge::new(2, 3, 4),
		]
		.into_iter()
		.collect();
		assert_eq!(edges.len(), 2);
	}

	#[test]
	fn is_endpoint() {
		let edge = WeightedEdge::new("x", "y", 0.5);
		assert!(edge.is_endpoint(&"x"));
		assert!(edge.is_endpoint(&"y"));
		assert!(!edge.is_endpoint(&"z"));
	}

	#[test]
	fn display() {
		let edge = WeightedEdge::new(1, 2, 2.5);
		assert_eq!(edge.to_string(), "1 ==> 2 (distance 2.5)");
	}
}
