//! Minimum-weight spanning trees via Kruskal's algorithm.

use std::{cmp::Ordering, hash::Hash};

use num_traits::Zero;
use tracing::{debug, instrument, trace};

use crate::{disjoint_sets::DisjointSets, weighted_edge::WeightedEdge};

/// Finds a minimum-weight spanning tree of the graph formed by `edges`, or a
/// minimum-weight spanning forest if the graph is disconnected.
///
/// `hint` is the number of vertices in the graph. When present (and nonzero)
/// the search stops as soon as `hint - 1` edges have been accepted, since a
/// tree over that many vertices can hold no more. A hint that does not match
/// the real vertex count is not detected and changes the size of the result.
///
/// Edges are returned in the order they were accepted: ascending weight, with
/// edges of equal weight kept in their input order.
pub fn kruskal<V, W>(
	edges: Vec<WeightedEdge<V, W>>,
	hint: Option<usize>,
) -> Vec<WeightedEdge<V, W>>
where
	V: Eq + Hash + Clone,
	W: Ord,
{
	kruskal_by(edges, hint, W::cmp)
}

/// Like [`kruskal`], but orders weights with `compare` instead of [`Ord`].
/// Useful for floating point weights, e.g. with [`f64::total_cmp`].
#[instrument(level = "debug", skip_all, fields(edges = edges.len(), hint = ?hint))]
pub fn kruskal_by<V, W, F>(
	mut edges: Vec<WeightedEdge<V, W>>,
	hint: Option<usize>,
	mut compare: F,
) -> Vec<WeightedEdge<V, W>>
where
	V: Eq + Hash + Clone,
	F: FnMut(&W, &W) -> Ordering,
{
	// Must be a stable sort: ties are broken by input order.
	edges.sort_by(|e1, e2| compare(&e1.weight, &e2.weight));

	// A tree spanning n vertices has exactly n - 1 edges.
	let target = hint.filter(|&n| n != 0).map(|n| n - 1);

	let mut components = DisjointSets::new();
	let mut tree =
		Vec::with_capacity(target.map_or(0, |target| target.min(edges.len())));
	let mut discarded = 0usize;
	for edge in edges {
		// An edge inside a single component would close a cycle.
		if components.connected(&edge.u, &edge.v) {
			discarded += 1;
			continue;
		}
		components.merge(&edge.u, &edge.v);
		tree.push(edge);

		if target == Some(tree.len()) {
			debug!(accepted = tree.len(), "tree is spanning, stopping early");
			break;
		}
	}
	trace!(discarded, vertices = components.len(), "cycle edges discarded");
	debug!(accepted = tree.len(), "finished");
	tree
}

/// The sum of the weights of `edges`.
pub fn total_weight<V, W>(edges: &[WeightedEdge<V, W>]) -> W
where
	W: Zero + Clone,
{
	edges
		.iter()
		.fold(W::zero(), |sum, edge| sum + edge.weight.clone())
}
