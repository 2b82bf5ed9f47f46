use std::{collections::HashMap, hash::Hash};

/// A forest of disjoint sets over an open-ended universe of vertices.
///
/// Each vertex maps to its parent. A vertex that is missing from the map, or
/// that is its own parent, is the root of its set. Vertices only enter the map
/// when they become a root that is merged under another root.
///
/// Merging does not balance by rank or size: the first root is always placed
/// under the second. Path compression alone keeps lookups cheap in practice.
#[derive(Clone, Debug)]
pub struct DisjointSets<V> {
	parents: HashMap<V, V>,
}

impl<V> Default for DisjointSets<V> {
	fn default() -> Self {
		DisjointSets {
			parents: HashMap::new(),
		}
	}
}

impl<V: Eq + Hash + Clone> DisjointSets<V> {
	/// Initializes an empty forest, in which every vertex is a singleton set.
	pub fn new() -> DisjointSets<V> {
		DisjointSets::default()
	}

	/// Finds the representative vertex for the set containing `v`.
	///
	/// Every vertex visited on the way up is re-pointed directly at the root,
	/// so the next lookup along the same path takes a single step.
	pub fn find(&mut self, v: &V) -> V {
		let mut path = Vec::new();
		let mut current = v.clone();
		while let Some(parent) = self.parents.get(&current) {
			if *parent == current {
				break;
			}
			let parent = parent.clone();
			path.push(std::mem::replace(&mut current, parent));
		}
		for vertex in path {
			if let Some(parent) = self.parents.get_mut(&vertex) {
				*parent = current.clone();
			}
		}
		current
	}

	/// Merges the set containing `a` into the set containing `b`.
	///
	/// The root of `a`'s set becomes a child of the root of `b`'s set. If both
	/// are already in the same set, the root is recorded as its own parent.
	pub fn merge(&mut self, a: &V, b: &V) {
		let root_a = self.find(a);
		let root_b = self.find(b);
		self.parents.insert(root_a, root_b);
	}

	/// Whether `a` and `b` are in the same set.
	pub fn connected(&mut self, a: &V, b: &V) -> bool {
		self.find(a) == self.find(b)
	}

	/// The number of vertices that have been recorded in the forest.
	pub fn len(&self) -> usize {
		self.parents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parents.is_empty()
	}
}
