//! Minimum-weight spanning trees over arbitrary hashable vertices, using
//! Kruskal's algorithm on top of a map-backed disjoint-set forest.

pub mod disjoint_sets;
pub mod geometry;
pub mod mst;
pub mod points;
pub mod weighted_edge;

pub use disjoint_sets::DisjointSets;
pub use mst::{kruskal, kruskal_by, total_weight};
pub use weighted_edge::WeightedEdge;
