mod mapping;
mod node_link;
mod parse;

pub use mapping::{CoarseGroups, FineToCoarse, read_mapping};
pub use node_link::{NodeLinkGraph, WeightedGraph};
pub use parse::parse_graph;
