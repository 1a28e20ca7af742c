mod bfs;

pub use bfs::shortest_hops;
