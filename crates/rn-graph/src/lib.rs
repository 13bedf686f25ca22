//! `rn-graph` — road graph, shortest-path routing, and road CSV loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`graph`]  | `RoadGraph`, `Road`, `Neighbors`                           |
//! | [`router`] | `Router` trait, `Route`, `ScanDijkstra`, `ShortestPathTree`|
//! | [`loader`] | `load_roads_csv`, `load_roads_reader`                      |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the intersection key → index map.             |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `rn-core` types.    |

pub mod error;
pub mod graph;
pub mod loader;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use graph::{Neighbors, Road, RoadGraph};
pub use loader::{load_roads_csv, load_roads_reader};
pub use router::{Route, Router, ScanDijkstra, ShortestPathTree};
