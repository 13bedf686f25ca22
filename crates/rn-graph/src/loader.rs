//! CSV road network loader.
//!
//! # CSV format
//!
//! A header row followed by one directed road per line.  Columns are read by
//! position, so the header text is free-form:
//!
//! ```csv
//! Intersection1,Intersection2,TravelTime
//! A,B,4
//! B,C,2
//! A,C,10
//! ```
//!
//! Surrounding whitespace is trimmed.  Every row inserts its endpoints
//! (`from`, then `to`) before adding the road, so intersection order in the
//! resulting graph follows first appearance in the file.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use rn_core::IntersectionId;

use crate::{GraphError, GraphResult, RoadGraph};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoadRecord {
    from:        String,
    to:          String,
    travel_time: i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road network from a CSV file.
pub fn load_roads_csv(path: &Path) -> GraphResult<RoadGraph> {
    let file = std::fs::File::open(path)?;
    load_roads_reader(file)
}

/// Like [`load_roads_csv`] but accepts any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R) -> GraphResult<RoadGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = RoadGraph::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row: RoadRecord = record.deserialize(None)?;

        if row.from.is_empty() || row.to.is_empty() {
            return Err(GraphError::Parse(format!("line {line}: empty intersection key")));
        }
        let travel_time = u32::try_from(row.travel_time).map_err(|_| {
            if row.travel_time < 0 {
                GraphError::NegativeTravelTime {
                    from:  IntersectionId::from(row.from.as_str()),
                    to:    IntersectionId::from(row.to.as_str()),
                    value: row.travel_time,
                }
            } else {
                GraphError::Parse(format!(
                    "line {line}: travel time {} out of range",
                    row.travel_time
                ))
            }
        })?;

        graph.add_intersection(&row.from);
        graph.add_intersection(&row.to);
        graph.add_road(&row.from, &row.to, travel_time);
    }

    debug!(
        "loaded road network: {} intersections, {} roads",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
