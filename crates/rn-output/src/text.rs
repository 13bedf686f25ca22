//! Plain-text console output: the road map, vehicle list, route summaries and
//! movement reports.

use std::io::{self, Write};

use rn_fleet::Vehicle;
use rn_graph::{GraphError, GraphResult, RoadGraph, Route};

use crate::writer::StatusWriter;
use crate::{OutputResult, RowState, StatusRow};

/// Print one line per intersection, in first-seen order, listing its roads
/// most-recently-added first:
///
/// ```text
/// Intersection A: -> (To: B, Travel Time: 4 mins) -> (To: C, Travel Time: 2 mins)
/// ```
pub fn write_adjacency<W: Write>(out: &mut W, graph: &RoadGraph) -> io::Result<()> {
    for (key, roads) in graph.adjacency() {
        write!(out, "Intersection {key}: ")?;
        for (to, travel_time) in roads {
            write!(out, "-> (To: {to}, Travel Time: {travel_time} mins) ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// `Vehicle: V1, Start: A, End: D`, one per line.
pub fn write_vehicles<'a, W, I>(out: &mut W, vehicles: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Vehicle>,
{
    for v in vehicles {
        writeln!(out, "Vehicle: {}, Start: {}, End: {}", v.id(), v.start(), v.end())?;
    }
    Ok(())
}

/// Print a vehicle's routing result followed by a blank line.
pub fn write_route<W: Write>(out: &mut W, vehicle: &Vehicle, route: &GraphResult<Route>) -> io::Result<()> {
    writeln!(out, "For Vehicle ID {}:", vehicle.id())?;
    match route {
        Ok(route) => {
            writeln!(
                out,
                "Shortest distance from {} to {}: {} mins",
                vehicle.start(),
                vehicle.end(),
                route.distance
            )?;
            let path: Vec<&str> = route.path.iter().map(|k| k.as_str()).collect();
            writeln!(out, "Path: {}", path.join(" -> "))?;
        }
        Err(GraphError::Unreachable { from, to }) => {
            writeln!(out, "No path exists from {from} to {to}.")?;
        }
        Err(e) => writeln!(out, "{e}")?,
    }
    writeln!(out)
}

/// Road label used in movement reports: `AB` for single-character keys,
/// `Main->Elm` otherwise.
pub fn road_label(from: &str, to: &str) -> String {
    if from.chars().count() == 1 && to.chars().count() == 1 {
        format!("{from}{to}")
    } else {
        format!("{from}->{to}")
    }
}

/// Writes movement reports in the console format:
///
/// ```text
/// -At 5th second
/// V1 is on road AB (remaining time: 2 seconds)
/// V2 has reached its destination.
/// ```
pub struct TextStatusWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextStatusWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatusWriter for TextStatusWriter<W> {
    fn write_report(&mut self, _tick: u64, elapsed_secs: u64, rows: &[StatusRow]) -> OutputResult<()> {
        writeln!(self.out, "-At {elapsed_secs}th second")?;
        for row in rows {
            let id = &row.vehicle_id;
            match row.state {
                RowState::OnRoad => writeln!(
                    self.out,
                    "{id} is on road {} (remaining time: {} seconds)",
                    road_label(&row.from, &row.to),
                    row.remaining
                )?,
                RowState::Arrived    => writeln!(self.out, "{id} has reached its destination.")?,
                RowState::Unroutable => writeln!(self.out, "{id} cannot reach its destination ({}).", row.reason)?,
                RowState::Waiting    => writeln!(self.out, "{id} is waiting to depart.")?,
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
