//! `rn-output` — console and CSV reporting for roadnet simulations.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`text`]     | `write_adjacency`, `write_vehicles`, `write_route`, `TextStatusWriter` |
//! | [`csv`]      | `CsvStatusWriter`                                           |
//! | [`observer`] | `StatusObserver<W>`, `Tee`                                  |
//! | [`row`]      | `StatusRow`, `RowState`                                     |
//! | [`writer`]   | `StatusWriter` trait                                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! let writer = TextStatusWriter::new(std::io::stdout().lock());
//! let mut obs = StatusObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use self::csv::CsvStatusWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{StatusObserver, Tee};
pub use row::{RowState, StatusRow};
pub use text::{road_label, write_adjacency, write_route, write_vehicles, TextStatusWriter};
pub use writer::StatusWriter;
