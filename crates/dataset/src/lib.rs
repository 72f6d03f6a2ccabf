//! Vend dataset layer
//!
//! Loads the sales order dataset into an in-memory [`Dataset`] handle and
//! serializes filtered views back to the source's delimited layout.
//!
//! The dataset is read exactly once: construct a [`Dataset`] at startup and
//! pass it by reference to the analytics layer. Records are immutable after
//! load, so the handle can be shared read-only across sessions.
//!
//! # Usage
//!
//! ```no_run
//! use vend_dataset::Dataset;
//!
//! let dataset = Dataset::from_path("data/orders.csv")?;
//! println!("{} orders", dataset.len());
//! # Ok::<(), vend_dataset::DatasetError>(())
//! ```

mod error;
mod export;
mod loader;
mod record;


pub use error::{DatasetError, Result};
pub use export::{to_csv_bytes, write_csv};
pub use loader::Dataset;
pub use record::{COLUMNS, OrderRecord};
