// Root app shell and re-exports for workspace crates used by bins.
pub use data_runtime as data;
pub use drink_core as drink;
pub mod harness;
