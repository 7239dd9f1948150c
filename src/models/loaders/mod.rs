pub mod json_loader;

pub use json_loader::{load_all_batches, load_batch, load_location_store, read_json};
