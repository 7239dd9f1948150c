pub mod loaders;
pub mod location;
pub mod quiz;

pub use loaders::{load_all_batches, load_batch, load_location_store};
pub use location::{Attachment, LocationStore};
pub use quiz::{Quiz, QuizBatch, QuizRecordError};
