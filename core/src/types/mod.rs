pub mod id;

pub use id::RecordId;
