pub mod header;
pub mod listing;

pub use header::HeaderWriter;
pub use listing::{parse_listing, ListingWriter};
