/// CSV export layer.
pub mod errors;
pub mod writer;

pub use errors::ExportError;
pub use writer::write_csv_file;
