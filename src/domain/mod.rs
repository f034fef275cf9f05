pub mod grayscale;
pub mod image_extension;
pub mod input_source;
pub mod scan_report;
pub mod scanner;

#[cfg(test)]
pub(crate) mod log_capture;

// --- public re-exports ---
pub use scanner::{scan_directory, ScanOptions};
