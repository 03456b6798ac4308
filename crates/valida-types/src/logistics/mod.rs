//! Product barcodes and parcel tracking numbers.

mod barcode;
mod tracking;

pub use barcode::Barcode;
pub use tracking::TrackingNumber;
