pub mod driver;

pub use driver::{EvidenceDriver, FixedDriver};
