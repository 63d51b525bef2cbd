pub mod category;
pub mod entry;
pub mod key;
pub mod output_row;

pub use category::{TRAVEL_TARIFF, WORK_TARIFF};
pub use entry::Entry;
pub use key::AggregateKey;
pub use output_row::OutputRow;
