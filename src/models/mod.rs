pub mod history;

pub use history::{HistoryEntry, HistoryRecord, NewHistoryRecord, Operation};
