//! Spreadsheet input and output

pub mod department;
pub mod master;

pub use department::{SheetRow, build_rows, main_item_records, read_rows, write_rows};
pub use master::{read_master, records_from_rows};
