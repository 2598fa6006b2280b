pub mod long_table;
pub mod monthly_table;
