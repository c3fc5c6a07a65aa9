pub mod http;
pub mod sorter;
