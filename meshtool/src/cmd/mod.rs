pub mod tds;
