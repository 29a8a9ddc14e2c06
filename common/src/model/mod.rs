pub mod product;
pub mod raw_row;
