pub mod height;
pub mod info;
pub mod parse;
