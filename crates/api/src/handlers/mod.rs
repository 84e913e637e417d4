pub mod color;
pub mod page;
