pub mod builder;
pub mod index;
pub mod ir;
pub mod matrix;
