pub mod orientation;
pub mod vector;
