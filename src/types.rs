use alloc::vec::Vec;

pub type Matrix = nalgebra::DMatrix<f64>;
pub type NormVector = Vec<f64>;
