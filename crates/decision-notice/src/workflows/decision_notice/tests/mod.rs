mod common;
mod esa;
mod matrix;
mod pip;
