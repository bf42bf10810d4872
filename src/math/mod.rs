pub mod erfc;
pub mod erfinv;
pub mod normal;
