pub mod geodesy;
pub mod interpolate;

#[cfg(test)]
mod tests;

pub use geodesy::*;
pub use interpolate::*;
