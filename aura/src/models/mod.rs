mod analysis;
mod emotion;

pub use analysis::*;
pub use emotion::*;
