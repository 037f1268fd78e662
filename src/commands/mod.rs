/// Command layer: the single export pipeline.
pub mod export;

pub use export::run;
