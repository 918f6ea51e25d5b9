pub mod accumulator;
pub mod align;
pub mod audio;
pub mod splitter;
