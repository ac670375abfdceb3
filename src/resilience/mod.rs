pub mod debounce;
pub mod sequence;
