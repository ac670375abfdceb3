pub mod commentary;
pub mod current;
pub mod details;
pub mod footer;
pub mod forecast;
pub mod search;

mod shared;
