mod common;

mod engine;
mod normalize;
