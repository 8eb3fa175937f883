// The changes suggested by this lint usually make the code more cluttered and less clear:
#![allow(clippy::needless_range_loop)]

pub mod errors;
pub mod item_settings;
pub mod playthrough;
pub mod pools;
pub mod randomize;
pub mod settings;
pub mod world;
