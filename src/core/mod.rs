pub mod collect;
pub mod decode;
pub mod engine;
pub mod matrix;
pub mod pipeline;
pub mod solve;

pub use crate::domain::model::{InputDocument, Point, Recovery, ShareRecord};
pub use crate::domain::ports::{Pipeline, ShareSource};
pub use crate::utils::error::Result;
