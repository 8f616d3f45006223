use crate::domain::model::{InputDocument, Recovery};
use crate::utils::error::Result;

/// Where the raw share document comes from. The program normally runs once
/// against an embedded document; a file-backed source exists for the CLI.
pub trait ShareSource {
    fn read_input(&self) -> Result<String>;
}

/// The three stages of a recovery run. Everything is synchronous and
/// deterministic; ownership of the data moves forward through the stages.
pub trait Pipeline {
    fn extract(&self) -> Result<InputDocument>;
    fn transform(&self, doc: InputDocument) -> Result<Recovery>;
    fn load(&self, recovery: Recovery) -> Result<String>;
}
