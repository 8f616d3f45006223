use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Sequences extract, transform and load for one run. There is nothing to
/// retry or cancel; every stage is pure computation over owned data.
pub struct RecoveryEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RecoveryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Extracting share document");
        let doc = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", doc.data.len());

        tracing::info!("Reconstructing polynomial");
        let recovery = self.pipeline.transform(doc)?;
        tracing::info!("Solved for {} coefficients", recovery.coefficients.len());

        let report = self.pipeline.load(recovery)?;
        Ok(report)
    }
}
