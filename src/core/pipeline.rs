use crate::core::collect::collect;
use crate::core::matrix::LinearSystem;
use crate::core::solve::solve;
use crate::domain::model::{InputDocument, Recovery};
use crate::domain::ports::{Pipeline, ShareSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// The standard recovery pipeline: parse the share document, reconstruct the
/// polynomial, render the report.
pub struct RecoveryPipeline<S: ShareSource> {
    source: S,
}

impl<S: ShareSource> RecoveryPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: ShareSource> Pipeline for RecoveryPipeline<S> {
    fn extract(&self) -> Result<InputDocument> {
        let raw = self.source.read_input()?;
        tracing::debug!("Read {} bytes of input", raw.len());

        let doc: InputDocument = serde_json::from_str(&raw)?;
        doc.validate()?;

        tracing::debug!(
            "Parsed document: n={}, k={}, {} records",
            doc.keys.n,
            doc.keys.k,
            doc.data.len()
        );
        Ok(doc)
    }

    fn transform(&self, doc: InputDocument) -> Result<Recovery> {
        let points = collect(&doc)?;
        tracing::debug!("Selected {} points for reconstruction", points.len());

        let mut system = LinearSystem::build(&points);
        let coefficients = solve(&mut system)?;

        Ok(Recovery {
            n: doc.keys.n,
            k: doc.keys.k,
            coefficients,
        })
    }

    fn load(&self, recovery: Recovery) -> Result<String> {
        let report = format!(
            "Total roots provided (n): {}\nMinimum required roots (k): {}\nConstant term (c): {}",
            recovery.n,
            recovery.k,
            recovery.constant_term()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RecoverError;

    struct StaticSource {
        body: &'static str,
    }

    impl ShareSource for StaticSource {
        fn read_input(&self) -> Result<String> {
            Ok(self.body.to_string())
        }
    }

    fn pipeline(body: &'static str) -> RecoveryPipeline<StaticSource> {
        RecoveryPipeline::new(StaticSource { body })
    }

    #[test]
    fn extract_rejects_malformed_json() {
        let err = pipeline("{not json").extract().unwrap_err();
        assert!(matches!(err, RecoverError::MalformedInput(_)));
    }

    #[test]
    fn extract_rejects_n_below_k() {
        let err = pipeline(r#"{"keys":{"n":1,"k":3},"data":{}}"#)
            .extract()
            .unwrap_err();
        assert!(matches!(err, RecoverError::InsufficientPoints { .. }));
    }

    #[test]
    fn full_run_recovers_constant_term() {
        let p = pipeline(
            r#"{
                "keys": { "n": 4, "k": 3 },
                "data": {
                    "1": { "base": "10", "value": "4" },
                    "2": { "base": "2", "value": "111" },
                    "3": { "base": "10", "value": "12" },
                    "6": { "base": "4", "value": "213" }
                }
            }"#,
        );
        let doc = p.extract().unwrap();
        let recovery = p.transform(doc).unwrap();
        let report = p.load(recovery).unwrap();

        assert_eq!(
            report,
            "Total roots provided (n): 4\nMinimum required roots (k): 3\nConstant term (c): 3"
        );
    }
}
