//! Schema tags written into result documents.

/// Prefix shared by every schema tag.
pub const SCHEMA_VERSION: &str = "zapata-v1";

/// Tag of a serialized [`ValueEstimate`](crate::ValueEstimate).
pub const VALUE_ESTIMATE: &str = "zapata-v1-value_estimate";

/// Tag of a serialized [`OptimizationResult`](crate::OptimizationResult).
pub const OPTIMIZATION_RESULT: &str = "zapata-v1-optimization_result";

/// Tag of a circuit template parameter file.
pub const CIRCUIT_TEMPLATE_PARAMS: &str = "zapata-v1-circuit_template_params";

/// Name of the field holding the schema tag.
pub const SCHEMA_FIELD: &str = "schema";

/// Kinds of document that can be decoded from their schema tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    ValueEstimate,
    OptimizationResult,
    CircuitTemplateParams,
}

impl SchemaKind {
    /// Look up a schema tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            VALUE_ESTIMATE => Some(SchemaKind::ValueEstimate),
            OPTIMIZATION_RESULT => Some(SchemaKind::OptimizationResult),
            CIRCUIT_TEMPLATE_PARAMS => Some(SchemaKind::CircuitTemplateParams),
            _ => None,
        }
    }

    /// The schema tag.
    pub fn tag(self) -> &'static str {
        match self {
            SchemaKind::ValueEstimate => VALUE_ESTIMATE,
            SchemaKind::OptimizationResult => OPTIMIZATION_RESULT,
            SchemaKind::CircuitTemplateParams => CIRCUIT_TEMPLATE_PARAMS,
        }
    }
}
