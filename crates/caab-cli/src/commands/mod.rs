//! Command implementations.

pub mod consistency;
pub mod entities;
pub mod evidence;
pub mod latest;

pub use self::consistency::{execute_consistency, run_consistency};
pub use self::entities::{execute_entities, run_entities};
pub use self::evidence::{
    execute_evidence_provided, execute_evidence_required, run_evidence_provided,
    run_evidence_required,
};
pub use self::latest::{execute_latest, run_latest};
