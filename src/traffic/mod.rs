// Traffic reconciliation — which source dominates each article's readership.

pub mod error;
pub mod reconcile;
pub mod records;
pub mod table;

pub use error::ReconcileError;
pub use reconcile::{reconcile, DominantSource, ReconciledRow, Reconciliation};
pub use records::{RowRejection, TotalsRecord, TrafficRecord};
pub use table::Table;
