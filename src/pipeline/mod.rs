// End-to-end flows: load exports, reconcile, classify, rank.

pub mod report;
