// Article processing — the per-URL pipeline and its concurrent fan-out.
//
// fetch → sanitize → split into words → score, with every failure folded
// into a ProcessingStatus so that callers always get one outcome per URL.

pub mod article;
pub mod bulk;
pub mod fetch;
pub mod models;
pub mod timing;
