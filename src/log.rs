//! Target names for `tracing` events, so subscribers can filter by component
//! (e.g. `RUST_LOG=resolution=trace,contraction=debug`).

pub mod targets {
    pub const RESOLUTION: &str = "resolution";
    pub const ENTRENCHMENT: &str = "entrenchment";
    pub const EXPANSION: &str = "expansion";
    pub const CONTRACTION: &str = "contraction";
    pub const REVISION: &str = "revision";
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";
}
