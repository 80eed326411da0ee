//! Inbound adapters that translate service results into transport shapes
//! while keeping framework details at the edge.

pub mod envelope;

pub use envelope::ResponseEnvelope;
