//! Optional diagnostics hook for the encoder and decoder.
//!
//! Nothing in the engine prints. Callers that want to observe intermediate
//! results (the computed selector, each converted argument) pass a
//! [`TraceHook`] explicitly; [`LogTrace`] forwards everything to `tracing`.

use crate::selector::Selector;
use crate::types::TypeDescriptor;

/// A single observable step of an encode or decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// Selector computed from the canonical signature.
    SelectorComputed {
        signature: &'a str,
        selector: Selector,
    },
    /// Literal argument converted into a typed value.
    ArgumentConverted {
        index: usize,
        ty: TypeDescriptor,
        literal: &'a str,
    },
    /// Final call data assembled.
    CallEncoded { signature: &'a str, len: usize },
    /// Return data decoded into `count` values.
    ReturnDecoded { bytes: usize, count: usize },
}

/// Receives trace events from the encoder/decoder.
pub trait TraceHook: Send + Sync {
    fn on_event(&self, event: &TraceEvent<'_>);
}

/// Blanket impl so closures can be used as trace hooks.
impl<F: Fn(&TraceEvent<'_>) + Send + Sync> TraceHook for F {
    fn on_event(&self, event: &TraceEvent<'_>) {
        self(event)
    }
}

/// Hook that emits each event as a `tracing` debug record.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceHook for LogTrace {
    fn on_event(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::SelectorComputed {
                signature,
                selector,
            } => tracing::debug!(%signature, %selector, "method id"),
            TraceEvent::ArgumentConverted { index, ty, literal } => {
                tracing::debug!(index, %ty, literal, "argument converted")
            }
            TraceEvent::CallEncoded { signature, len } => {
                tracing::debug!(%signature, len, "call data encoded")
            }
            TraceEvent::ReturnDecoded { bytes, count } => {
                tracing::debug!(bytes, count, "return data decoded")
            }
        }
    }
}
