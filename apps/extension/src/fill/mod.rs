//! Form-fill engine: taxonomy → classifier → mutator, triggered by a
//! cross-context message in the content-script context.

pub mod classify;
pub mod dispatch;
pub mod dom;
pub mod mutate;
pub mod taxonomy;
pub mod values;
