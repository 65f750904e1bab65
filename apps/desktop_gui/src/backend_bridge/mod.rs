//! Bridge between the UI thread and the worker that performs catalog requests.

pub mod commands;
pub mod runtime;
