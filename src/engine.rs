//! Classification and compilation engine.
//!
//! ## How the parts work together
//!
//! ```text
//! tokens ── Cursor ── build (builder.rs)
//!                       - both grammars at every position
//!                       - fold hits into OffsetAccumulator / DateAccumulator
//!                       - stop on exhaustion or repeated double misses
//!                               │
//!                               v
//!                     resolve (resolve.rs)
//!                       - DateAccumulator::compile   (date.rs)   -> origin
//!                       - OffsetAccumulator::compile (offset.rs) -> final date
//!                               │
//!                               v
//!                         ParseResult
//! ```
//!
//! ## Responsibilities by module
//!
//! - `builder.rs`: the single pass and the per-grammar classifier order.
//! - `offset.rs` / `date.rs`: the two accumulators and their compilers.
//! - `shift.rs`: calendar arithmetic shared by both compilers.
//! - `resolve.rs`: merges the two compiled results.
//! - `metrics.rs`: per-step trace and timings for verbose runs.
//!
//! ## Debugging
//!
//! Every step and the resolution outcome are traced through `tracing` at
//! `trace`/`debug` level.

#[path = "engine/builder.rs"]
mod builder;
#[path = "engine/date.rs"]
mod date;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/offset.rs"]
mod offset;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/shift.rs"]
mod shift;

use std::time::Instant;

use chrono::TimeZone;

use crate::api::{Context, Options, ParseResult};
use crate::error::ParseError;

pub use date::DateAccumulator;
pub use metrics::{Matched, RunMetrics, Stop};
pub use offset::OffsetAccumulator;

/// Everything one parse produced.
#[derive(Debug, Clone)]
pub(crate) struct RunResult<Tz: TimeZone> {
    pub outcome: Result<ParseResult<Tz>, ParseError>,
    pub offset: OffsetAccumulator,
    pub date: DateAccumulator,
    /// Offset error ignored because an absolute date already resolved.
    pub offset_error: Option<ParseError>,
    pub metrics: RunMetrics,
}

/// Build both accumulators over `tokens` and resolve them against the
/// context's reference time.
pub(crate) fn run<Tz: TimeZone>(tokens: &[String], context: &Context<Tz>, options: &Options) -> RunResult<Tz> {
    let started = Instant::now();
    let (mut contexts, built) = builder::build(tokens, options);
    let build = started.elapsed();

    let compile_started = Instant::now();
    let resolved = built.and_then(|()| resolve::resolve(&contexts, &context.reference_time));
    let compile = compile_started.elapsed();

    let (outcome, offset_error) = match resolved {
        Ok((result, swallowed)) => (Ok(result), swallowed),
        Err(err) => (Err(err), None),
    };

    let metrics = RunMetrics {
        total: started.elapsed(),
        build,
        compile,
        steps: std::mem::take(&mut contexts.steps),
        stop: contexts.stop,
    };

    RunResult { outcome, offset: contexts.offset, date: contexts.date, offset_error, metrics }
}
