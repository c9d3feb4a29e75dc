use crate::engine::{self, DateAccumulator, Matched, OffsetAccumulator, Stop};
use crate::error::ParseError;
use crate::tokenize::tokenize;
use chrono::{DateTime, Local, TimeZone};
use std::time::Duration;

/// Parsing context.
///
/// This holds the instant relative expressions ("tomorrow", "3 weeks ago")
/// are resolved against. Absolute dates are built in its time zone.
#[derive(Debug, Clone)]
pub struct Context<Tz: TimeZone = Local> {
    /// Reference instant ("now").
    pub reference_time: DateTime<Tz>,
}

impl<Tz: TimeZone> Context<Tz> {
    pub fn new(reference_time: DateTime<Tz>) -> Self {
        Self { reference_time }
    }
}

impl Default for Context<Local> {
    fn default() -> Self {
        Self { reference_time: Local::now() }
    }
}

/// Options that affect classification.
#[derive(Debug, Clone)]
pub struct Options {
    /// Consecutive positions matching neither grammar before the scan gives up.
    pub failure_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { failure_limit: 4 }
    }
}

/// A resolved date and how many tokens explain it.
#[derive(Debug, Clone)]
pub struct ParseResult<Tz: TimeZone> {
    /// Tokens explained by the grammar that explained the most.
    pub matched_size: usize,
    pub date: DateTime<Tz>,
}

/// One cursor position of the classification pass, rendered for display.
#[derive(Debug, Clone)]
pub struct StepSummary {
    pub position: usize,
    pub token: String,
    /// Offset-grammar hit, e.g. `Count(3) x1`.
    pub offset: Option<String>,
    /// Date-grammar hit, e.g. `MonthDay(1) x1`.
    pub date: Option<String>,
}

/// Additional details returned by [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Normalized tokens the engine saw.
    pub tokens: Vec<String>,
    pub steps: Vec<StepSummary>,
    /// True when the scan stopped on repeated misses rather than at the end.
    pub stopped_early: bool,
    pub offset: OffsetAccumulator,
    pub date: DateAccumulator,
    /// Whether the date accumulator was allowed to set the origin.
    pub date_valid: bool,
    /// Offset error ignored because an absolute date already resolved.
    pub offset_error: Option<ParseError>,
    /// Classifier kinds that fired during the pass.
    pub matched: Matched,
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent in the classification pass.
    pub build: Duration,
    /// Time spent compiling the accumulators.
    pub compile: Duration,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose<Tz: TimeZone> {
    pub text: String,
    pub result: Result<ParseResult<Tz>, ParseError>,
    pub details: ParseDetails,
}

/// Parse `text` relative to the current local time and return the date.
///
/// # Example
/// ```
/// assert!(datewords::parse("day after tomorrow").is_ok());
/// assert!(datewords::parse("the and of").is_err());
/// ```
pub fn parse(text: &str) -> Result<DateTime<Local>, ParseError> {
    parse_with(text, &Context::<Local>::default(), &Options::default()).map(|res| res.date)
}

/// Parse `text` with an explicit `context`/`options`.
///
/// Use this when you want deterministic parsing by supplying a reference time.
pub fn parse_with<Tz: TimeZone>(text: &str, context: &Context<Tz>, options: &Options) -> Result<ParseResult<Tz>, ParseError> {
    parse_tokens(&tokenize(text), context, options)
}

/// Parse already normalized tokens (see [`tokenize`](crate::tokenize)).
pub fn parse_tokens<Tz: TimeZone>(
    tokens: &[String],
    context: &Context<Tz>,
    options: &Options,
) -> Result<ParseResult<Tz>, ParseError> {
    engine::run(tokens, context, options).outcome
}

/// Parse `text` and return the outcome together with a trace of how it was
/// reached. The default [`parse_with`] path discards the trace.
pub fn parse_verbose_with<Tz: TimeZone>(text: &str, context: &Context<Tz>, options: &Options) -> ParseResultVerbose<Tz> {
    let tokens = tokenize(text);
    let run = engine::run(&tokens, context, options);

    let steps = run
        .metrics
        .steps
        .iter()
        .map(|step| StepSummary {
            position: step.position,
            token: step.token.clone(),
            offset: step.offset.map(|(update, n)| format!("{:?} x{}", update, n)),
            date: step.date.map(|(update, n)| format!("{:?} x{}", update, n)),
        })
        .collect();

    let details = ParseDetails {
        tokens,
        steps,
        stopped_early: run.metrics.stop == Stop::FailureLimit,
        offset: run.offset,
        date: run.date,
        date_valid: run.date.is_valid(),
        offset_error: run.offset_error,
        matched: run.metrics.matched(),
        total: run.metrics.total,
        build: run.metrics.build,
        compile: run.metrics.compile,
    };

    ParseResultVerbose { text: text.to_string(), result: run.outcome, details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn reference_context() -> Context<Utc> {
        Context::new(Utc.with_ymd_and_hms(2013, 2, 12, 4, 30, 0).unwrap())
    }

    #[test]
    fn parse_with_returns_matched_size() {
        let res = parse_with("2 weeks from today", &reference_context(), &Options::default()).unwrap();

        assert_eq!(res.matched_size, 3);
        assert_eq!(res.date, Utc.with_ymd_and_hms(2013, 2, 26, 4, 30, 0).unwrap());
    }

    #[test]
    fn parse_tokens_skips_the_tokenizer() {
        let tokens = vec!["next".to_string(), "june".to_string()];
        let res = parse_tokens(&tokens, &reference_context(), &Options::default()).unwrap();

        assert_eq!(res.date, Utc.with_ymd_and_hms(2014, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parse_with_carries_the_reference_zone() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let ctx = Context::new(tz.with_ymd_and_hms(2013, 2, 12, 23, 0, 0).unwrap());
        let res = parse_with("june 2nd", &ctx, &Options::default()).unwrap();

        assert_eq!(res.date, tz.with_ymd_and_hms(2013, 6, 2, 0, 0, 0).unwrap());
        assert_eq!(res.date.offset(), &tz);
    }

    #[test]
    fn parse_verbose_reports_the_pass() {
        let res = parse_verbose_with("Next Tuesday!", &reference_context(), &Options::default());

        assert_eq!(res.text, "Next Tuesday!");
        assert_eq!(res.details.tokens, vec!["next", "tuesday"]);
        assert_eq!(res.details.steps.len(), 2);
        assert_eq!(res.details.steps[0].offset.as_deref(), Some("Direction(Right) x1"));
        assert_eq!(res.details.steps[0].date, None);
        assert!(!res.details.date_valid);
        assert!(!res.details.stopped_early);
        assert_eq!(res.details.matched, Matched::DIRECTION | Matched::WEEKDAY);
        assert!(res.details.build <= res.details.total);
        assert_eq!(res.result.unwrap().date, Utc.with_ymd_and_hms(2013, 2, 19, 4, 30, 0).unwrap());
    }

    #[test]
    fn parse_verbose_exposes_the_swallowed_offset_error() {
        let res = parse_verbose_with("june 2 friday month", &reference_context(), &Options::default());

        assert!(res.details.date_valid);
        assert!(matches!(res.details.offset_error, Some(ParseError::OffsetCompileFailed(_))));

        let result = res.result.unwrap();
        assert_eq!(result.matched_size, 4);
        assert_eq!(result.date, Utc.with_ymd_and_hms(2013, 6, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn parse_uses_local_now() {
        let today = Local::now().date_naive();
        let date = parse("today").unwrap();
        // Allow for the clock crossing midnight between the two reads.
        assert!((date.date_naive() - today).num_days().abs() <= 1);
    }
}
