use chrono::TimeZone;
use datewords::{ParseResultVerbose, StepSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run<Tz: TimeZone>(res: &ParseResultVerbose<Tz>, color: bool)
where
    Tz::Offset: std::fmt::Display,
{
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", res.text.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if details.tokens.is_empty() {
        println!("{}", palette.dim("  (none)"));
    } else {
        println!("  {}", details.tokens.join(" · "));
    }

    println!("\n{}", palette.paint("━━━ Steps ━━━", ansi::GRAY));
    for step in &details.steps {
        println!("  {}", fmt_step(step, &palette));
    }
    if details.stopped_early {
        println!("  {}", palette.paint("stopped: too many unrecognized words in a row", ansi::YELLOW));
    }

    println!("\n{}", palette.paint("━━━ Accumulators ━━━", ansi::GRAY));
    println!("  {} {}", palette.paint("offset:", ansi::BLUE), palette.dim(format!("{:?}", details.offset)));
    let validity = if details.date_valid { palette.paint("valid", ansi::GREEN) } else { palette.dim("unused") };
    println!("  {} {} {}", palette.paint("date:  ", ansi::BLUE), palette.dim(format!("{:?}", details.date)), validity);
    println!("  {} {}", palette.paint("matched:", ansi::BLUE), palette.dim(format!("{:?}", details.matched)));
    if let Some(err) = &details.offset_error {
        println!("  {} {}", palette.paint("offset ignored:", ansi::YELLOW), err);
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match &res.result {
        Ok(result) => println!(
            "  {} {} {}",
            palette.bold(palette.paint(result.date.format("%Y-%m-%d %H:%M:%S %:z").to_string(), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("{} token(s) matched", result.matched_size), ansi::YELLOW),
        ),
        Err(err) => println!("  {}", palette.paint(err.to_string(), ansi::RED)),
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Build: {}  │  Compile: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.build), ansi::CYAN),
        palette.dim(format!("{:?}", details.compile)),
    );
    println!();
}

fn fmt_step(step: &StepSummary, palette: &ansi::Palette) -> String {
    let hit = |value: &Option<String>| match value {
        Some(v) => palette.paint(v, ansi::GREEN),
        None => palette.dim("✗"),
    };

    format!(
        "{} {:<12} {} {}  {} {}",
        palette.paint(format!("[{}]", step.position), ansi::GRAY),
        step.token,
        palette.dim("offset:"),
        hit(&step.offset),
        palette.dim("date:"),
        hit(&step.date),
    )
}
