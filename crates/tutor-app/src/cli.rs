use clap::Parser;

/// Egyptian-dialect language tutor in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tutor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Unit to open, by name or 1-based number.
    #[arg(short = 'u', long)]
    pub unit: Option<String>,

    /// Lesson to open within the unit, by name or 1-based number.
    #[arg(short = 'l', long)]
    pub lesson: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
