use adoc_rx_config::Config;
use adoc_rx_engine::{
    AdmonitionKind, MatchCursor, PassthroughCursor, Pattern, PatternKind, is_escaped_bracket,
    patterns::{admonition, bracket, uri},
};
use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

/// Walk the matches of a markup pattern over a text and print each step.
#[derive(Debug, Parser)]
#[command(name = "adoc-rx", version)]
struct Args {
    /// Library pattern: admonition, pass, uri or escaped-bracket
    #[arg(short, long)]
    pattern: Option<PatternKind>,

    /// Custom pattern source, used instead of a library pattern
    #[arg(long, conflicts_with = "pattern")]
    regex: Option<String>,

    /// Print capture groups for every match
    #[arg(short, long)]
    groups: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!("No config file at {}", Config::config_path().display());
            Config::default()
        }
        Err(e) => {
            log::warn!("Ignoring config: {e}");
            Config::default()
        }
    };

    let source = read_input(args.file.as_ref())?;

    let custom;
    let (pattern, kind) = match &args.regex {
        Some(src) => {
            custom = Pattern::new(src)?;
            (&custom, None)
        }
        None => {
            let kind = resolve_kind(args.pattern, &config)?;
            (kind.pattern(), Some(kind))
        }
    };
    log::debug!(
        "Scanning {} bytes with pattern {} ({})",
        source.len(),
        pattern.name(),
        pattern.as_str()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    walk(
        &mut out,
        pattern,
        kind,
        &source,
        args.groups || config.show_groups,
    )
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Command line beats config; falls back to the passthrough pattern.
fn resolve_kind(arg: Option<PatternKind>, config: &Config) -> Result<PatternKind> {
    if let Some(kind) = arg {
        return Ok(kind);
    }
    match &config.pattern {
        Some(name) => name
            .parse()
            .with_context(|| format!("Invalid pattern in {}", Config::config_path().display())),
        None => Ok(PatternKind::PassInlineMacro),
    }
}

fn walk(
    out: &mut impl Write,
    pattern: &Pattern,
    kind: Option<PatternKind>,
    source: &str,
    show_groups: bool,
) -> Result<()> {
    let mut cur = pattern.cursor(source);
    let mut pass =
        (kind == Some(PatternKind::PassInlineMacro)).then(|| PassthroughCursor::new(source));

    while cur.has_next() {
        let span = cur.span()?;
        writeln!(
            out,
            "#{} {}..{} escaped={}",
            cur.position(),
            span.start,
            span.end,
            cur.is_escaped()?
        )?;
        writeln!(out, "  prefix: {:?}", cur.prefix()?)?;
        writeln!(out, "  match:  {:?}", cur.full_match()?)?;
        if show_groups {
            for n in 1..pattern.group_count() {
                if cur.has_group(n)? {
                    writeln!(out, "  group {n}: {:?}", cur.group(n)?)?;
                }
            }
        }
        describe(out, kind, &cur)?;
        if let Some(pass) = pass.as_mut() {
            if let Some(decoded) = pass.current() {
                writeln!(out, "  decoded: {decoded:?}")?;
            }
            pass.next();
        }
        cur.next();
    }

    writeln!(out, "suffix: {:?}", cur.suffix())?;
    writeln!(out, "{} matches", cur.match_count())?;
    Ok(())
}

/// Extra per-kind detail for the current match.
fn describe(out: &mut impl Write, kind: Option<PatternKind>, cur: &MatchCursor<'_>) -> Result<()> {
    match kind {
        Some(PatternKind::Admonition) => {
            if let Some(k) = AdmonitionKind::from_label(cur.group(admonition::LABEL)?) {
                writeln!(out, "  admonition: {k:?}")?;
            }
        }
        Some(PatternKind::UriSniff) => {
            writeln!(out, "  scheme: {}", cur.group(uri::SCHEME)?)?;
        }
        Some(PatternKind::EscapedBracket) => {
            let escaped = is_escaped_bracket(cur.group(bracket::BACKSLASHES)?);
            writeln!(out, "  literal bracket: {escaped}")?;
        }
        Some(PatternKind::PassInlineMacro) | None => {}
    }
    Ok(())
}
