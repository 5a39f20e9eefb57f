use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_mathup_config::Config;
use markdown_mathup_engine::{Markdown, MathErrorPolicy, RenderOptions, render::escape_html};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Render markdown notes with $$inline$$ and $$$ block math to HTML
#[derive(Parser, Debug)]
#[command(name = "mathup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Markdown file to render; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the token stream as JSON instead of HTML
    #[arg(long)]
    tokens: bool,

    /// Wrap the HTML in a complete page
    #[arg(long, conflicts_with = "tokens")]
    standalone: bool,

    /// What to do when an expression fails to convert
    #[arg(long, value_enum)]
    math_errors: Option<MathErrors>,

    /// Render soft line breaks as <br>
    #[arg(long)]
    breaks: bool,

    /// Self-close void tags (<br />)
    #[arg(long)]
    xhtml: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MathErrors {
    Propagate,
    Marker,
}

impl From<MathErrors> for MathErrorPolicy {
    fn from(value: MathErrors) -> Self {
        match value {
            MathErrors::Propagate => MathErrorPolicy::Propagate,
            MathErrors::Marker => MathErrorPolicy::Marker,
        }
    }
}

impl Cli {
    /// Config values with command-line overrides applied.
    fn render_options(&self, base: &RenderOptions) -> RenderOptions {
        let mut options = base.clone();
        options.breaks |= self.breaks;
        options.xhtml_out |= self.xhtml;
        if let Some(policy) = self.math_errors {
            options.math_errors = policy.into();
        }
        options
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let md = Markdown::with_math(cli.render_options(&config.render))?;

    let src = read_input(cli.input.as_deref())?;
    log::debug!("rendering {} bytes", src.len());

    let out = if cli.tokens {
        let mut json = serde_json::to_string_pretty(&md.parse(&src))?;
        json.push('\n');
        json
    } else {
        let html = md.render(&src)?;
        if cli.standalone {
            standalone_page(&html, config.stylesheet.as_deref())
        } else {
            html
        }
    };

    write_output(cli.output.as_deref(), &out)
}

/// An explicit path must exist; the default location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => {
            log::debug!("config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut src = String::new();
            io::stdin()
                .read_to_string(&mut src)
                .context("failed to read stdin")?;
            Ok(src)
        }
    }
}

fn write_output(path: Option<&Path>, out: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            io::stdout().write_all(out.as_bytes())?;
            Ok(())
        }
    }
}

fn standalone_page(body: &str, stylesheet: Option<&Path>) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(href) = stylesheet {
        page.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(&href.to_string_lossy())
        ));
    }
    page.push_str("</head>\n<body>\n");
    page.push_str(body);
    page.push_str("</body>\n</html>\n");
    page
}
