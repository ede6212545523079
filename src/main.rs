//! Command-line entry point: loads the corpus once and prints the dashboard
//! for one sentiment selection.

use std::path::PathBuf;

use sentiboard::config::{self, AppConfig};
use sentiboard::corpus::FallbackEncoding;
use sentiboard::{DashboardError, DashboardView, Selection, load_dataset, logging};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }
    render(&options).map_err(|err| err.to_string())
}

fn render(options: &Options) -> Result<(), DashboardError> {
    let mut config = match &options.config_path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    options.apply(&mut config);

    let dataset = load_dataset(&config.corpus.paths(), config.corpus.fallback_encoding)?;
    let selection = if options.selection.is_empty() {
        config.dashboard.default_selection()
    } else {
        Selection::parse(&options.selection)?
    };
    let view = DashboardView::build(&dataset, &selection, &config.dashboard);
    if options.json {
        println!("{}", view.to_json()?);
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    train_text: Option<PathBuf>,
    train_labels: Option<PathBuf>,
    test_text: Option<PathBuf>,
    test_labels: Option<PathBuf>,
    selection: Vec<String>,
    json: bool,
    no_fallback: bool,
}

impl Options {
    /// Command-line values win over the config file.
    fn apply(&self, config: &mut AppConfig) {
        let corpus = &mut config.corpus;
        if let Some(dir) = &self.data_dir {
            corpus.data_dir = Some(dir.clone());
        }
        let overrides = [
            (&self.train_text, &mut corpus.train_text),
            (&self.train_labels, &mut corpus.train_labels),
            (&self.test_text, &mut corpus.test_text),
            (&self.test_labels, &mut corpus.test_labels),
        ];
        for (value, target) in overrides {
            if let Some(path) = value {
                *target = path.clone();
            }
        }
        if self.no_fallback {
            corpus.fallback_encoding = FallbackEncoding::None;
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        match flag {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--json" => options.json = true,
            "--no-fallback" => options.no_fallback = true,
            "--select" => {
                idx += 1;
                options.selection.push(value_for(&args, idx, flag)?);
            }
            "--config" | "--data-dir" | "--train-text" | "--train-labels" | "--test-text"
            | "--test-labels" => {
                idx += 1;
                let path = Some(PathBuf::from(value_for(&args, idx, flag)?));
                match flag {
                    "--config" => options.config_path = path,
                    "--data-dir" => options.data_dir = path,
                    "--train-text" => options.train_text = path,
                    "--train-labels" => options.train_labels = path,
                    "--test-text" => options.test_text = path,
                    _ => options.test_labels = path,
                }
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }
    Ok(Some(options))
}

fn value_for(args: &[String], idx: usize, flag: &str) -> Result<String, String> {
    args.get(idx)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn help_text() -> String {
    [
        "sentiboard",
        "",
        "Prints comment counts, sentiment score and label distributions for a",
        "pre-labeled corpus, filtered by sentiment.",
        "",
        "Usage:",
        "  sentiboard [--data-dir <dir>] [--select <name>]... [--json]",
        "",
        "Options:",
        "  --select <name>         Positivo, Negativo, Neutral or Pregunta (repeatable,",
        "                          comma separated). Defaults to the configured selection.",
        "  --data-dir <dir>        Base directory for relative corpus paths.",
        "  --train-text <path>     Training comments (default thai_nlp/train.txt).",
        "  --train-labels <path>   Training labels (default thai_nlp/train_label.txt).",
        "  --test-text <path>      Test comments (default thai_nlp/test.txt).",
        "  --test-labels <path>    Test labels (default thai_nlp/test_label.txt).",
        "  --config <path>         Settings file (defaults to the app config.toml).",
        "  --no-fallback           Fail on non-UTF-8 files instead of reading Latin-1.",
        "  --json                  Print the dashboard as JSON.",
    ]
    .join("\n")
}
