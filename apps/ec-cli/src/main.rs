use clap::{Parser, Subcommand, ValueEnum};
use ec_app::{
    AppResult, CalculatorMode, HistoryEntry, SessionStore, equation_preview,
    evaluate_or_sentinel, load_batch, polynomial_template, render_linear, render_roots, run_batch,
    solve_linear_rows, solve_polynomial_fields,
};
use ec_core::fixed;
use ec_solver::{Degree, NewtonConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ec-cli")]
#[command(about = "eqcalc CLI - linear systems, polynomial roots and arithmetic", long_about = None)]
struct Cli {
    /// Session directory for settings and history (defaults to $EQCALC_HOME or ./.eqcalc)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a linear system; one comma-separated row per equation (flags go first)
    Linear {
        /// Rows such as `1,1,2` (coefficients then constant)
        #[arg(required = true, allow_hyphen_values = true)]
        rows: Vec<String>,
        /// Solve 4-variable systems by Gaussian elimination
        #[arg(long)]
        eliminate: bool,
        /// Print substitution residuals
        #[arg(long)]
        verify: bool,
    },
    /// Find the roots of a polynomial, highest degree coefficient first
    Poly {
        /// Coefficients; the degree is their count minus one
        #[arg(required = true, allow_negative_numbers = true)]
        coefficients: Vec<String>,
        /// Print f(x) at each real root
        #[arg(long)]
        verify: bool,
    },
    /// Evaluate an arithmetic expression and record it in the history
    Eval {
        /// Expression, e.g. `2*π + √(2)`
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Show, restore or clear the calculation history
    History {
        /// Clear all entries
        #[arg(long, conflicts_with = "restore")]
        clear: bool,
        /// Print the entry at this index and evaluate it again
        #[arg(long)]
        restore: Option<usize>,
    },
    /// Show the most recent history entry
    Undo,
    /// Show or change the theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Show or select the calculator mode
    Mode {
        /// Mode id or label (e.g. `POLY3`, `equations-2var`)
        mode: Option<String>,
    },
    /// Solve every problem in a YAML batch file
    Batch {
        /// Path to the batch YAML file
        path: PathBuf,
        /// Emit JSON reports instead of text
        #[arg(long)]
        json: bool,
        /// Solve 4-variable systems by Gaussian elimination
        #[arg(long)]
        eliminate: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Dark,
    Light,
    Toggle,
}

fn main() {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let store = SessionStore::resolve(cli.state_dir.as_deref())?;

    match cli.command {
        Commands::Linear {
            rows,
            eliminate,
            verify,
        } => cmd_linear(&store, &rows, eliminate, verify),
        Commands::Poly {
            coefficients,
            verify,
        } => cmd_poly(&store, &coefficients, verify),
        Commands::Eval { expression } => cmd_eval(&store, &expression),
        Commands::History { clear, restore } => cmd_history(&store, clear, restore),
        Commands::Undo => cmd_undo(&store),
        Commands::Theme { action } => cmd_theme(&store, action),
        Commands::Mode { mode } => cmd_mode(&store, mode.as_deref()),
        Commands::Batch {
            path,
            json,
            eliminate,
        } => cmd_batch(&store, &path, json, eliminate),
    }
}

fn remember_mode(store: &SessionStore, mode: CalculatorMode) {
    // Losing the last-used mode is not worth failing a solve over.
    if let Err(e) = store.remember_mode(mode) {
        tracing::warn!("could not save settings: {e}");
    }
}

fn cmd_linear(
    store: &SessionStore,
    rows: &[String],
    eliminate: bool,
    verify: bool,
) -> AppResult<()> {
    let config = store.load_settings()?.linear_config_with(eliminate);
    let outcome = solve_linear_rows(rows, &config)?;
    let mode = CalculatorMode::for_system(outcome.system.size());
    println!("{}", mode.title());
    println!("{}", render_linear(&outcome.solution));

    if verify && let Some(residuals) = outcome.residuals() {
        println!("Residuals:");
        for (i, r) in residuals.iter().enumerate() {
            println!("  Eq {}: {:e}", i + 1, r);
        }
    }

    remember_mode(store, mode);
    Ok(())
}

fn cmd_poly(store: &SessionStore, coefficients: &[String], verify: bool) -> AppResult<()> {
    let degree = Degree::try_from(coefficients.len().saturating_sub(1))?;
    let mode = CalculatorMode::for_degree(degree);
    println!("{}: {}", mode.title(), polynomial_template(degree));
    println!("  {}", equation_preview(coefficients));

    let outcome = solve_polynomial_fields(degree, coefficients, &NewtonConfig::default())?;
    println!("{}", render_roots(&outcome.roots));

    if verify {
        for (x, fx) in outcome.residuals() {
            println!("  f({}) = {:e}", fixed(x, 6), fx);
        }
    }

    remember_mode(store, mode);
    Ok(())
}

fn cmd_eval(store: &SessionStore, expression: &str) -> AppResult<()> {
    let result = evaluate_or_sentinel(expression);
    println!("{}", result);
    store.append_history(&HistoryEntry::now(expression, result))?;
    Ok(())
}

fn cmd_history(store: &SessionStore, clear: bool, restore: Option<usize>) -> AppResult<()> {
    if clear {
        store.clear_history()?;
        println!("✓ History cleared");
        return Ok(());
    }

    let history = store.load_history()?;
    if let Some(index) = restore {
        let entry = history.select(index)?;
        println!("{}", entry.expression);
        println!("= {}", evaluate_or_sentinel(&entry.expression));
        return Ok(());
    }

    if history.is_empty() {
        println!("No calculation history");
    } else {
        for (i, entry) in history.entries().iter().enumerate() {
            println!("  [{}] {} = {}", i, entry.expression, entry.result);
        }
    }
    Ok(())
}

fn cmd_undo(store: &SessionStore) -> AppResult<()> {
    let history = store.load_history()?;
    match history.last() {
        Some(entry) => println!("{} = {}", entry.expression, entry.result),
        None => println!("No calculation history"),
    }
    Ok(())
}

fn cmd_theme(store: &SessionStore, action: ThemeAction) -> AppResult<()> {
    let mut settings = store.load_settings()?;
    let changed = match action {
        ThemeAction::Show => false,
        ThemeAction::Dark => !std::mem::replace(&mut settings.dark_theme, true),
        ThemeAction::Light => std::mem::replace(&mut settings.dark_theme, false),
        ThemeAction::Toggle => {
            settings.toggle_theme();
            true
        }
    };
    if changed {
        store.save_settings(&settings)?;
    }
    println!("Theme: {}", settings.theme_name());
    Ok(())
}

fn cmd_mode(store: &SessionStore, mode: Option<&str>) -> AppResult<()> {
    let mut settings = store.load_settings()?;
    if let Some(text) = mode {
        settings.mode = text.parse()?;
        store.save_settings(&settings)?;
    }
    println!("Mode: {} ({})", settings.mode.label(), settings.mode.title());
    if mode.is_none() {
        println!("Available modes:");
        for m in CalculatorMode::ALL {
            println!("  {:<6} {}", m.label(), m.title());
        }
    }
    Ok(())
}

fn cmd_batch(store: &SessionStore, path: &Path, json: bool, eliminate: bool) -> AppResult<()> {
    let config = store.load_settings()?.linear_config_with(eliminate);
    let batch = load_batch(path)?;
    let outcomes = run_batch(&batch, &config, &NewtonConfig::default());

    if json {
        let out = serde_json::to_string_pretty(&outcomes)?;
        println!("{}", out);
        return Ok(());
    }

    for outcome in &outcomes {
        match &outcome.name {
            Some(name) => println!("[{}] {}", outcome.index, name),
            None => println!("[{}]", outcome.index),
        }
        for line in outcome.text.lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}
