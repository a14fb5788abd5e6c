//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the estimator or demo-data pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, EdaArgs, PredictArgs};
use crate::domain::{EdaConfig, PredictConfig, Profile};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `medicost` binary.
pub fn run() -> Result<(), AppError> {
    // We want `medicost` and `medicost --smoker no` to behave like
    // `medicost tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Predict(args) => handle_predict(args),
        Command::Eda(args) => handle_eda(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = predict_config_from_args(&args);
    let run = pipeline::run_predict(&config)?;

    println!(
        "{}",
        crate::report::format_prediction(&run.profile, &run.estimate)
    );

    if let Some(path) = &config.export {
        crate::io::export::write_prediction_json(path, &run.profile, &run.estimate)?;
    }

    Ok(())
}

fn handle_eda(args: EdaArgs) -> Result<(), AppError> {
    let config = eda_config_from_args(&args);
    let run = pipeline::run_eda(&config)?;

    println!("{}", crate::report::format_demo_summary(&run.data.stats));
    println!(
        "{}",
        crate::plot::render_ascii_histogram(&run.hist, config.plot_width, config.plot_height)
    );
    println!(
        "{}",
        crate::plot::render_ascii_box_pair(
            run.smoker_box.as_ref(),
            run.non_smoker_box.as_ref(),
            config.plot_width,
        )
    );
    if let Some(stats) = &run.smoker_box {
        print!("{}", crate::report::format_box_line("smoker", stats));
    }
    if let Some(stats) = &run.non_smoker_box {
        print!("{}", crate::report::format_box_line("non-smoker", stats));
    }

    if let Some(path) = &config.export {
        crate::io::export::write_demo_csv(path, &run.data.rows)?;
    }

    Ok(())
}

fn handle_tui(args: PredictArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

pub fn predict_config_from_args(args: &PredictArgs) -> PredictConfig {
    PredictConfig {
        profile: Profile {
            age: args.age,
            bmi: args.bmi,
            children: args.children,
            sex: args.sex,
            smoker: args.smoker,
            region: args.region,
        },
        seed: args.seed,
        export: args.export.clone(),
    }
}

pub fn eda_config_from_args(args: &EdaArgs) -> EdaConfig {
    EdaConfig {
        count: args.count,
        seed: args.seed,
        bins: args.bins,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
    }
}

/// Rewrite argv so `medicost` defaults to `medicost tui`.
///
/// Rules:
/// - `medicost`                     -> `medicost tui`
/// - `medicost --smoker no ...`     -> `medicost tui --smoker no ...`
/// - `medicost --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "predict" | "eda" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
