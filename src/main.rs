use std::fs;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use deck_guard::augment::Augmenter;
use deck_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, ConfigArgs, InitArgs};
use deck_guard::config::{
    Config, ConfigLoader, FileConfigLoader, RuleSet, validate_config_semantics,
};
use deck_guard::output::{
    ColorMode, ConsoleFormatter, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter,
    TextFormatter, print_error_full, print_warning,
};
use deck_guard::pipeline::run_qa;
use deck_guard::report::Report;
use deck_guard::source::JsonSlideSource;
use deck_guard::{DeckGuardError, EXIT_COMPLIANCE_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("deck_guard={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

fn report_error(err: &DeckGuardError) -> i32 {
    ErrorOutput::stderr().print_deck_error(err);
    EXIT_CONFIG_ERROR
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    run_check_impl(args, cli).unwrap_or_else(|e| report_error(&e))
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> deck_guard::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 2. Build the rule set and augmentation pass; fatal if malformed
    let rules = RuleSet::from_config(&config)?;
    let augmenter = Augmenter::from_config(&config.augment);

    // 3. Run the checks
    let source = JsonSlideSource::from_arg(&args.input);
    let report = run_qa(&source, &rules, &augmenter)?;

    // 4. Format and write output
    let output = format_output(args.format, &report, color_choice_to_mode(cli.color))?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(compliance_exit_code(&report, args))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> deck_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(endpoint) = &args.endpoint {
        config.augment.endpoint = Some(endpoint.clone());
    }

    if let Some(timeout_secs) = args.timeout_secs {
        config.augment.timeout_secs = timeout_secs;
    }

    if args.no_augment {
        config.augment.endpoint = None;
    }
}

fn format_output(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
) -> deck_guard::Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter::new(color_mode).format(report),
        OutputFormat::Text => TextFormatter::now().format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> deck_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        if !quiet {
            eprintln!("Report written to {}", path.display());
        }
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn compliance_exit_code(report: &Report, args: &CheckArgs) -> i32 {
    let below_min = args.min_score.is_some_and(|min| report.score < min);
    if report.has_errors() || (args.strict && report.has_warnings()) || below_min {
        EXIT_COMPLIANCE_FAILED
    } else {
        EXIT_SUCCESS
    }
}

fn run_init(args: &InitArgs) -> i32 {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        print_error_full(
            "Init",
            &format!("Configuration file already exists: {}", output_path.display()),
            None,
            Some("Use --force to overwrite"),
        );
        return EXIT_CONFIG_ERROR;
    }
    if output_path.exists() {
        print_warning(&format!("Overwriting {}", output_path.display()));
    }

    match fs::write(output_path, generate_config_template()) {
        Ok(()) => {
            println!("Created configuration file: {}", output_path.display());
            EXIT_SUCCESS
        }
        Err(e) => report_error(&DeckGuardError::Io(e)),
    }
}

fn generate_config_template() -> String {
    r#"# deck-guard configuration file

[fonts]
# Approved typefaces (case-insensitive substring match)
allowed = ["Arial", "Georgia"]

[colors]
# 6-digit hex codes; black (000000) is always accepted
primary = ["002D72", "D0021B", "FFFFFF"]
acceptable = ["5B6770", "A7A8AA", "E6E7E8", "F2F2F2"]

[layout]
# Point sizes
min_title_font_size = 20
max_body_font_size = 18
min_body_font_size = 10
# Lines of text per shape
max_bullets_per_slide = 6

[augment]
# Remote review service; leave unset to run local checks only
# endpoint = "http://localhost:8000/qa"
timeout_secs = 30
"#
    .to_string()
}

fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config } => run_config_show(config.as_deref(), cli.no_config),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    let result = FileConfigLoader::new()
        .load_from_path(config_path)
        .and_then(|config| RuleSet::from_config(&config));
    match result {
        Ok(_) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

fn run_config_show(config_path: Option<&Path>, no_config: bool) -> i32 {
    let result = load_config(config_path, no_config).and_then(|config| {
        toml::to_string_pretty(&config)
            .map_err(|e| DeckGuardError::Config(format!("Failed to serialize config: {e}")))
    });
    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
