use clap::Parser;

use gradestat_cli::{commands, logging, output, Cli, GradestatConfig, OutputFormat};

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let outcome = GradestatConfig::resolve_config(cli.config.clone())
        .and_then(|config| commands::run(&cli, &config, std::io::stdin().lock()));
    if let Err(e) = &outcome {
        tracing::error!("{e:#}");
    }

    let rendered = output::render(cli.format, outcome);
    if rendered.failed && cli.format == OutputFormat::Text {
        eprintln!("{}", rendered.body);
    } else {
        println!("{}", rendered.body);
    }
    std::process::exit(rendered.exit_code());
}
