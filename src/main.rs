use clap::Parser;
use seo_harvest::{Harvest, HarvestConfig, Summary, export, source};
use std::error::Error;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let base = match &args.config {
        Some(path) => HarvestConfig::from_file(path)?,
        None => HarvestConfig::default(),
    };
    let config = args.apply(base);
    config.validate()?;

    let urls = source::collect_urls(config.input_path.as_deref(), &args.urls)?;
    let output_path = config.output_path.clone();

    let start_time = std::time::Instant::now();
    let rows = Harvest::new(urls).with_config(config).run().await?;

    export::export_csv(&output_path, &rows)?;
    println!("Results saved to {}", output_path.display());

    let summary = Summary::from_rows(&rows);
    println!("\n{summary}");
    ::log::info!(
        "Processed {} URL(s) in {:.2} seconds",
        summary.total,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_unwritable_output_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("out.csv");
        let args = Args::parse_from([
            "seo-harvest",
            "--url",
            "mailto:someone@example.com",
            "-o",
            output.to_str().unwrap(),
        ]);

        let err = run(&args).await.unwrap_err();
        assert!(err.to_string().contains("cannot write"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_comment_only_input_writes_header_only_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("urls.txt");
        let output = dir.path().join("out.csv");
        fs::write(&input, "# nothing yet\n\n").unwrap();

        let args = Args::parse_from([
            "seo-harvest",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        run(&args).await.unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("url,title,meta_description,"));
    }
}
