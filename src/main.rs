use iris_tree::{pipeline, PipelineParams, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let report = pipeline::run(&PipelineParams::default())?;
    println!("{}", report);

    Ok(())
}
