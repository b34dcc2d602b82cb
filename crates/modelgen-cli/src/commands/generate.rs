use std::env;

use anyhow::{Context, Result};
use modelgen_schema::MySqlSchemaProvider;

use crate::error::GenerateError;
use crate::generator::Generator;
use crate::logger::{ConsoleLogger, Logger};
use crate::options::{DATABASE_URL_ENV, GenerateArgs, GenerationOptions};
use crate::utils::{init_tracing, load_config};

pub async fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let logger = ConsoleLogger;
    logger.comment("Starting Model Generate Command");

    let config = load_config(&args.config)?;
    let project_root = env::current_dir().context("resolve project root")?;
    let options = GenerationOptions::resolve(&args, &config, &project_root)?;
    init_tracing(options.debug);

    let Some(selector) = options.selector.clone() else {
        return Err(GenerateError::NoTables.into());
    };

    let url = options.database_url(&config, env::var(DATABASE_URL_ENV).ok())?;
    let provider = MySqlSchemaProvider::connect(&url).await?;

    let report = Generator::new(&provider, &logger, &options)
        .run(&selector)
        .await?;
    tracing::debug!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "generate finished"
    );

    logger.info("Complete");
    Ok(())
}
