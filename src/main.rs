use anyhow::Result;
use clap::Parser;
use mdblog::{
    BlogConfig, BuildContext, CommandConverter, PathLayout,
    cli::{Cli, Commands},
    log,
};
use std::time::Instant;

fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    let config_path = cli.root.join(&cli.config);
    let config = BlogConfig::from_path(&config_path)?;
    config.validate()?;

    match cli.command {
        Commands::Build => {
            let paths = PathLayout::new(&cli.root);
            let converter = CommandConverter::new(config.converter_command.clone());

            let mut context = BuildContext::new(&config, &paths, &converter);
            context.run()?;
        }
    }

    log!("build"; "finished in {:.2}s", start.elapsed().as_secs_f32());
    Ok(())
}
