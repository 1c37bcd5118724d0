use std::io;

use clap::Parser;
use linedb::{Shell, ShellConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive in-memory database shell")]
struct Args {
    /// Prompt written before each command
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Do not print the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Log filter, e.g. `debug` or `linedb::table=debug`
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let config = ShellConfig {
        prompt: args.prompt,
        banner: !args.no_banner,
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    shell.run()
}
