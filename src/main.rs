use anyhow::Result;
use clap::Parser;
use devinit::{Config, init};

#[derive(Parser)]
#[command(name = "devinit", disable_version_flag = true)]
#[command(about = "Add eslint, editorconfig, vscode and git setup to the current project")]
struct Cli {
    /// Print version
    #[arg(short = 'v', long)]
    version: bool,

    /// Also add .prettierrc and the prettier dev dependency
    #[arg(long)]
    prettier: bool,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cfg = Config::from_env(cli.prettier)?;
    init::run(&cfg)
}
