//! create-robtic-app - Project scaffolding for RobTic Discord bots

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use robtic_core::{package_manager, CreateOptions, Detect, SystemRunner, TemplateKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-robtic-app")]
#[command(about = "Scaffold a new RobTic Discord bot project")]
#[command(version)]
pub struct Args {
    /// Name of the project directory ("." targets the current directory)
    #[arg(default_value = "my-app")]
    pub name: String,

    /// Project template
    #[arg(short, long, value_enum, default_value_t = TemplateKind::Js)]
    pub template: TemplateKind,

    /// Package manager resolution strategy
    #[arg(long, value_enum, default_value_t = Detect::UserAgent)]
    pub detect: Detect,

    /// Local directory to use for templates instead of the bundled ones
    /// (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let package_manager = package_manager::detect(args.detect)?;
    let cwd = std::env::current_dir()?;

    let options = CreateOptions {
        name: args.name,
        kind: args.template,
        cwd,
        template_dir: args.template_dir,
        package_manager,
    };

    robtic_core::run(&options, &mut SystemRunner)?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("{}", format!("❌ {err}").red());
        std::process::exit(1);
    }
}
