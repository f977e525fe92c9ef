use anyhow::Result;
use argh::FromArgs;
use concap::{Console, PromptConfig, argh_parser, wrap};

#[derive(FromArgs)]
/// Interactive demo console.
struct Cli {
    #[argh(option, default = "String::from(\">>> \")")]
    /// prompt shown before each line
    prompt: String,

    #[argh(option, default = "String::new()")]
    /// line to run when input is cancelled with Ctrl-C
    interrupt: String,

    #[argh(option, default = "String::from(\"logout\")")]
    /// line to run at end of input
    eof: String,

    #[argh(switch, short = 'V')]
    /// print version and exit
    version: bool,
}

#[derive(FromArgs)]
/// Say hello.
struct HelloArgs {
    #[argh(switch, short = 'f')]
    /// do the operation forcefully
    force: bool,

    #[argh(switch, short = 'M')]
    /// disable color output
    monochrome: bool,
}

fn hello(console: &mut Console, _name: &str, args: HelloArgs) -> Result<()> {
    console.print(&format!(
        "hello (force: {}, monochrome: {})",
        args.force, args.monochrome
    ));
    Ok(())
}

/// `commands [prefix]`: list registered commands, optionally filtered by prefix.
fn commands(console: &mut Console, _name: &str, arg: &str) -> Result<()> {
    let prefix = arg.split_whitespace().next();
    let names: Vec<String> = console.find(prefix).into_iter().collect();
    console.print(&names.join(" "));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli: Cli = argh::from_env();
    if cli.version {
        println!("concap {}", concap::VERSION);
        return Ok(());
    }

    let config = PromptConfig::new()
        .with_prompt(cli.prompt)
        .with_interrupt(cli.interrupt)
        .with_eof(cli.eof);

    let mut console = Console::new();
    console
        .register("hello", wrap(argh_parser::<HelloArgs>(), hello))?
        .register("commands", commands)?;
    console.run(&config)
}
