use clap::Parser;

mod app;
mod cli;
mod config;
mod format;
mod keymap;
mod logging;
mod playerctl;
mod poller;
mod runtime;
mod song;
mod ui;

#[cfg(test)]
mod test_support;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();
    runtime::run(args)
}
