use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use clap::CommandFactory;

// cli.rs only depends on clap + clap_complete, both listed as
// build-dependencies, so it compiles into the build script on its own.
#[path = "src/cli.rs"]
mod cli;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = env::var_os("OUT_DIR").ok_or("OUT_DIR not set by Cargo")?;
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    // One man page per visible command, subcommand pages named `fmc-<sub>`.
    let mut queue = vec![cli::Cli::command()];
    while let Some(cmd) = queue.pop() {
        let name = cmd.get_name().to_owned();

        let mut page = Vec::new();
        clap_mangen::Man::new(cmd.clone()).render(&mut page)?;
        fs::write(man_dir.join(format!("{name}.1")), page)?;

        for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
            queue.push(sub.clone().name(format!("{name}-{}", sub.get_name())));
        }
    }

    Ok(())
}
