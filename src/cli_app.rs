use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use clap::Subcommand;
use gc2n64_remapper::{
    DestButton, Mapping, Session, SourceButton, Target, codegen, config::AppConfig, constants,
};
use tracing::{debug, warn};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the mapGamecubeToN64() function
    Generate {
        /// Write the code to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Map one GameCube button to an N64 button (or `None`)
    Set {
        #[arg(value_parser = SourceButton::parse)]
        source: SourceButton,
        dest: String,
    },
    /// Show the current mapping
    Show,
    /// Restore the factory mapping
    Reset,
    /// Unassign every button
    Clear,
    /// List both controllers' buttons and their bits
    Buttons,
    /// Show or change the saved settings
    Config {
        /// Mapping document used when `--mapping` isn't given
        #[arg(long)]
        mapping_file: Option<PathBuf>,
        /// Print the paste instructions after `generate`
        #[arg(long)]
        show_instructions: Option<bool>,
    },
}

/// Runs one command against the mapping document on disk.
pub struct CliApp {
    cfg: AppConfig,
    mapping_path: PathBuf,
}

impl CliApp {
    pub fn new(mapping: Option<PathBuf>) -> Self {
        let cfg = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        });
        let mapping_path = mapping.unwrap_or_else(|| cfg.mapping_file.clone());

        CliApp { cfg, mapping_path }
    }

    pub fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Generate { out } => self.generate(out.as_deref()),
            Command::Set { source, dest } => self.set(source, &dest),
            Command::Show => self.show(),
            Command::Reset => {
                let mut session = self.load_session().unwrap_or_else(|e| {
                    warn!("Discarding unreadable mapping: {e:#}");
                    Session::new()
                });
                session.reset();
                self.save_session(&session)?;
                println!("Restored factory mapping in {}", self.mapping_path.display());
                Ok(())
            }
            Command::Clear => {
                self.save_session(&Session::with_mapping(Mapping::unassigned_all()))?;
                println!("Unassigned every button in {}", self.mapping_path.display());
                Ok(())
            }
            Command::Buttons => {
                print_buttons();
                Ok(())
            }
            Command::Config {
                mapping_file,
                show_instructions,
            } => self.config(mapping_file, show_instructions),
        }
    }

    fn config(&self, mapping_file: Option<PathBuf>, show_instructions: Option<bool>) -> Result<()> {
        let mut cfg = self.cfg.clone();
        if cfg.update(mapping_file, show_instructions) {
            let path = cfg.save().context("failed to save config")?;
            println!("Saved {}", path.display());
        }
        print!("{}", cfg.to_toml()?);
        Ok(())
    }

    fn generate(&self, out: Option<&Path>) -> Result<()> {
        let session = self.load_session()?;

        for (source, name) in codegen::skipped_targets(session.mapping()) {
            eprintln!(
                "Warning: {source} is mapped to unknown N64 button `{name}`, \
                 no code generated for it"
            );
        }

        let code = session.generate();
        match out {
            Some(path) => {
                fs::write(path, &code)
                    .with_context(|| format!("failed to write code to `{}`", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => print!("{code}"),
        }

        if self.cfg.show_instructions {
            eprintln!();
            eprintln!(
                "Instructions: copy the entire function and replace the existing `void {}()` \
                 function in your gamecube.ino file with this newly generated code.",
                constants::FUNCTION_NAME
            );
        }

        Ok(())
    }

    fn set(&self, source: SourceButton, dest: &str) -> Result<()> {
        let target = Target::parse(dest);
        if let Target::Unknown(name) = &target {
            warn!("`{name}` is not an N64 button, {source} will be skipped when generating code");
        }

        let mut session = self.load_session()?;
        session.set(source, target.clone());
        self.save_session(&session)?;

        println!("{source} -> {target}");
        Ok(())
    }

    fn show(&self) -> Result<()> {
        let session = self.load_session()?;

        println!("Mapping: {}", self.mapping_path.display());
        println!("----------------------------------------");
        for (source, target) in session.mapping().entries() {
            println!("GameCube {:<14} -> {}", source.name(), target);
        }
        for (key, value) in session.mapping().extra_entries() {
            println!("(unused) {key:<14} -> {value}");
        }
        Ok(())
    }

    /// Missing mapping file means the factory mapping.
    fn load_session(&self) -> Result<Session> {
        let path = &self.mapping_path;
        let mut session = Session::new();
        if !path.exists() {
            debug!("No mapping at {}, using factory mapping", path.display());
            return Ok(session);
        }

        let file =
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
        session
            .load(BufReader::new(file))
            .with_context(|| format!("failed to load mapping from `{}`", path.display()))?;

        Ok(session)
    }

    fn save_session(&self, session: &Session) -> Result<()> {
        let path = &self.mapping_path;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Written next to the target and renamed over it, so a failed save keeps the old file.
        AtomicFile::new(path, AllowOverwrite)
            .write(|file| session.save(BufWriter::new(file)))
            .with_context(|| format!("failed to save mapping to `{}`", path.display()))?;

        debug!("Saved mapping to {}", path.display());
        Ok(())
    }
}

fn print_buttons() {
    println!("GameCube buttons");
    println!("----------------------------------------");
    for source in SourceButton::all() {
        match (constants::source_bit(source), source.stick_direction()) {
            (Some(bit), _) => println!(
                "{:<14} {}.{} & 0x{:02X}",
                source.name(),
                constants::STATUS_VAR,
                bit.register.field(),
                bit.mask
            ),
            (None, Some(direction)) => {
                let test = constants::stick_test(direction);
                println!(
                    "{:<14} {}.{} {} 0x{:02X}",
                    source.name(),
                    constants::STATUS_VAR,
                    test.field,
                    test.comparison,
                    test.threshold
                );
            }
            (None, None) => println!("{}", source.name()),
        }
    }

    println!();
    println!("N64 buttons");
    println!("----------------------------------------");
    for dest in DestButton::all() {
        let bit = constants::dest_bit(dest);
        println!(
            "{:<14} {}[{}] |= 0x{:02X}",
            dest.name(),
            constants::BUFFER_VAR,
            bit.index,
            bit.mask
        );
    }
    println!("{:<14} (unassigned)", Target::NONE);
}
