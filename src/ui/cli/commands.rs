// Mon Oct 19 2026 - Alex

pub use super::args::Command;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context};

use super::args::{DecodeArgs, InspectArgs, LocationsArgs, PlayerSelection};
use crate::config::Config;
use crate::dispatch::{DispatchReport, Dispatcher, ObservationReader};
use crate::memory::Address;
use crate::output::{LocationsWriter, SnapshotFormatter};
use crate::registry::AddressRegistry;
use crate::state::StateTree;
use crate::utils::logging::scoped_timer;

pub trait CommandExecutor {
    fn execute(&self, config: &Config) -> anyhow::Result<()>;
    fn name(&self) -> &'static str;
}

impl Command {
    pub fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Command::Locations(args) => args,
            Command::Decode(args) => args,
            Command::Inspect(args) => args,
        }
    }
}

fn build_registry(config: &Config, selection: &PlayerSelection) -> anyhow::Result<AddressRegistry> {
    let config = match &selection.players {
        Some(players) => config.clone().with_player_ids(players.clone()),
        None => config.clone(),
    };
    config.validate()?;
    AddressRegistry::from_config(&config).context("failed to build address registry")
}

impl CommandExecutor for LocationsArgs {
    fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let registry = build_registry(config, &self.selection)?;
        let output = self.output.as_deref().unwrap_or(config.locations_file.as_path());

        if output == Path::new("-") {
            let stdout = io::stdout();
            LocationsWriter::write_to(&registry, &mut stdout.lock())?;
        } else {
            LocationsWriter::write_file(&registry, output)
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "locations"
    }
}

impl CommandExecutor for DecodeArgs {
    fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let dispatcher = Dispatcher::new(build_registry(config, &self.selection)?);
        let mut tree = StateTree::new();
        let _timer = scoped_timer("decode");

        let report = match &self.input {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
                self.run(&dispatcher, &mut tree, ObservationReader::new(BufReader::new(file)))?
            }
            None => self.run(&dispatcher, &mut tree, ObservationReader::new(io::stdin().lock()))?,
        };

        log::info!("{}", SnapshotFormatter::summary(&report));
        SnapshotFormatter::new()
            .with_pretty(self.pretty)
            .write_to(&tree, &mut io::stdout().lock())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "decode"
    }
}

impl DecodeArgs {
    fn run<R: io::BufRead>(
        &self,
        dispatcher: &Dispatcher,
        tree: &mut StateTree,
        reader: ObservationReader<R>,
    ) -> anyhow::Result<DispatchReport> {
        let mut report = DispatchReport::default();

        for observation in reader {
            let observation = match observation {
                Ok(observation) => observation,
                Err(err) if !self.strict => {
                    log::warn!("{}", err);
                    report.failed += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if self.strict {
                dispatcher.handle_observation(tree, &observation)?;
                report.applied += 1;
            } else {
                let batch = dispatcher.handle_all(tree, [observation]);
                report.applied += batch.applied;
                report.unknown += batch.unknown;
                report.failed += batch.failed;
            }
        }
        Ok(report)
    }
}

impl CommandExecutor for InspectArgs {
    fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let registry = build_registry(config, &self.selection)?;
        let address = Address::parse(&self.address)?;

        let Some(binding) = registry.get(&address) else {
            bail!("address {} is not registered", address);
        };

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", address)?;
        for handler in binding.handlers() {
            writeln!(stdout, "  {}", handler)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "inspect"
    }
}
