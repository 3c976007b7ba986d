pub mod cli;
pub mod config;
pub mod date;
pub mod lookup;
pub mod memo;
pub mod panel;
pub mod render;
pub mod selection;
pub mod snapshot;

use std::ffi::OsString;
use std::io::Write;
use std::rc::Rc;

use clap::Parser;
use tracing::{
  debug,
  info
};

use crate::config::PanelConfig;
use crate::panel::PanelModel;
use crate::render::TextRenderer;
use crate::selection::Selection;

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli = cli::Cli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting daybook CLI"
  );

  let config = PanelConfig::load(
    cli.config.as_deref()
  )?;
  let snapshot =
    snapshot::load_snapshot(&cli.data)?;

  let start = match cli.date.as_deref() {
    | Some(raw) => date::parse_date_key(raw)?,
    | None => config.today()
  };
  let end = cli
    .end
    .as_deref()
    .map(date::parse_date_key)
    .transpose()?;
  debug!(%start, ?end, "resolved selection");

  let selection = Selection::resolve(
    start,
    end,
    &snapshot.holidays
  );
  let lookup = Rc::new(snapshot.days);
  let model = PanelModel::build(
    selection.inputs(&lookup)
  );

  let renderer = TextRenderer::new(
    &config,
    cli.color.enabled()
  );
  let mut out = std::io::stdout().lock();
  renderer.write_panel(&mut out, &model)?;
  out.flush()?;

  info!("done");
  Ok(())
}
