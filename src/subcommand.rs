use {super::*, wrap::Wrap};

mod wrap;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
  #[command(about = "Wrap the class attribute under a cursor in a clsx call")]
  Wrap(Wrap),
}

impl Subcommand {
  pub(crate) fn run(self) -> Result {
    match self {
      Self::Wrap(wrap) => wrap.run(),
    }
  }
}
