use {clap::Parser, clsx_lsp::Arguments, std::process};

#[tokio::main]
async fn main() {
  env_logger::init();

  if let Err(error) = Arguments::parse().run().await {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
