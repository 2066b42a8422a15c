use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Wrap {
  #[arg(
    value_name = "PATH",
    help = "Path to the JSX or TSX file to rewrite",
    value_hint = clap::ValueHint::FilePath
  )]
  path: PathBuf,
  #[arg(long, help = "Zero-based line of the cursor")]
  line: u32,
  #[arg(long, help = "Zero-based UTF-16 column of the cursor")]
  character: u32,
  #[arg(
    long,
    value_name = "ALIAS",
    default_value = PACKAGE,
    help = "Name to import clsx under and call it with"
  )]
  import_alias: String,
  #[arg(long, help = "Print the result instead of writing the file")]
  stdout: bool,
}

impl Wrap {
  pub(crate) fn run(self) -> Result {
    let content = fs::read_to_string(&self.path)?;

    let settings = Settings::with_import_alias(&self.import_alias)?;

    match self.rewritten(content, &settings)? {
      Ok(text) if self.stdout => print!("{text}"),
      Ok(text) => fs::write(&self.path, text)?,
      Err(error) => {
        for notification in error.notifications() {
          eprintln!("{notification}");
        }

        process::exit(1);
      }
    }

    Ok(())
  }

  /// The file contents after wrapping the attribute under the cursor, or the
  /// reason it could not be wrapped.
  fn rewritten(
    &self,
    content: String,
    settings: &Settings,
  ) -> Result<Result<String, RewriteError>> {
    let uri = lsp::Url::from_file_path(self.absolute_path()?).map_err(|()| {
      anyhow!("failed to convert `{}` to file url", self.path.display())
    })?;

    let mut document = Document::from(lsp::DidOpenTextDocumentParams {
      text_document: lsp::TextDocumentItem {
        language_id: Language::id_for_path(&self.path),
        text: content,
        uri,
        version: 1,
      },
    });

    let cursor = lsp::Position::new(self.line, self.character);

    Ok(rewrite(Some(&document), cursor, settings).map(|rewrite| {
      let edits = rewrite.text_edits();

      log::debug!("applying {} edits to {}", edits.len(), self.path.display());

      document.apply_edits(&edits);
      document.text()
    }))
  }

  fn absolute_path(&self) -> Result<PathBuf> {
    Ok(if self.path.is_absolute() {
      self.path.clone()
    } else {
      std::env::current_dir()?.join(&self.path)
    })
  }
}
