use super::*;

/// The edits produced by wrapping one class attribute, against the document
/// at `version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
  pub import: Option<lsp::TextEdit>,
  pub replacement: lsp::TextEdit,
  pub version: i32,
}

impl Rewrite {
  /// The import insertion, when needed, comes first so it lands above a
  /// replacement starting at the same position.
  pub fn text_edits(self) -> Vec<lsp::TextEdit> {
    self.import.into_iter().chain([self.replacement]).collect()
  }

  /// Pinned to the version the edits were computed against, so the client
  /// rejects them if the document changed in the meantime.
  pub fn workspace_edit(self, uri: lsp::Url) -> lsp::WorkspaceEdit {
    let version = self.version;

    lsp::WorkspaceEdit {
      document_changes: Some(lsp::DocumentChanges::Edits(vec![
        lsp::TextDocumentEdit {
          text_document: lsp::OptionalVersionedTextDocumentIdentifier {
            uri,
            version: Some(version),
          },
          edits: self
            .text_edits()
            .into_iter()
            .map(lsp::OneOf::Left)
            .collect(),
        },
      ])),
      ..Default::default()
    }
  }
}

/// Wraps the class attribute under `cursor` in a call to the configured
/// import alias.
///
/// `document` is `None` when there is nothing to edit. Nothing is modified
/// here; the returned edits are applied by the caller as one transaction.
pub(crate) fn rewrite(
  document: Option<&Document>,
  cursor: lsp::Position,
  settings: &Settings,
) -> Result<Rewrite, RewriteError> {
  let document = document.ok_or(RewriteError::UnsupportedContext)?;

  Language::try_from(document.language_id.as_str())?;

  let line = document
    .line(cursor.line)
    .ok_or(RewriteError::AttributeNotFound)?;

  let attribute =
    ClassAttribute::resolve(&line, cursor.line, cursor.character)?;

  let replacement = ClassAttribute::replacement(
    &document.text_in_range(attribute.range),
    &settings.import_alias,
  )?;

  Ok(Rewrite {
    import: Import::new(&settings.import_alias).edit(&document.text()),
    replacement: lsp::TextEdit {
      range: attribute.range,
      new_text: replacement,
    },
    version: document.version,
  })
}
