use super::*;

#[derive(Debug)]
pub(crate) struct Document {
  pub(crate) content: Rope,
  pub(crate) language_id: String,
  pub(crate) uri: lsp::Url,
  pub(crate) version: i32,
}

impl From<lsp::DidOpenTextDocumentParams> for Document {
  fn from(params: lsp::DidOpenTextDocumentParams) -> Self {
    let lsp::TextDocumentItem {
      language_id,
      text,
      uri,
      version,
    } = params.text_document;

    Self {
      content: Rope::from_str(&text),
      language_id,
      uri,
      version,
    }
  }
}

impl Document {
  pub(crate) fn apply_change(
    &mut self,
    params: lsp::DidChangeTextDocumentParams,
  ) {
    let lsp::DidChangeTextDocumentParams {
      content_changes,
      text_document: lsp::VersionedTextDocumentIdentifier { version, .. },
      ..
    } = params;

    self.version = version;

    for change in content_changes {
      let edit = self.content.build_edit(&change);
      self.content.apply_edit(&edit);
    }
  }

  /// Applies edits whose ranges all refer to the current text, as a single
  /// transaction.
  ///
  /// Edits are applied back to front so earlier ranges stay valid. Edits at
  /// the same position keep their relative order in the output.
  pub(crate) fn apply_edits(&mut self, edits: &[lsp::TextEdit]) {
    let mut changes = edits
      .iter()
      .enumerate()
      .map(|(index, edit)| {
        (
          self.content.lsp_position_to_position(edit.range.start).char,
          index,
          lsp::TextDocumentContentChangeEvent {
            range: Some(edit.range),
            range_length: None,
            text: edit.new_text.clone(),
          },
        )
      })
      .collect::<Vec<_>>();

    changes.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));

    for (_, _, change) in &changes {
      let edit = self.content.build_edit(change);
      self.content.apply_edit(&edit);
    }
  }

  /// The text of a line without its terminator, or `None` past the last line.
  pub(crate) fn line(&self, line: u32) -> Option<String> {
    let line = line as usize;

    if line >= self.content.len_lines() {
      return None;
    }

    Some(self.content.line(line).to_string().strip_line_ending().to_owned())
  }

  pub(crate) fn text(&self) -> String {
    self.content.to_string()
  }

  pub(crate) fn text_in_range(&self, range: lsp::Range) -> String {
    let (start, end) = (
      self.content.lsp_position_to_position(range.start),
      self.content.lsp_position_to_position(range.end),
    );

    self
      .content
      .slice(start.char..end.char.max(start.char))
      .to_string()
  }
}
