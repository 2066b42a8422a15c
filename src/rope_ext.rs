//! Extensions that bridge `ropey::Rope` with Language Server Protocol
//! positions.
//!
//! LSP columns are counted in UTF-16 code units while the rope is indexed by
//! chars, so every edit coming from the editor (or produced by the rewriter)
//! goes through [`RopeExt`] before touching the text.

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Position {
  pub(crate) byte: usize,
  pub(crate) char: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Edit<'a> {
  pub(crate) end_char: usize,
  pub(crate) start_char: usize,
  pub(crate) text: &'a str,
}

pub(crate) trait RopeExt {
  fn apply_edit(&mut self, edit: &Edit);
  fn build_edit<'a>(
    &self,
    change: &'a lsp::TextDocumentContentChangeEvent,
  ) -> Edit<'a>;
  fn byte_to_lsp_position(&self, offset: usize) -> lsp::Position;
  fn line_end_char(&self, line_idx: usize) -> usize;
  fn lsp_position_to_position(&self, position: lsp::Position) -> Position;
}

impl RopeExt for Rope {
  fn apply_edit(&mut self, edit: &Edit) {
    self.remove(edit.start_char..edit.end_char);

    if !edit.text.is_empty() {
      self.insert(edit.start_char, edit.text);
    }
  }

  /// Converts an LSP `textDocument/didChange` event into an [`Edit`] over
  /// char offsets. A change without a range replaces the whole document.
  fn build_edit<'a>(
    &self,
    change: &'a lsp::TextDocumentContentChangeEvent,
  ) -> Edit<'a> {
    let range = change.range.unwrap_or_else(|| lsp::Range {
      start: self.byte_to_lsp_position(0),
      end: self.byte_to_lsp_position(self.len_bytes()),
    });

    let (start, old_end) = (
      self.lsp_position_to_position(range.start),
      self.lsp_position_to_position(range.end),
    );

    Edit {
      end_char: old_end.char.max(start.char),
      start_char: start.char,
      text: change.text.as_str(),
    }
  }

  /// Maps an absolute byte offset into an LSP line/character pair where the
  /// column is expressed in UTF-16 code units.
  fn byte_to_lsp_position(&self, byte_idx: usize) -> lsp::Position {
    let line_idx = self.byte_to_line(byte_idx);

    let line_char_idx = self.line_to_char(line_idx);
    let line_utf16_cu_idx = self.char_to_utf16_cu(line_char_idx);

    let char_idx = self.byte_to_char(byte_idx);
    let char_utf16_cu_idx = self.char_to_utf16_cu(char_idx);

    let character = char_utf16_cu_idx - line_utf16_cu_idx;

    lsp::Position::new(
      u32::try_from(line_idx).unwrap_or(u32::MAX),
      u32::try_from(character).unwrap_or(u32::MAX),
    )
  }

  /// Char offset of the end of a line's content, before its terminator.
  fn line_end_char(&self, line_idx: usize) -> usize {
    let line = self.line(line_idx);

    let mut len = line.len_chars();

    if len > 0 && line.char(len - 1) == '\n' {
      len -= 1;
    }

    if len > 0 && line.char(len - 1) == '\r' {
      len -= 1;
    }

    self.line_to_char(line_idx) + len
  }

  /// Converts an LSP position into absolute byte and char offsets.
  ///
  /// Positions past the end of a line clamp to the end of that line, and
  /// positions past the last line clamp to the end of the document.
  fn lsp_position_to_position(&self, position: lsp::Position) -> Position {
    let row_idx = position.line as usize;

    if row_idx >= self.len_lines() {
      return Position {
        byte: self.len_bytes(),
        char: self.len_chars(),
      };
    }

    let row_char_idx = self.line_to_char(row_idx);

    let col_code_idx = (self.char_to_utf16_cu(row_char_idx)
      + position.character as usize)
      .min(self.len_utf16_cu());

    let col_char_idx = self
      .utf16_cu_to_char(col_code_idx)
      .min(self.line_end_char(row_idx));

    Position {
      byte: self.char_to_byte(col_char_idx),
      char: col_char_idx,
    }
  }
}
