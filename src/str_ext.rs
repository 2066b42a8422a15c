pub(crate) trait StrExt {
  /// Length of the text in UTF-16 code units, the unit LSP columns use.
  fn utf16_len(&self) -> u32;

  /// The text with a single trailing `\n`, `\r\n` or `\r` removed.
  fn strip_line_ending(&self) -> &str;
}

impl StrExt for str {
  fn utf16_len(&self) -> u32 {
    u32::try_from(self.encode_utf16().count()).unwrap_or(u32::MAX)
  }

  fn strip_line_ending(&self) -> &str {
    let line = self.strip_suffix('\n').unwrap_or(self);
    line.strip_suffix('\r').unwrap_or(line)
  }
}
