use super::*;

static CLASS_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r#"(?i-u:class(name)?)="([^"]+)""#)
    .expect("class attribute pattern must compile")
});

static EMPTY_CLASS_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r#"(?i-u:class(name)?)="""#)
    .expect("empty class attribute pattern must compile")
});

/// A quoted `class` or `className` attribute found on a single line.
///
/// Only the first quoted attribute on the line is considered, and attributes
/// spanning several lines or using template literals are never matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassAttribute {
  pub(crate) range: lsp::Range,
}

impl ClassAttribute {
  /// Locates the attribute on `text`, the content of line `line`, and checks
  /// that `character` lies within it. The end of the attribute counts as
  /// inside.
  pub(crate) fn resolve(
    text: &str,
    line: u32,
    character: u32,
  ) -> Result<Self, RewriteError> {
    let Some(found) = CLASS_ATTRIBUTE.find(text) else {
      return Err(if EMPTY_CLASS_ATTRIBUTE.is_match(text) {
        RewriteError::EmptyClassValue
      } else {
        RewriteError::AttributeNotFound
      });
    };

    let matched = found.as_str();

    let start_byte = text.find(matched).unwrap_or(found.start());

    let start = text[..start_byte].utf16_len();
    let end = start + matched.utf16_len();

    if character < start || character > end {
      return Err(RewriteError::CursorOutsideAttribute);
    }

    Ok(Self {
      range: lsp::Range {
        start: lsp::Position::new(line, start),
        end: lsp::Position::new(line, end),
      },
    })
  }

  /// Builds the `className={alias('value')}` expression from the attribute's
  /// source text.
  pub(crate) fn replacement(
    text: &str,
    import_alias: &str,
  ) -> Result<String, RewriteError> {
    let value = text
      .split('"')
      .nth(1)
      .filter(|value| !value.is_empty())
      .ok_or(RewriteError::EmptyClassValue)?;

    Ok(format!("className={{{import_alias}('{value}')}}"))
  }
}
