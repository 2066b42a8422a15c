use super::*;

static IMPORT: Lazy<Regex> = Lazy::new(|| {
  Regex::new(&format!(
    r#"(?i-u:import [A-Za-z0-9_]+ from ['"]{}['"])(;)?"#,
    regex::escape(PACKAGE)
  ))
  .expect("import pattern must compile")
});

/// The default import of the classname-joining package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Import<'a> {
  pub(crate) alias: &'a str,
}

impl<'a> Import<'a> {
  pub(crate) fn new(alias: &'a str) -> Self {
    Self { alias }
  }

  /// Whether `text` already imports the package, under any name.
  pub(crate) fn is_present(text: &str) -> bool {
    IMPORT.is_match(text)
  }

  /// Always targets the start of the second line, whatever the document
  /// contains.
  pub(crate) fn position() -> lsp::Position {
    lsp::Position::new(1, 0)
  }

  /// The insertion edit, or `None` when `text` already has the import.
  pub(crate) fn edit(&self, text: &str) -> Option<lsp::TextEdit> {
    if Self::is_present(text) {
      return None;
    }

    Some(lsp::TextEdit {
      range: lsp::Range {
        start: Self::position(),
        end: Self::position(),
      },
      new_text: self.to_string(),
    })
  }
}

impl Display for Import<'_> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "import {} from '{PACKAGE}';", self.alias)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, indoc::indoc, pretty_assertions::assert_eq};

  #[test]
  fn statement() {
    assert_eq!(Import::new("cx").to_string(), "import cx from 'clsx';\n");
  }

  #[test]
  fn detects_existing_imports() {
    for text in [
      "import clsx from 'clsx';",
      "import clsx from 'clsx'",
      "import clsx from \"clsx\";",
      "IMPORT CLSX FROM 'CLSX'",
      "import cx from 'clsx';",
      "import React from 'react';\nimport classNames from 'clsx';\n",
    ] {
      assert!(Import::is_present(text), "{text}");
    }
  }

  #[test]
  fn ignores_other_imports() {
    for text in [
      "import React from 'react';",
      "import { clsx } from 'clsx';",
      "import clsx from 'clsx/lite';",
      "const clsx = require('clsx');",
      "import cx from 'cl\u{017F}x';",
    ] {
      assert!(!Import::is_present(text), "{text}");
    }
  }

  #[test]
  fn edit_inserts_at_second_line() {
    let text = indoc! {"
      import React from 'react';
      export const A = () => <div class=\"a\" />;
    "};

    assert_eq!(
      Import::new("clsx").edit(text),
      Some(lsp::TextEdit {
        range: lsp::Range {
          start: lsp::Position::new(1, 0),
          end: lsp::Position::new(1, 0),
        },
        new_text: "import clsx from 'clsx';\n".into(),
      })
    );
  }

  #[test]
  fn edit_skipped_when_present() {
    assert_eq!(
      Import::new("clsx").edit("import clsx from \"clsx\"\n<div />"),
      None
    );
  }
}
