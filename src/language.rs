use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Language {
  JavaScriptReact,
  TypeScriptReact,
}

impl Language {
  /// Maps a file extension to the identifier an editor would assign it.
  pub(crate) fn id_for_path(path: &Path) -> String {
    match path.extension().and_then(|extension| extension.to_str()) {
      Some("jsx") => Self::JavaScriptReact.to_string(),
      Some("tsx") => Self::TypeScriptReact.to_string(),
      Some("js" | "mjs" | "cjs") => "javascript".into(),
      Some("ts" | "mts" | "cts") => "typescript".into(),
      Some(extension) => extension.to_lowercase(),
      None => "plaintext".into(),
    }
  }
}

impl Display for Language {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::JavaScriptReact => "javascriptreact",
        Self::TypeScriptReact => "typescriptreact",
      }
    )
  }
}

impl TryFrom<&str> for Language {
  type Error = RewriteError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    match value {
      "javascriptreact" => Ok(Self::JavaScriptReact),
      "typescriptreact" => Ok(Self::TypeScriptReact),
      _ => Err(RewriteError::UnsupportedLanguage {
        language_id: value.into(),
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn react_identifiers_are_supported() {
    assert_eq!(
      Language::try_from("typescriptreact"),
      Ok(Language::TypeScriptReact)
    );

    assert_eq!(
      Language::try_from("javascriptreact"),
      Ok(Language::JavaScriptReact)
    );
  }

  #[test]
  fn other_identifiers_are_rejected() {
    for id in ["javascript", "typescript", "json", "TypeScriptReact"] {
      assert_eq!(
        Language::try_from(id),
        Err(RewriteError::UnsupportedLanguage {
          language_id: id.into()
        })
      );
    }
  }

  #[test]
  fn ids_from_extensions() {
    for (path, id) in [
      ("src/app.tsx", "typescriptreact"),
      ("src/app.jsx", "javascriptreact"),
      ("src/app.js", "javascript"),
      ("src/app.ts", "typescript"),
      ("package.JSON", "json"),
      ("Makefile", "plaintext"),
    ] {
      assert_eq!(Language::id_for_path(Path::new(path)), id);
    }
  }
}
