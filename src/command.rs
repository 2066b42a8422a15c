use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
  Wrap,
}

impl Command {
  pub(crate) fn all() -> Vec<Command> {
    vec![Command::Wrap]
  }

  /// Parses the single `TextDocumentPositionParams` argument of `clsx.wrap`.
  pub(crate) fn parse_arguments(
    self,
    arguments: Vec<Value>,
  ) -> Result<lsp::TextDocumentPositionParams> {
    match self {
      Command::Wrap => {
        let [argument] =
          <[Value; 1]>::try_from(arguments).map_err(|arguments| {
            anyhow!("{self} expects 1 argument, got {}", arguments.len())
          })?;

        Ok(serde_json::from_value(argument)?)
      }
    }
  }
}

impl Display for Command {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", <&str>::from(*self))
  }
}

impl From<Command> for &'static str {
  fn from(command: Command) -> Self {
    match command {
      Command::Wrap => "clsx.wrap",
    }
  }
}

impl TryFrom<&str> for Command {
  type Error = anyhow::Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    match value {
      "clsx.wrap" => Ok(Command::Wrap),
      _ => Err(anyhow!("Unknown command: {}", value)),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  fn position() -> lsp::TextDocumentPositionParams {
    lsp::TextDocumentPositionParams {
      text_document: lsp::TextDocumentIdentifier {
        uri: lsp::Url::parse("file:///app.tsx").unwrap(),
      },
      position: lsp::Position::new(2, 7),
    }
  }

  #[test]
  fn names_round_trip() {
    for command in Command::all() {
      assert_eq!(
        Command::try_from(command.to_string().as_str()).unwrap(),
        command
      );
    }
  }

  #[test]
  fn unknown_command() {
    assert_eq!(
      Command::try_from("clsx.unwrap").unwrap_err().to_string(),
      "Unknown command: clsx.unwrap"
    );
  }

  #[test]
  fn parse_wrap_arguments() {
    assert_eq!(
      Command::Wrap
        .parse_arguments(vec![json!({
          "textDocument": { "uri": "file:///app.tsx" },
          "position": { "line": 2, "character": 7 }
        })])
        .unwrap(),
      position()
    );
  }

  #[test]
  fn wrap_requires_one_argument() {
    assert_eq!(
      Command::Wrap.parse_arguments(Vec::new()).unwrap_err().to_string(),
      "clsx.wrap expects 1 argument, got 0"
    );
  }

  #[test]
  fn wrap_rejects_malformed_argument() {
    assert!(Command::Wrap
      .parse_arguments(vec![json!({ "uri": "file:///app.tsx" })])
      .is_err());
  }
}
