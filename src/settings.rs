use super::*;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$")
    .expect("identifier pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
  /// Name the package is imported under and called with.
  pub import_alias: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      import_alias: PACKAGE.into(),
    }
  }
}

impl Settings {
  /// Reads settings from either `{"clsx": {...}}` or a bare settings object,
  /// as editors send both for initialization options and configuration
  /// changes. A `clsx` key always takes the namespaced form.
  pub fn from_value(mut value: Value) -> Result<Self> {
    if let Some(namespaced) = value.get_mut(PACKAGE) {
      value = namespaced.take();
    }

    serde_json::from_value::<Settings>(value)?.validate()
  }

  pub fn with_import_alias(import_alias: impl Into<String>) -> Result<Self> {
    Self {
      import_alias: import_alias.into(),
    }
    .validate()
  }

  fn validate(self) -> Result<Self> {
    if !IDENTIFIER.is_match(&self.import_alias) {
      bail!("invalid import alias `{}`", self.import_alias);
    }

    Ok(self)
  }
}
