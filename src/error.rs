/// Why a class attribute could not be wrapped.
///
/// The `Display` output of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
  #[error("could not find className prop")]
  AttributeNotFound,
  #[error("this is not a clsx prop")]
  CursorOutsideAttribute,
  #[error("could not parse class prop")]
  EmptyClassValue,
  #[error("Must have an active editor open")]
  UnsupportedContext,
  #[error("Must be jsx or tsx to use clsx")]
  UnsupportedLanguage { language_id: String },
}

impl RewriteError {
  /// Messages to surface to the user, in order.
  ///
  /// A language mismatch is reported on its own before the generic
  /// `Error: ` notification every failure receives.
  pub fn notifications(&self) -> Vec<String> {
    let mut notifications = Vec::new();

    if matches!(self, Self::UnsupportedLanguage { .. }) {
      notifications.push(self.to_string());
    }

    notifications.push(format!("Error: {self}"));

    notifications
  }
}
