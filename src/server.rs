use super::*;

#[derive(Debug)]
pub struct Server(Arc<tokio::sync::Mutex<Inner>>);

impl Server {
  pub fn new(client: Client) -> Self {
    Self(Arc::new(tokio::sync::Mutex::new(Inner::new(client))))
  }

  pub async fn run() -> Result {
    let (service, socket) = LspService::new(Server::new);

    tower_lsp::Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
      .serve(service)
      .await;

    Ok(())
  }

  pub fn capabilities() -> lsp::ServerCapabilities {
    lsp::ServerCapabilities {
      code_action_provider: Some(lsp::CodeActionProviderCapability::Options(
        lsp::CodeActionOptions {
          code_action_kinds: Some(vec![lsp::CodeActionKind::REFACTOR_REWRITE]),
          ..Default::default()
        },
      )),
      execute_command_provider: Some(lsp::ExecuteCommandOptions {
        commands: Command::all()
          .into_iter()
          .map(|command| command.to_string())
          .collect(),
        ..Default::default()
      }),
      text_document_sync: Some(lsp::TextDocumentSyncCapability::Options(
        lsp::TextDocumentSyncOptions {
          open_close: Some(true),
          change: Some(lsp::TextDocumentSyncKind::INCREMENTAL),
          will_save: None,
          will_save_wait_until: None,
          save: None,
        },
      )),
      ..Default::default()
    }
  }

  async fn apply(client: &Client, edit: lsp::WorkspaceEdit) {
    match client.apply_edit(edit).await {
      Ok(response) if response.applied => {}
      Ok(response) => log::warn!(
        "editor rejected edit: {}",
        response.failure_reason.unwrap_or_default()
      ),
      Err(error) => log::warn!("failed to apply edit: {error}"),
    }
  }

  async fn notify(client: &Client, error: &RewriteError) {
    for message in error.notifications() {
      client.show_message(lsp::MessageType::ERROR, message).await;
    }
  }
}

#[tower_lsp::async_trait]
impl LanguageServer for Server {
  async fn code_action(
    &self,
    params: lsp::CodeActionParams,
  ) -> Result<Option<lsp::CodeActionResponse>, jsonrpc::Error> {
    Ok(self.0.lock().await.code_action(params))
  }

  async fn did_change(&self, params: lsp::DidChangeTextDocumentParams) {
    self.0.lock().await.did_change(params)
  }

  async fn did_change_configuration(
    &self,
    params: lsp::DidChangeConfigurationParams,
  ) {
    self.0.lock().await.configure(params.settings)
  }

  async fn did_close(&self, params: lsp::DidCloseTextDocumentParams) {
    self.0.lock().await.did_close(params)
  }

  async fn did_open(&self, params: lsp::DidOpenTextDocumentParams) {
    self.0.lock().await.did_open(params)
  }

  async fn execute_command(
    &self,
    params: lsp::ExecuteCommandParams,
  ) -> Result<Option<Value>, jsonrpc::Error> {
    let command = Command::try_from(params.command.as_str())
      .map_err(|error| jsonrpc::Error::invalid_params(error.to_string()))?;

    let position = command
      .parse_arguments(params.arguments)
      .map_err(|error| jsonrpc::Error::invalid_params(error.to_string()))?;

    let uri = position.text_document.uri.clone();

    let (client, outcome) = {
      let inner = self.0.lock().await;
      (inner.client.clone(), inner.wrap(&position))
    };

    match outcome {
      Ok(rewrite) => Self::apply(&client, rewrite.workspace_edit(uri)).await,
      Err(error) => {
        log::debug!("{command} failed for {uri}: {error}");
        Self::notify(&client, &error).await;
      }
    }

    Ok(None)
  }

  async fn initialize(
    &self,
    params: lsp::InitializeParams,
  ) -> Result<lsp::InitializeResult, jsonrpc::Error> {
    self.0.lock().await.initialize(params)
  }

  async fn initialized(&self, _: lsp::InitializedParams) {
    log::info!("{} initialized", env!("CARGO_PKG_NAME"));
  }

  async fn shutdown(&self) -> Result<(), jsonrpc::Error> {
    Ok(())
  }
}

#[derive(Debug)]
pub(crate) struct Inner {
  client: Client,
  documents: BTreeMap<lsp::Url, Document>,
  settings: Settings,
}

impl Inner {
  fn new(client: Client) -> Self {
    Self {
      client,
      documents: BTreeMap::new(),
      settings: Settings::default(),
    }
  }

  fn code_action(
    &self,
    params: lsp::CodeActionParams,
  ) -> Option<lsp::CodeActionResponse> {
    let kind = lsp::CodeActionKind::REFACTOR_REWRITE;

    if let Some(only) = &params.context.only {
      let requested = only.iter().any(|prefix| {
        kind.as_str() == prefix.as_str()
          || kind.as_str().starts_with(&format!("{}.", prefix.as_str()))
      });

      if !requested {
        return None;
      }
    }

    let position = lsp::TextDocumentPositionParams {
      text_document: params.text_document,
      position: params.range.start,
    };

    match self.wrap(&position) {
      Ok(rewrite) => Some(vec![lsp::CodeActionOrCommand::CodeAction(
        lsp::CodeAction {
          title: format!(
            "Wrap class names with {}",
            self.settings.import_alias
          ),
          kind: Some(kind),
          edit: Some(rewrite.workspace_edit(position.text_document.uri)),
          ..Default::default()
        },
      )]),
      Err(error) => {
        log::debug!(
          "no code action at {}:{}:{}: {error}",
          position.text_document.uri,
          position.position.line,
          position.position.character
        );
        None
      }
    }
  }

  fn configure(&mut self, value: Value) {
    if value.is_null() {
      return;
    }

    match Settings::from_value(value) {
      Ok(settings) => {
        log::info!("using import alias `{}`", settings.import_alias);
        self.settings = settings;
      }
      Err(error) => log::warn!("ignoring settings: {error}"),
    }
  }

  fn did_change(&mut self, params: lsp::DidChangeTextDocumentParams) {
    if let Some(document) = self.documents.get_mut(&params.text_document.uri) {
      document.apply_change(params);
    }
  }

  fn did_close(&mut self, params: lsp::DidCloseTextDocumentParams) {
    self.documents.remove(&params.text_document.uri);
  }

  fn did_open(&mut self, params: lsp::DidOpenTextDocumentParams) {
    let document = Document::from(params);

    log::debug!(
      "opened {} ({}, version {})",
      document.uri,
      document.language_id,
      document.version
    );

    self.documents.insert(document.uri.clone(), document);
  }

  fn initialize(
    &mut self,
    params: lsp::InitializeParams,
  ) -> Result<lsp::InitializeResult, jsonrpc::Error> {
    log::info!("Starting {} language server...", env!("CARGO_PKG_NAME"));

    if let Some(options) = params.initialization_options {
      self.configure(options);
    }

    Ok(lsp::InitializeResult {
      capabilities: Server::capabilities(),
      server_info: Some(lsp::ServerInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
      }),
    })
  }

  fn wrap(
    &self,
    position: &lsp::TextDocumentPositionParams,
  ) -> Result<Rewrite, RewriteError> {
    rewrite(
      self.documents.get(&position.text_document.uri),
      position.position,
      &self.settings,
    )
  }
}
