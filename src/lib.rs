use {
  crate::{
    attribute::ClassAttribute,
    command::Command,
    document::Document,
    error::RewriteError,
    import::Import,
    language::Language,
    rewriter::{rewrite, Rewrite},
    rope_ext::RopeExt,
    settings::Settings,
    str_ext::StrExt,
    subcommand::Subcommand,
  },
  anyhow::{anyhow, bail},
  clap::Parser,
  once_cell::sync::Lazy,
  regex::Regex,
  ropey::Rope,
  serde::Deserialize,
  serde_json::Value,
  std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
    process,
    sync::Arc,
  },
  tower_lsp::{jsonrpc, lsp_types as lsp, Client, LanguageServer, LspService},
};

pub use crate::{arguments::Arguments, server::Server};

mod arguments;
mod attribute;
mod command;
mod document;
mod error;
mod import;
mod language;
mod rewriter;
mod rope_ext;
mod server;
mod settings;
mod str_ext;
mod subcommand;

pub(crate) type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

/// The package that provides the classname-joining function.
pub(crate) const PACKAGE: &str = "clsx";
