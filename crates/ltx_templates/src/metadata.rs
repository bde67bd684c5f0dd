//! Metadata resolution.
//!
//! Turns a request with optional fields into a fully populated metadata
//! record. Resolution is pure: the only inputs besides the request are the
//! [`Ambient`] facts (login name and current time) captured by the caller.

use std::env;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::{LtxError, LtxResult};
use crate::renderer::Bindings;
use crate::request::{DocumentRequest, FragmentKind, FragmentRequest};

/// Format of the provenance timestamp, followed by ` by <user>`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Format of the default document date.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Environment variables consulted for the login name, in order.
const IDENTITY_VARS: [&str; 3] = ["USER", "LOGNAME", "USERNAME"];

/// Process facts a resolution depends on.
#[derive(Debug, Clone)]
pub struct Ambient {
    pub user: String,
    pub now: DateTime<Local>,
}

impl Ambient {
    pub fn new(user: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            user: user.into(),
            now,
        }
    }

    /// Capture the current login name and local time.
    ///
    /// Fails with [`LtxError::IdentityResolution`] when no login name can be
    /// determined.
    pub fn capture() -> LtxResult<Self> {
        let user = login_name()?;
        debug!("Resolved login name: {}", user);
        Ok(Self::new(user, Local::now()))
    }

    /// Provenance line: local date/time plus the resolving user.
    pub fn timestamp(&self) -> String {
        format!("{} by {}", self.now.format(TIMESTAMP_FORMAT), self.user)
    }

    /// Today's date in the default display format.
    pub fn today(&self) -> String {
        self.now.format(DATE_FORMAT).to_string()
    }
}

fn login_name() -> LtxResult<String> {
    pick_login_name(account_name(), |var| env::var(var).ok())
}

/// Login name of the effective uid from the OS account database.
#[cfg(unix)]
fn account_name() -> Option<String> {
    uzers::get_effective_username().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn account_name() -> Option<String> {
    None
}

/// The account name when there is one, else the first non-empty identity
/// variable returned by `lookup`.
fn pick_login_name(
    account: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> LtxResult<String> {
    account
        .into_iter()
        .chain(IDENTITY_VARS.iter().filter_map(|var| lookup(*var)))
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .ok_or_else(|| {
            LtxError::IdentityResolution(format!(
                "no account entry for the current user and none of {} is set",
                IDENTITY_VARS.join(", ")
            ))
        })
}

/// Resolved metadata for a document skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub timestamp: String,
    pub author: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
}

/// Resolve a document request.
pub fn resolve_document(request: &DocumentRequest, ambient: &Ambient) -> DocumentMetadata {
    DocumentMetadata {
        timestamp: ambient.timestamp(),
        author: request
            .author
            .clone()
            .unwrap_or_else(|| ambient.user.clone()),
        title: request.title.clone(),
        subtitle: request.subtitle.clone(),
        date: request.date.clone().unwrap_or_else(|| ambient.today()),
    }
}

impl Bindings for DocumentMetadata {
    fn bindings(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("TIMESTAMP", self.timestamp.as_str()),
            ("author", self.author.as_str()),
            ("title", self.title.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("date", self.date.as_str()),
        ]
    }
}

/// Resolved metadata for a figure or table fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentMetadata {
    pub kind: FragmentKind,
    pub timestamp: String,
    /// Output file stem; names the image for figures.
    pub stem: String,
    /// Effective directory of the fragment, as written into the markup.
    pub dir: String,
    pub caption: String,
    pub toc_caption: String,
    pub label: String,
    pub ext: String,
}

/// Resolve a fragment request placed under `dir`.
///
/// Defaults chain from the file stem: caption falls back to the stem, the
/// table-of-contents caption to the resolved caption, and the label to the
/// stem.
pub fn resolve_fragment(
    request: &FragmentRequest,
    dir: &str,
    ambient: &Ambient,
) -> FragmentMetadata {
    let stem = request.stem().to_string();
    let caption = request.caption.clone().unwrap_or_else(|| stem.clone());
    let toc_caption = request
        .toc_caption
        .clone()
        .unwrap_or_else(|| caption.clone());
    let label = request.label.clone().unwrap_or_else(|| stem.clone());

    FragmentMetadata {
        kind: request.kind,
        timestamp: ambient.timestamp(),
        stem,
        dir: dir.to_string(),
        caption,
        toc_caption,
        label,
        ext: request.ext.clone(),
    }
}

impl Bindings for FragmentMetadata {
    fn bindings(&self) -> Vec<(&'static str, &str)> {
        let mut bindings = vec![
            ("TIMESTAMP", self.timestamp.as_str()),
            ("caption", self.caption.as_str()),
            ("toc_caption", self.toc_caption.as_str()),
            ("label", self.label.as_str()),
        ];
        if self.kind == FragmentKind::Figure {
            bindings.push(("imgname", self.stem.as_str()));
            bindings.push(("dir", self.dir.as_str()));
            bindings.push(("ext", self.ext.as_str()));
        }
        bindings
    }
}
