// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell script generation.
//!
//! ```text
//! render(template, stems)
//!   preamble
//!   for stem:                    primary_id = primary_repository().remote
//!     open_stem                  submodule ids derived once per stem
//!     for submodule: submodule
//!     attach_stem
//!     for submodule: attach_submodule
//!     close_stem
//! ```
//!
//! | Kind                    | File                  |
//! |-------------------------|-----------------------|
//! | init-local-archive      | `init_usb.sh`         |
//! | init-remote-service     | `init_github.sh`      |
//! | delete-remote-service   | `delete_github.sh`    |
//! | delete-local-archive    | `delete_git.sh`       |
//! | rearchive-local-archive | `rearchive_usb.sh`    |
//! | rearchive-remote-service| `rearchive_github.sh` |

pub mod templates;

#[cfg(test)]
mod tests;

use anyhow::Context;
use bitflags::bitflags;

use crate::config::Config;
use crate::error::Result;
use crate::identifier::derive_identifier;
use crate::stem::Stem;

bitflags! {
    /// A selection of scripts to generate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScriptSet: u8 {
        const INIT_LOCAL_ARCHIVE = 1;
        const INIT_REMOTE_SERVICE = 1 << 1;
        const DELETE_REMOTE_SERVICE = 1 << 2;
        const DELETE_LOCAL_ARCHIVE = 1 << 3;
        const REARCHIVE_LOCAL_ARCHIVE = 1 << 4;
        const REARCHIVE_REMOTE_SERVICE = 1 << 5;

        /// Scripts that talk to the remote hosting service.
        const REMOTE_SERVICE = Self::INIT_REMOTE_SERVICE.bits()
            | Self::DELETE_REMOTE_SERVICE.bits()
            | Self::REARCHIVE_REMOTE_SERVICE.bits();
    }
}

/// One kind of generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    InitLocalArchive,
    InitRemoteService,
    DeleteRemoteService,
    DeleteLocalArchive,
    RearchiveLocalArchive,
    RearchiveRemoteService,
}

impl ScriptKind {
    /// Every kind, in generation order.
    pub const ALL: [Self; 6] = [
        Self::InitRemoteService,
        Self::DeleteRemoteService,
        Self::RearchiveRemoteService,
        Self::InitLocalArchive,
        Self::RearchiveLocalArchive,
        Self::DeleteLocalArchive,
    ];

    /// Name of the output file.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::InitLocalArchive => "init_usb.sh",
            Self::InitRemoteService => "init_github.sh",
            Self::DeleteRemoteService => "delete_github.sh",
            Self::DeleteLocalArchive => "delete_git.sh",
            Self::RearchiveLocalArchive => "rearchive_usb.sh",
            Self::RearchiveRemoteService => "rearchive_github.sh",
        }
    }

    #[must_use]
    pub const fn flag(self) -> ScriptSet {
        match self {
            Self::InitLocalArchive => ScriptSet::INIT_LOCAL_ARCHIVE,
            Self::InitRemoteService => ScriptSet::INIT_REMOTE_SERVICE,
            Self::DeleteRemoteService => ScriptSet::DELETE_REMOTE_SERVICE,
            Self::DeleteLocalArchive => ScriptSet::DELETE_LOCAL_ARCHIVE,
            Self::RearchiveLocalArchive => ScriptSet::REARCHIVE_LOCAL_ARCHIVE,
            Self::RearchiveRemoteService => ScriptSet::REARCHIVE_REMOTE_SERVICE,
        }
    }
}

impl std::fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

impl ScriptSet {
    /// Kinds in this set, in generation order.
    pub fn kinds(self) -> impl Iterator<Item = ScriptKind> {
        ScriptKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(kind.flag()))
    }
}

/// A rendered script, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    kind: ScriptKind,
    text: String,
}

impl Script {
    #[must_use]
    pub const fn kind(&self) -> ScriptKind {
        self.kind
    }

    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Line-oriented script text buffer.
#[derive(Debug, Default)]
pub struct ScriptWriter {
    text: String,
}

impl ScriptWriter {
    /// Appends one command line.
    pub fn line(&mut self, line: impl AsRef<str>) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// The stem currently being rendered.
#[derive(Debug)]
pub struct StemContext<'a> {
    /// Working tree of the primary repository.
    pub local: &'a str,
    /// Remote identifier of the primary repository.
    pub primary_id: &'a str,
}

/// A submodule of the stem currently being rendered.
#[derive(Debug)]
pub struct SubmoduleContext<'a> {
    /// Path relative to the stem's working tree.
    pub path: &'a str,
    /// Manifest line of the `path` key.
    pub line_number: usize,
    /// Identifier derived from the submodule URL.
    pub id: String,
}

impl SubmoduleContext<'_> {
    /// Whether the manifest gave this submodule no path.
    #[must_use]
    pub const fn is_pathless(&self) -> bool {
        self.path.is_empty()
    }
}

/// Command templates of one script kind.
///
/// Only `open_stem` and `submodule` are required; the attach pass is used by
/// scripts that rebuild the stem after detaching its submodules.
pub trait ScriptTemplate {
    fn kind(&self) -> ScriptKind;

    /// Commands before the first stem.
    fn preamble(&self, _out: &mut ScriptWriter) {}

    fn open_stem(&self, out: &mut ScriptWriter, stem: &StemContext<'_>);

    fn submodule(
        &self,
        out: &mut ScriptWriter,
        stem: &StemContext<'_>,
        submodule: &SubmoduleContext<'_>,
    );

    fn attach_stem(&self, _out: &mut ScriptWriter, _stem: &StemContext<'_>) {}

    fn attach_submodule(
        &self,
        _out: &mut ScriptWriter,
        _stem: &StemContext<'_>,
        _submodule: &SubmoduleContext<'_>,
    ) {
    }

    fn close_stem(&self, _out: &mut ScriptWriter, _stem: &StemContext<'_>) {}
}

/// Renders `template` over all stems.
///
/// # Errors
///
/// Returns an error if a stem has no primary repository or a submodule URL is
/// empty. The error names the stem, the submodule and its manifest line.
pub fn render(template: &dyn ScriptTemplate, stems: &[Stem]) -> Result<Script> {
    let mut out = ScriptWriter::default();
    template.preamble(&mut out);

    for stem in stems {
        let primary = stem.primary_repository()?;
        let submodules = stem
            .submodules()
            .iter()
            .map(|submodule| {
                let id = derive_identifier(&submodule.url).with_context(|| {
                    format!(
                        "stem '{}': submodule '{}' (manifest line {})",
                        stem.root_path().display(),
                        submodule.path,
                        submodule.line_number
                    )
                })?;
                Ok::<_, anyhow::Error>(SubmoduleContext {
                    path: &submodule.path,
                    line_number: submodule.line_number,
                    id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let context = StemContext {
            local: &primary.local,
            primary_id: &primary.remote,
        };

        template.open_stem(&mut out, &context);
        for submodule in &submodules {
            template.submodule(&mut out, &context, submodule);
        }
        template.attach_stem(&mut out, &context);
        for submodule in &submodules {
            template.attach_submodule(&mut out, &context, submodule);
        }
        template.close_stem(&mut out, &context);
    }

    Ok(Script {
        kind: template.kind(),
        text: out.into_text(),
    })
}

/// Renders every script in `set`, in generation order.
///
/// Nothing is written; a failure leaves no partial output behind.
///
/// # Errors
///
/// Returns an error if the github settings are incomplete while a remote
/// service script is selected, or if any render fails.
pub fn render_all(set: ScriptSet, stems: &[Stem], config: &Config) -> Result<Vec<Script>> {
    if set.intersects(ScriptSet::REMOTE_SERVICE) {
        config.github.validate()?;
    }

    set.kinds()
        .map(|kind| {
            let template = templates::template(kind, config);
            render(template.as_ref(), stems).with_context(|| format!("failed to render {kind}"))
        })
        .collect()
}
