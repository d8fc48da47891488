// rearchive: git stem migration script generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command templates of the six scripts.
//!
//! Credentials are never part of the output: scripts that need one prompt
//! for it once, up front, and refer to the shell variable afterwards.

use super::{ScriptKind, ScriptTemplate, ScriptWriter, StemContext, SubmoduleContext};
use crate::config::Config;
use crate::config::types::{GithubConfig, RearchiveConfig, UsbConfig};

/// Shell variable holding the directory the rearchive scripts start in.
const ROOT_VAR: &str = "PROCTSDIR";

/// Returns the template for `kind`, configured from `config`.
#[must_use]
pub fn template(kind: ScriptKind, config: &Config) -> Box<dyn ScriptTemplate + '_> {
    match kind {
        ScriptKind::InitLocalArchive => Box::new(InitLocalArchive { usb: &config.usb }),
        ScriptKind::InitRemoteService => Box::new(InitRemoteService {
            github: &config.github,
        }),
        ScriptKind::DeleteRemoteService => Box::new(DeleteRemoteService {
            github: &config.github,
        }),
        ScriptKind::DeleteLocalArchive => Box::new(DeleteLocalArchive),
        ScriptKind::RearchiveLocalArchive => Box::new(Rearchive {
            target: Target::LocalArchive(&config.usb),
            git: &config.rearchive,
        }),
        ScriptKind::RearchiveRemoteService => Box::new(Rearchive {
            target: Target::RemoteService(&config.github),
            git: &config.rearchive,
        }),
    }
}

/// `echo -n <label>:` followed by a silent `read` into `var`.
fn prompt_secret(out: &mut ScriptWriter, label: &str, var: &str) {
    out.line(format!("echo -n {label}:"));
    out.line(format!("read -s {var}"));
}

/// Creates the bare repositories of the local archive.
pub struct InitLocalArchive<'a> {
    pub usb: &'a UsbConfig,
}

impl ScriptTemplate for InitLocalArchive<'_> {
    fn kind(&self) -> ScriptKind {
        ScriptKind::InitLocalArchive
    }

    fn preamble(&self, out: &mut ScriptWriter) {
        out.line(format!("cd {}", self.usb.archive_root));
        out.line(format!("mkdir {}", self.usb.archive_dir));
        out.line(format!("cd {}", self.usb.archive_dir));
    }

    fn open_stem(&self, out: &mut ScriptWriter, stem: &StemContext<'_>) {
        out.line(format!("# stem: {}", stem.local));
        out.line(format!("git init --bare {}", stem.primary_id));
    }

    fn submodule(&self, out: &mut ScriptWriter, _: &StemContext<'_>, sub: &SubmoduleContext<'_>) {
        out.line(format!("# submodule: {}", sub.path));
        out.line(format!("git init --bare {}", sub.id));
    }
}

/// Creates the repositories on the hosting service through its API.
pub struct InitRemoteService<'a> {
    pub github: &'a GithubConfig,
}

impl InitRemoteService<'_> {
    fn create(&self, out: &mut ScriptWriter, id: &str) {
        let body = serde_json::json!({ "name": id });
        out.line(format!(
            "curl -u {}:$password {}/user/repos -d '{body}'",
            self.github.account_name, self.github.api_base_url
        ));
    }
}

impl ScriptTemplate for InitRemoteService<'_> {
    fn kind(&self) -> ScriptKind {
        ScriptKind::InitRemoteService
    }

    fn preamble(&self, out: &mut ScriptWriter) {
        prompt_secret(out, "Password", "password");
    }

    fn open_stem(&self, out: &mut ScriptWriter, stem: &StemContext<'_>) {
        out.line(format!("# stem: {}", stem.local));
        self.create(out, stem.primary_id);
    }

    fn submodule(&self, out: &mut ScriptWriter, _: &StemContext<'_>, sub: &SubmoduleContext<'_>) {
        out.line(format!("# submodule: {}", sub.path));
        self.create(out, &sub.id);
    }
}

/// Deletes the repositories from the hosting service.
///
/// The token needs the `delete_repo` scope; it is read at run time.
pub struct DeleteRemoteService<'a> {
    pub github: &'a GithubConfig,
}

impl DeleteRemoteService<'_> {
    fn delete(&self, out: &mut ScriptWriter, id: &str) {
        out.line(format!(
            "curl -X DELETE -H \"Authorization: token $token\" {}/repos/{}/{id}",
            self.github.api_base_url, self.github.account_name
        ));
    }
}

impl ScriptTemplate for DeleteRemoteService<'_> {
    fn kind(&self) -> ScriptKind {
        ScriptKind::DeleteRemoteService
    }

    fn preamble(&self, out: &mut ScriptWriter) {
        prompt_secret(out, "Token", "token");
    }

    fn open_stem(&self, out: &mut ScriptWriter, stem: &StemContext<'_>) {
        out.line(format!("# stem: {}", stem.local));
        self.delete(out, stem.primary_id);
    }

    fn submodule(&self, out: &mut ScriptWriter, _: &StemContext<'_>, sub: &SubmoduleContext<'_>) {
        out.line(format!("# submodule: {}", sub.path));
        self.delete(out, &sub.id);
    }
}

/// Removes the old git metadata from the working trees.
pub struct DeleteLocalArchive;

impl ScriptTemplate for DeleteLocalArchive {
    fn kind(&self) -> ScriptKind {
        ScriptKind::DeleteLocalArchive
    }

    fn open_stem(&self, out: &mut ScriptWriter, stem: &StemContext<'_>) {
        out.line(format!("rm -rf {}/.git", stem.local));
        out.line(format!("rm -f {}/.gitmodules", stem.local));
    }

    fn submodule(&self, out: &mut ScriptWriter, stem: &StemContext<'_>, sub: &SubmoduleContext<'_>) {
        out.line(format!("rm -f {}/{}/.git", stem.local, sub.path));
    }
}

/// Archive a rearchive script pushes to.
pub enum Target<'a> {
    /// Bare repositories reached through `file://` URLs.
    LocalArchive(&'a UsbConfig),
    /// Hosting service reached over HTTPS with the password embedded.
    RemoteService(&'a GithubConfig),
}

impl Target<'_> {
    fn remote_url(&self, id: &str) -> String {
        match self {
            Self::LocalArchive(usb) => usb.remote_url(id),
            Self::RemoteService(github) => github.remote_url(id),
        }
    }
}

/// Re-creates every repository with a single commit and pushes it.
///
/// Each submodule is turned into a standalone repository, pushed, and removed
/// from the working tree; the stem is then re-initialised with the submodules
/// added back from their new remotes.
pub struct Rearchive<'a> {
    pub target: Target<'a>,
    pub git: &'a RearchiveConfig,
}

impl Rearchive<'_> {
    /// Emits a comment in place of a submodule without a path. A bare `cd`
    /// changes to `$HOME`.
    fn skip_pathless(out: &mut ScriptWriter, sub: &SubmoduleContext<'_>) -> bool {
        if sub.is_pathless() {
            out.line(format!(
                "# skipped: submodule without path (manifest line {})",
                sub.line_number
            ));
        }
        sub.is_pathless()
    }

    fn commit(&self, out: &mut ScriptWriter) {
        out.line("git init");
        out.line("git add --all");
        out.line(format!("git commit -m \"{}\"", self.git.commit_message));
    }

    fn push_submodule(&self, out: &mut ScriptWriter, id: &str) {
        match self.target {
            Target::LocalArchive(usb) => {
                out.line(format!("git remote add origin {}", usb.remote_url(id)));
                out.line(format!("git push origin {}", self.git.branch));
            }
            Target::RemoteService(github) => {
                out.line(format!("git push {} {}", github.push_url(id), self.git.branch));
            }
        }
    }

    fn push_stem(&self, out: &mut ScriptWriter, id: &str) {
        out.line(format!("git remote add origin {}", self.target.remote_url(id)));
        match self.target {
            Target::LocalArchive(_) => out.line(format!("git push origin {}", self.git.branch)),
            Target::RemoteService(github) => {
                out.line(format!("git push {} {}", github.push_url(id), self.git.branch));
            }
        }
    }
}

impl ScriptTemplate for Rearchive<'_> {
    fn kind(&self) -> ScriptKind {
        match self.target {
            Target::LocalArchive(_) => ScriptKind::RearchiveLocalArchive,
            Target::RemoteService(_) => ScriptKind::RearchiveRemoteService,
        }
    }

    fn preamble(&self, out: &mut ScriptWriter) {
        out.line(format!("export {ROOT_VAR}=$(pwd)"));
        if matches!(self.target, Target::RemoteService(_)) {
            prompt_secret(out, "Password", "password");
        }
    }

    fn open_stem(&self, out: &mut ScriptWriter, stem: &StemContext<'_>) {
        out.line(format!("cd {}", stem.local));
    }

    fn submodule(&self, out: &mut ScriptWriter, stem: &StemContext<'_>, sub: &SubmoduleContext<'_>) {
        if Self::skip_pathless(out, sub) {
            return;
        }
        out.line(format!("cd {}", sub.path));
        self.commit(out);
        self.push_submodule(out, &sub.id);
        out.line(format!("cd ${ROOT_VAR}"));
        out.line(format!("cd {}", stem.local));
        out.line(format!("rm -rf {}", sub.path));
    }

    fn attach_stem(&self, out: &mut ScriptWriter, _: &StemContext<'_>) {
        out.line("git init");
        out.line("git submodule init");
    }

    fn attach_submodule(
        &self,
        out: &mut ScriptWriter,
        _: &StemContext<'_>,
        sub: &SubmoduleContext<'_>,
    ) {
        if Self::skip_pathless(out, sub) {
            return;
        }
        out.line(format!(
            "git submodule add {} {}",
            self.target.remote_url(&sub.id),
            sub.path
        ));
    }

    fn close_stem(&self, out: &mut ScriptWriter, stem: &StemContext<'_>) {
        out.line("git add --all");
        out.line(format!("git commit -m \"{}\"", self.git.commit_message));
        self.push_stem(out, stem.primary_id);
        out.line(format!("cd ${ROOT_VAR}"));
    }
}
