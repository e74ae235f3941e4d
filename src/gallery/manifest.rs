// SPDX-License-Identifier: MPL-2.0
//! Portfolio manifest loading.
//!
//! A manifest is a TOML file holding either a single `[project]` table with
//! an ordered `[[gallery]]` array, or a `[[projects]]` array whose entries
//! each carry their own `gallery`. It plays the role of the content
//! platform: the application only reads it, never writes it.

use super::{Gallery, GalleryItem};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of engagement a project came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Client,
    School,
    Personal,
    Collab,
}

impl ProjectType {
    /// i18n key of the human-readable label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectType::Client => "project-type-client",
            ProjectType::School => "project-type-school",
            ProjectType::Personal => "project-type-personal",
            ProjectType::Collab => "project-type-collab",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectType::Client => "client",
            ProjectType::School => "school",
            ProjectType::Personal => "personal",
            ProjectType::Collab => "collab",
        };
        f.write_str(name)
    }
}

/// Whether a project appears on the home list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Hidden,
}

/// An external link shown on the project page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProjectLink {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ProjectLink {
    /// Text to display: the label, else the URL.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .or(self.url.as_deref())
    }
}

/// Descriptive record shown on the home card and above the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub overview: Vec<String>,
    /// "My contribution" paragraphs.
    #[serde(default)]
    pub contribution: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Lower numbers are listed first.
    #[serde(default)]
    pub order: Option<i32>,
}

impl Project {
    /// Short text for cards and the header: the summary, else the description.
    #[must_use]
    pub fn blurb(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .filter(|summary| !summary.trim().is_empty())
            .or(self.description.as_deref())
    }
}

/// A project together with its gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub project: Project,
    pub gallery: Gallery,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(flatten)]
    project: Project,
    #[serde(default)]
    gallery: Vec<GalleryItem>,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    project: Option<Project>,
    #[serde(default)]
    gallery: Vec<GalleryItem>,
    #[serde(default)]
    projects: Vec<RawEntry>,
}

/// A parsed manifest together with the directory relative URLs resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub projects: Vec<ProjectEntry>,
    pub base_dir: Option<PathBuf>,
}

impl Manifest {
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProjectEntry> {
        self.projects.get(index)
    }

    /// Indices of the public projects, by `order` then manifest position.
    #[must_use]
    pub fn listed(&self) -> Vec<usize> {
        let mut listed: Vec<usize> = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.project.visibility == Visibility::Public)
            .map(|(index, _)| index)
            .collect();
        // Stable: equal keys keep manifest order
        listed.sort_by_key(|&index| {
            let order = self.projects[index].project.order;
            (order.is_none(), order)
        });
        listed
    }

    /// Total gallery items across projects, for logging.
    fn item_count(&self) -> usize {
        self.projects.iter().map(|entry| entry.gallery.len()).sum()
    }
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Manifest`]
/// if its content is not a valid manifest.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    let mut manifest = parse_manifest(&content)?;
    manifest.base_dir = path.parent().map(Path::to_path_buf);
    tracing::info!(
        path = %path.display(),
        projects = manifest.projects.len(),
        listed = manifest.listed().len(),
        items = manifest.item_count(),
        "manifest loaded"
    );
    Ok(manifest)
}

/// Parses manifest text. Relative URLs are left unresolved (`base_dir` is `None`).
///
/// # Errors
///
/// Returns [`Error::Manifest`] on invalid TOML, an unknown `project_type`
/// or `visibility`, a blank title, or a manifest without exactly one of
/// `[project]` and `[[projects]]`.
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    let raw: RawManifest =
        toml::from_str(content).map_err(|err| Error::Manifest(err.message().to_string()))?;

    let projects = match (raw.project, raw.projects.is_empty()) {
        (Some(_), false) => {
            return Err(Error::Manifest(
                "use either [project] or [[projects]], not both".to_string(),
            ));
        }
        (Some(project), true) => vec![ProjectEntry {
            project,
            gallery: Gallery::new(raw.gallery),
        }],
        (None, _) if !raw.gallery.is_empty() => {
            return Err(Error::Manifest("[[gallery]] needs a [project] table".to_string()));
        }
        (None, true) => return Err(Error::Manifest("manifest lists no project".to_string())),
        (None, false) => raw
            .projects
            .into_iter()
            .map(|entry| ProjectEntry {
                project: entry.project,
                gallery: Gallery::new(entry.gallery),
            })
            .collect(),
    };

    if let Some(position) = projects
        .iter()
        .position(|entry| entry.project.title.trim().is_empty())
    {
        return Err(Error::Manifest(format!(
            "project {} has an empty title",
            position + 1
        )));
    }

    Ok(Manifest {
        projects,
        base_dir: None,
    })
}
