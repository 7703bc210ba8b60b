//! Git history adapter
//!
//! Implements [`CommitSource`] over a local repository using libgit2.
//!
//! - [`patch`] - Rendering tree diffs as unified patch text

pub mod patch;

use std::path::{Path, PathBuf};

use git2::{Commit, DiffOptions, Oid, Repository};
use log::{debug, info, warn};

use crate::config::ExtractConfig;
use crate::core::models::Sample;
use crate::core::ports::CommitSource;
use crate::core::services::{clean_commit_message, clean_diff_content};

/// Branches tried after the requested one
pub const FALLBACK_BRANCHES: &[&str] = &["master", "develop", "dev"];

/// Reads (diff, message) samples from a repository's history
#[derive(Debug, Clone)]
pub struct GitHistory {
    repo_path: PathBuf,
    settings: ExtractConfig,
}

/// Why a commit produced no sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    /// Merge or root commit
    NotSingleParent,
    /// Diff against the parent is whitespace-only
    EmptyDiff,
    /// Message normalizes to nothing
    EmptyMessage,
}

impl GitHistory {
    /// Read the repository at `repo_path` with default settings
    #[must_use]
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self::with_settings(repo_path, ExtractConfig::default())
    }

    /// Read the repository at `repo_path` with explicit settings
    #[must_use]
    pub fn with_settings(repo_path: impl Into<PathBuf>, settings: ExtractConfig) -> Self {
        Self {
            repo_path: repo_path.into(),
            settings,
        }
    }

    /// Repository path
    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn open(&self) -> crate::Result<Repository> {
        if !self.repo_path.exists() {
            return Err(crate::Error::RepositoryNotFound(self.repo_path.clone()));
        }
        Ok(Repository::open(&self.repo_path)?)
    }

    /// Requested branch first, then the fallbacks, without duplicates
    fn candidate_branches(&self) -> Vec<String> {
        let mut branches = vec![self.settings.branch.clone()];
        for fallback in FALLBACK_BRANCHES {
            if !branches.iter().any(|b| b == fallback) {
                branches.push((*fallback).to_string());
            }
        }
        branches
    }

    /// Commit ids from the first candidate branch that has any
    fn resolve_commits(&self, repo: &Repository) -> crate::Result<Vec<Oid>> {
        let branches = self.candidate_branches();

        for branch in &branches {
            let Ok(tip) = repo.revparse_single(branch).and_then(|obj| obj.peel_to_commit()) else {
                debug!("Branch '{branch}' not found");
                continue;
            };

            let mut walk = repo.revwalk()?;
            walk.push(tip.id())?;
            let commits = walk.take(self.settings.max_commits).collect::<Result<Vec<_>, _>>()?;

            if !commits.is_empty() {
                info!("Found {} commit(s) in branch '{branch}'", commits.len());
                return Ok(commits);
            }
        }

        Err(crate::Error::NoCommits(branches))
    }

    fn extract_sample(
        &self,
        repo: &Repository,
        commit: &Commit<'_>,
    ) -> crate::Result<Result<Sample, Skip>> {
        if commit.parent_count() != 1 {
            return Ok(Err(Skip::NotSingleParent));
        }

        let parent_tree = commit.parent(0)?.tree()?;
        let tree = commit.tree()?;
        let mut opts = DiffOptions::new();
        opts.context_lines(0);
        let diff = repo.diff_tree_to_tree(Some(&parent_tree), Some(&tree), Some(&mut opts))?;

        let patch_text = patch::render_patch(&diff)?;
        if patch_text.trim().is_empty() {
            return Ok(Err(Skip::EmptyDiff));
        }

        let raw_message = String::from_utf8_lossy(commit.message_bytes());
        let commit_message = clean_commit_message(&raw_message);
        if commit_message.is_empty() {
            return Ok(Err(Skip::EmptyMessage));
        }

        let author = commit.author();
        Ok(Ok(Sample {
            diff: clean_diff_content(patch_text.trim_end(), self.settings.max_diff_lines),
            commit_message,
            commit_hash: Some(commit.id().to_string()),
            author: author.name().map(String::from),
            date: patch::format_time(author.when()),
        }))
    }
}

impl CommitSource for GitHistory {
    fn describe(&self) -> String {
        format!("git repository {}", self.repo_path.display())
    }

    fn samples(&self) -> crate::Result<Vec<Sample>> {
        let repo = self.open()?;
        let commits = self.resolve_commits(&repo)?;

        let mut samples = Vec::new();
        let mut skipped = 0usize;

        for oid in commits {
            let result = repo
                .find_commit(oid)
                .map_err(crate::Error::from)
                .and_then(|commit| self.extract_sample(&repo, &commit));

            match result {
                Ok(Ok(sample)) => samples.push(sample),
                Ok(Err(reason)) => {
                    debug!("Skipping {oid}: {reason:?}");
                    skipped += 1;
                },
                Err(err) => warn!("Error processing commit {oid}: {err}"),
            }
        }

        info!("Extracted {} commit-diff pair(s), skipped {skipped} commit(s)", samples.len());
        Ok(samples)
    }
}
