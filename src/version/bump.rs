//! Bump policy over release versions.

use semver::Version;

/// The category of version increment chosen for a release.
///
/// The major component of a release version tracks the sprint ordinal, so
/// `Major`/`Minor` here move the second and third components. Do not
/// "correct" this to conventional semver; the numeric behavior is the
/// contract the tag history is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpClass {
    /// The tracker reports a sprint the previous release does not belong to.
    /// The new version adopts that sprint's ordinal as its major component.
    NewSprint { sprint: u64 },
    /// New features within the current sprint: increments the middle
    /// component and resets the last.
    Major,
    /// Fixes within the current sprint: increments the last component.
    Minor,
}

/// Produce the next version for the given bump class.
///
/// Pure and component-wise; the input version is never modified.
pub fn next_version(current: &Version, bump: BumpClass) -> Version {
    match bump {
        BumpClass::NewSprint { sprint } => Version::new(sprint, 0, 0),
        BumpClass::Major => Version::new(current.major, current.minor + 1, 0),
        BumpClass::Minor => Version::new(current.major, current.minor, current.patch + 1),
    }
}
