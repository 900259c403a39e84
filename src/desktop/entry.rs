/// A parsed `.desktop` application entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Desktop file id: the path below the applications directory with `/`
    /// replaced by `-` and the `.desktop` suffix removed, e.g.
    /// `kde/org.kde.konsole.desktop` becomes `kde-org.kde.konsole`.
    pub id: String,
    pub name: String,
    pub exec: String,
    /// Icon name or absolute path as written in the file.
    pub icon: Option<String>,
    pub terminal: bool,
}
