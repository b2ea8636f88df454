/// Outcome of the most recent catalog fetch, as seen by the UI.
///
/// A closed set: the rendering decision is a finite branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Success,
    Error,
}

impl FetchStatus {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}
