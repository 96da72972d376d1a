//! Fragment scanning and joining.

use super::StateLabelPair;

/// Separator placed between aggregated fragments.
pub const FRAGMENT_SEPARATOR: char = ' ';

/// Returns the index of the first fragment equal to either state label.
///
/// Later matches are deliberately ignored; only one state announcement is
/// ever dropped.
#[must_use]
pub fn find_state_fragment_index<T>(fragments: &[T], labels: &StateLabelPair) -> Option<usize>
where
    T: AsRef<str>,
{
    fragments
        .iter()
        .position(|fragment| labels.matches(fragment.as_ref()))
}

/// Joins `fragments` in order, skipping the one at `excluded`.
///
/// Each kept fragment is followed by [`FRAGMENT_SEPARATOR`] and exactly one
/// trailing separator is removed afterwards, so empty fragments still
/// contribute their separator.
#[must_use]
pub fn join_fragments<T>(fragments: &[T], excluded: Option<usize>) -> String
where
    T: AsRef<str>,
{
    let mut aggregated = String::new();
    for (index, fragment) in fragments.iter().enumerate() {
        if Some(index) == excluded {
            continue;
        }
        aggregated.push_str(fragment.as_ref());
        aggregated.push(FRAGMENT_SEPARATOR);
    }
    aggregated.pop();
    aggregated
}
