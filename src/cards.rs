use crate::constants::SKILLS_TRACK_ID;

/// How many times the carousel track doubles its cards. The skills track is
/// doubled twice (4x the original cards), any other track once.
#[inline]
pub fn carousel_passes(track_id: &str) -> u32 {
    if track_id == SKILLS_TRACK_ID {
        2
    } else {
        1
    }
}

/// Card count once every pass has appended a copy of the current cards.
#[inline]
pub fn carousel_len_after(original: usize, passes: u32) -> usize {
    original << passes
}

/// The card that should carry the active class after an observer batch:
/// the last entry that is intersecting, if any.
pub fn last_intersecting<T, I>(entries: I) -> Option<T>
where
    I: IntoIterator<Item = (T, bool)>,
{
    entries
        .into_iter()
        .filter_map(|(card, visible)| visible.then_some(card))
        .last()
}
