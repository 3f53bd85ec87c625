use crate::models::entry::LogEntry;
use crate::models::entry_kind::EntryKind;
use crate::models::shift::ShiftPair;

/// Rebuild shifts from the raw log.
///
/// Entries are sorted chronologically (ties broken by id, so the input
/// order never matters) and folded with a single "pending start" slot:
/// - START while a start is pending → the pending one becomes incomplete
/// - END with a pending start → closed shift
/// - END without a pending start → orphan
/// - a start still pending at the end → open shift
///
/// The result is newest-first by representative date. The sort is stable,
/// so shifts sharing a representative date keep their scan order.
pub fn build_shifts(entries: &[LogEntry]) -> Vec<ShiftPair> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));

    let (mut pairs, pending) = sorted.into_iter().fold(
        (Vec::new(), None::<LogEntry>),
        |(mut pairs, pending), entry| match entry.kind {
            EntryKind::Start => {
                if let Some(prev) = pending {
                    pairs.push(ShiftPair::incomplete(prev));
                }
                (pairs, Some(entry))
            }
            EntryKind::End => {
                match pending {
                    Some(start) => pairs.push(ShiftPair::closed(start, entry)),
                    None => pairs.push(ShiftPair::orphan(entry)),
                }
                (pairs, None)
            }
        },
    );

    if let Some(start) = pending {
        pairs.push(ShiftPair::open(start));
    }

    pairs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    pairs
}

/// Find a shift by its composite id.
pub fn find_shift<'a>(pairs: &'a [ShiftPair], id: &str) -> Option<&'a ShiftPair> {
    pairs.iter().find(|p| p.id == id)
}
