//! Assign a day's events to side-by-side columns.
//!
//! First-fit greedy colouring over the interval graph: events are visited in
//! start order and dropped into the first column whose most recent event has
//! already ended. For well-formed intervals processed in start order this
//! yields exactly as many columns as the peak number of simultaneous events.

use log::{debug, trace};

use crate::event::Event;

/// A column of pairwise non-overlapping events, in placement order.
pub type Group<'a> = Vec<&'a Event>;

/// The columns computed for one calendar day.
///
/// Every input event appears in exactly one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSet<'a> {
    groups: Vec<Group<'a>>,
}

impl<'a> GroupSet<'a> {
    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<'a>> {
        self.groups.iter()
    }

    /// Total number of events across all groups.
    pub fn event_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Index of the group holding the event with `id`, if any.
    pub fn group_index_of(&self, id: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.iter().any(|e| e.id == id))
    }

    /// Whether `event` shares any instant with an event placed in a group
    /// other than `group_index`.
    ///
    /// When this is `false` the event's reserved column is unnecessary and the
    /// renderer can let it span the full day width.
    pub fn overlaps_other_group(&self, group_index: usize, event: &Event) -> bool {
        self.groups
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != group_index)
            .any(|(_, group)| group.iter().any(|other| event.overlaps(other)))
    }

    pub fn into_groups(self) -> Vec<Group<'a>> {
        self.groups
    }
}

impl<'a> IntoIterator for GroupSet<'a> {
    type Item = Group<'a>;
    type IntoIter = std::vec::IntoIter<Group<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s GroupSet<'a> {
    type Item = &'s Group<'a>;
    type IntoIter = std::slice::Iter<'s, Group<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition events into the columns of a time grid.
///
/// - Events are stably sorted by start; equal starts keep input order, so the
///   result is identical across calls with the same input.
/// - Each well-formed event goes into the first group whose last event does
///   not overlap it, or opens a new group.
/// - Malformed events (`start >= end`) are each isolated in a group of their
///   own that accepts nothing else. These groups come after the well-formed
///   ones, in start order.
pub fn group_events<'a, I>(events: I) -> GroupSet<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut sorted: Vec<&'a Event> = events.into_iter().collect();
    sorted.sort_by_key(|e| e.start());

    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut isolated: Vec<Group<'a>> = Vec::new();

    for event in sorted {
        if !event.interval.is_well_formed() {
            debug!(
                "event {} has a non-positive duration ({} -> {}), isolating it",
                event.id,
                event.start(),
                event.end()
            );
            isolated.push(vec![event]);
            continue;
        }

        let slot = groups.iter().position(|group| {
            group
                .last()
                .is_some_and(|last| !last.interval.overlaps(&event.interval))
        });

        match slot {
            Some(index) => {
                trace!("event {} -> group {}", event.id, index);
                groups[index].push(event);
            }
            None => {
                trace!("event {} opens group {}", event.id, groups.len());
                groups.push(vec![event]);
            }
        }
    }

    groups.extend(isolated);
    GroupSet { groups }
}
