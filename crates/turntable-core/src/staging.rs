//! Upload staging store.
//!
//! [`StagingSet`] holds the photos a user has picked but not yet
//! submitted, in the order they will be sent (the order encodes the
//! photo-angle sequence). Each entry owns a preview handle obtained from
//! a [`PreviewAllocator`]; the store releases every handle exactly once,
//! on [`remove`](StagingSet::remove), [`clear`](StagingSet::clear), or
//! when the store itself is dropped.
//!
//! No operation here returns an error. Invalid states are represented by
//! [`Validation`] and the caller gates submission on it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{ContentType, StagedFile, now_millis};
use crate::validate::{MAX_FILES, Validation, validate};

/// Source of preview handles for staged files.
///
/// In the browser a handle is an object URL that must be revoked; tests
/// use counting allocators. `release` takes the handle by value so a
/// handle cannot be released twice.
pub trait PreviewAllocator<F> {
    /// The preview handle type.
    type Handle;

    /// Acquire a preview handle for a newly staged file.
    fn acquire(&mut self, file: &F) -> Self::Handle;

    /// Release a handle acquired from this allocator.
    fn release(&mut self, handle: Self::Handle);
}

/// Allocator for contexts that never render thumbnails (the CLI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPreviews;

impl<F> PreviewAllocator<F> for NoPreviews {
    type Handle = ();

    fn acquire(&mut self, _file: &F) -> Self::Handle {}

    fn release(&mut self, (): Self::Handle) {}
}

/// Unique identifier of a staged entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an identifier from a filename, the current time, and a
    /// random base-36 suffix.
    #[must_use]
    pub fn generate(name: &str) -> Self {
        Self(format!("{name}-{}-{}", now_millis(), random_suffix()))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Random base-36 string for [`EntryId::generate`].
///
/// Falls back to a process-wide counter if the platform RNG fails.
fn random_suffix() -> String {
    static FALLBACK: AtomicU64 = AtomicU64::new(0);

    let mut buf = [0u8; 8];
    let value = match getrandom::fill(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            tracing::warn!("random id suffix unavailable, using counter: {e}");
            FALLBACK.fetch_add(1, Ordering::Relaxed)
        }
    };
    to_base36(value)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.iter().rev().map(|&b| char::from(b)).collect()
}

/// Direction for [`StagingSet::move_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the front of the list.
    Up,
    /// Towards the back of the list.
    Down,
}

/// One staged file with its identifier and preview handle.
#[derive(Debug)]
pub struct StagedEntry<F, H> {
    id: EntryId,
    file: F,
    preview: H,
}

impl<F, H> StagedEntry<F, H> {
    /// Identifier assigned when the file was added.
    pub const fn id(&self) -> &EntryId {
        &self.id
    }

    /// The staged file.
    pub const fn file(&self) -> &F {
        &self.file
    }

    /// The preview handle, valid until the entry leaves the store.
    pub const fn preview(&self) -> &H {
        &self.preview
    }
}

/// Ordered set of files staged for upload.
pub struct StagingSet<F, P: PreviewAllocator<F>> {
    entries: Vec<StagedEntry<F, P::Handle>>,
    previews: P,
}

impl<F, P: PreviewAllocator<F>> StagingSet<F, P> {
    /// Create an empty store that acquires previews from `previews`.
    pub const fn new(previews: P) -> Self {
        Self {
            entries: Vec::new(),
            previews,
        }
    }

    /// Entries in submission order.
    pub fn entries(&self) -> &[StagedEntry<F, P::Handle>] {
        &self.entries
    }

    /// Staged files in submission order.
    pub fn files(&self) -> impl Iterator<Item = &F> {
        self.entries.iter().map(|e| &e.file)
    }

    /// Number of staged files.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is staged.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry with the given id.
    pub fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == *id)
    }

    /// Remove the entry with the given id and release its preview.
    ///
    /// Returns `false` (and does nothing) if no such entry exists.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let entry = self.entries.remove(index);
        self.previews.release(entry.preview);
        true
    }

    /// Swap the entry with its neighbour in `direction`.
    ///
    /// Moving the first entry up, the last entry down, or an unknown id
    /// leaves the order unchanged and returns `false`.
    pub fn move_entry(&mut self, id: &EntryId, direction: Direction) -> bool {
        let Some((from, to)) = self.swap_target(id, direction) else {
            return false;
        };
        self.entries.swap(from, to);
        true
    }

    /// Whether [`move_entry`](Self::move_entry) would change the order.
    pub fn can_move(&self, id: &EntryId, direction: Direction) -> bool {
        self.swap_target(id, direction).is_some()
    }

    fn swap_target(&self, id: &EntryId, direction: Direction) -> Option<(usize, usize)> {
        let index = self.position(id)?;
        let neighbour = match direction {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => Some(index + 1).filter(|&i| i < self.entries.len())?,
        };
        Some((index, neighbour))
    }

    /// Remove every entry, releasing all previews.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.previews.release(entry.preview);
        }
    }
}

impl<F: StagedFile, P: PreviewAllocator<F>> StagingSet<F, P> {
    /// Stage a batch of files.
    ///
    /// Files that are not JPEG or PNG are skipped. Accepted files are
    /// appended in order until the store holds [`MAX_FILES`]; the rest of
    /// the batch is discarded. Returns how many files were appended.
    pub fn add(&mut self, files: impl IntoIterator<Item = F>) -> usize {
        let mut added = 0;
        for file in files {
            if ContentType::from_mime(file.content_type()).is_none() {
                tracing::debug!(
                    "skipping {} with unsupported type {:?}",
                    file.name(),
                    file.content_type()
                );
                continue;
            }
            if self.entries.len() >= MAX_FILES {
                tracing::debug!("staging set full, discarding remaining files");
                break;
            }
            let id = self.fresh_id(file.name());
            let preview = self.previews.acquire(&file);
            self.entries.push(StagedEntry { id, file, preview });
            added += 1;
        }
        added
    }

    /// Check the staged set against the submission policy.
    ///
    /// Computed from the current entries on every call.
    pub fn validation(&self) -> Validation {
        validate(self.entries.iter().map(|e| e.file.content_type()))
    }

    /// Generate an id not already used by an entry.
    fn fresh_id(&self, name: &str) -> EntryId {
        loop {
            let id = EntryId::generate(name);
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl<F, P: PreviewAllocator<F>> Drop for StagingSet<F, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<F: fmt::Debug, P: PreviewAllocator<F>> fmt::Debug for StagingSet<F, P>
where
    P::Handle: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagingSet")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::types::ImageFile;
    use crate::validate::ValidationIssue;

    /// Allocator that records how often each handle is released.
    #[derive(Default, Clone)]
    struct Tracker {
        next: u32,
        released: Rc<RefCell<HashMap<u32, u32>>>,
    }

    impl PreviewAllocator<ImageFile> for Tracker {
        type Handle = u32;

        fn acquire(&mut self, _file: &ImageFile) -> u32 {
            self.next += 1;
            self.next
        }

        fn release(&mut self, handle: u32) {
            *self.released.borrow_mut().entry(handle).or_default() += 1;
        }
    }

    fn png(name: &str) -> ImageFile {
        ImageFile::new(name, "image/png", vec![0u8; 4])
    }

    fn jpeg(name: &str) -> ImageFile {
        ImageFile::new(name, "image/jpeg", vec![0u8; 4])
    }

    fn names<P: PreviewAllocator<ImageFile>>(set: &StagingSet<ImageFile, P>) -> Vec<String> {
        set.files().map(|f| f.name().to_owned()).collect()
    }

    fn id_of<P: PreviewAllocator<ImageFile>>(
        set: &StagingSet<ImageFile, P>,
        index: usize,
    ) -> EntryId {
        set.entries()[index].id().clone()
    }

    #[test]
    fn fewer_than_three_reports_how_many_more() {
        let mut set = StagingSet::new(NoPreviews);
        set.add([png("a.png"), png("b.png")]);
        assert_eq!(
            set.validation().message().as_deref(),
            Some("Add at least 3 images (1 more).")
        );
        set.add([jpeg("c.jpg")]);
        assert!(set.validation().is_valid());
    }

    #[test]
    fn never_grows_beyond_six() {
        let mut set = StagingSet::new(NoPreviews);
        let added = set.add((0..5).map(|i| png(&format!("{i}.png"))));
        assert_eq!(added, 5);
        let added = set.add((5..9).map(|i| png(&format!("{i}.png"))));
        assert_eq!(added, 1, "only one slot was left");
        assert_eq!(set.len(), MAX_FILES);
        assert_eq!(names(&set).last().map(String::as_str), Some("5.png"));
        assert_eq!(set.add([png("late.png")]), 0);
        assert_eq!(set.len(), MAX_FILES);
    }

    #[test]
    fn disallowed_types_are_dropped_silently() {
        let mut set = StagingSet::new(NoPreviews);
        let gif = ImageFile::new("anim.gif", "image/gif", vec![]);
        let added = set.add([png("a.png"), gif.clone(), jpeg("b.jpg")]);
        assert_eq!(added, 2);
        assert_eq!(names(&set), ["a.png", "b.jpg"]);

        assert_eq!(set.add([gif]), 0);
        assert_eq!(names(&set), ["a.png", "b.jpg"]);
    }

    #[test]
    fn rejected_files_do_not_consume_slots() {
        let mut set = StagingSet::new(NoPreviews);
        set.add((0..5).map(|i| png(&format!("{i}.png"))));
        let pdf = ImageFile::new("doc.pdf", "application/pdf", vec![]);
        assert_eq!(set.add([pdf, png("last.png")]), 1);
        assert_eq!(names(&set).last().map(String::as_str), Some("last.png"));
    }

    #[test]
    fn remove_releases_preview_once() {
        let tracker = Tracker::default();
        let released = Rc::clone(&tracker.released);
        let mut set = StagingSet::new(tracker);
        set.add([png("a.png"), png("b.png"), png("c.png")]);

        let id = id_of(&set, 1);
        let handle = *set.entries()[1].preview();
        assert!(set.remove(&id));
        assert_eq!(names(&set), ["a.png", "c.png"]);
        assert_eq!(released.borrow().get(&handle), Some(&1));

        assert!(!set.remove(&id), "second remove is a no-op");
        assert_eq!(released.borrow().get(&handle), Some(&1));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let tracker = Tracker::default();
        let released = Rc::clone(&tracker.released);
        let mut set = StagingSet::new(tracker);
        set.add([png("a.png")]);
        assert!(!set.remove(&EntryId::new("missing")));
        assert_eq!(set.len(), 1);
        assert!(released.borrow().is_empty());
    }

    #[test]
    fn boundary_moves_are_noops() {
        let mut set = StagingSet::new(NoPreviews);
        set.add([png("a.png"), png("b.png"), png("c.png")]);
        let first = id_of(&set, 0);
        let last = id_of(&set, 2);

        assert!(!set.can_move(&first, Direction::Up));
        assert!(!set.move_entry(&first, Direction::Up));
        assert!(!set.can_move(&last, Direction::Down));
        assert!(!set.move_entry(&last, Direction::Down));
        assert!(!set.move_entry(&EntryId::new("missing"), Direction::Up));
        assert_eq!(names(&set), ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn interior_move_up_then_down_restores_order() {
        let mut set = StagingSet::new(NoPreviews);
        set.add([png("a.png"), png("b.png"), png("c.png"), png("d.png")]);
        let before = names(&set);
        let id = id_of(&set, 2);

        assert!(set.move_entry(&id, Direction::Up));
        assert_eq!(names(&set), ["a.png", "c.png", "b.png", "d.png"]);
        assert!(set.move_entry(&id, Direction::Down));
        assert_eq!(names(&set), before);

        assert!(set.move_entry(&id, Direction::Down));
        assert!(set.move_entry(&id, Direction::Up));
        assert_eq!(names(&set), before);
    }

    #[test]
    fn clear_releases_every_preview() {
        let tracker = Tracker::default();
        let released = Rc::clone(&tracker.released);
        let mut set = StagingSet::new(tracker);
        set.add([png("a.png"), png("b.png"), png("c.png")]);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(released.borrow().len(), 3);
        assert!(released.borrow().values().all(|&n| n == 1));
        assert_eq!(
            set.validation(),
            Validation::Invalid(ValidationIssue::TooFew { missing: 3 })
        );
    }

    #[test]
    fn drop_releases_remaining_previews_once() {
        let tracker = Tracker::default();
        let released = Rc::clone(&tracker.released);
        {
            let mut set = StagingSet::new(tracker);
            set.add([png("a.png"), png("b.png"), png("c.png")]);
            let id = id_of(&set, 0);
            set.remove(&id);
        }
        assert_eq!(released.borrow().len(), 3);
        assert!(released.borrow().values().all(|&n| n == 1));
    }

    #[test]
    fn clear_then_drop_releases_nothing_twice() {
        let tracker = Tracker::default();
        let released = Rc::clone(&tracker.released);
        {
            let mut set = StagingSet::new(tracker);
            set.add([png("a.png"), png("b.png")]);
            set.clear();
        }
        assert_eq!(released.borrow().len(), 2);
        assert!(released.borrow().values().all(|&n| n == 1));
    }

    #[test]
    fn ids_are_unique_for_identical_names() {
        let mut set = StagingSet::new(NoPreviews);
        set.add([png("same.png"), png("same.png"), png("same.png")]);
        let ids: std::collections::HashSet<_> = set.entries().iter().map(|e| e.id().clone()).collect();
        assert_eq!(ids.len(), 3);
        assert!(set.entries()[0].id().as_str().starts_with("same.png-"));
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }
}
