//! Photo upload: dropzone, staged file list, validation banner, submit.
//!
//! Every component here takes the page's [`UploadStaging`] signal as a
//! prop; the page owns the store and nothing else shares it.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronUp, LdTrash2};
use turntable_core::{ACCEPT, Direction, EntryId, ImageFile, MAX_FILES, MIN_FILES, StagedFile};

use crate::files;
use crate::preview::UploadStaging;

/// Read a batch of files and stage them.
///
/// The picker and drag-and-drop both go through here so filtering and
/// ordering do not depend on how files arrived.
async fn stage_files(mut staging: Signal<UploadStaging>, picked: Vec<FileData>) {
    if picked.is_empty() {
        return;
    }
    let offered = picked.len();
    let images = files::read_image_files(picked).await;
    let added = staging.write().add(images);
    tracing::debug!("staged {added} of {offered} files");
}

/// Identity of the current file picker `<input>`.
///
/// The picker is re-created after every change so its value is empty
/// again; otherwise picking a file that was just removed fires no
/// `change` event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PickerGeneration(u32);

impl PickerGeneration {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    fn key(self) -> String {
        format!("picker-{}", self.0)
    }
}

/// Props for the [`UploadForm`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadFormProps {
    /// The page's staging store.
    staging: Signal<UploadStaging>,
    /// Whether a submission is in flight.
    pending: bool,
    /// Called with the staged files, in order, when the form is submitted.
    on_submit: EventHandler<Vec<ImageFile>>,
}

/// The complete upload form.
#[component]
pub fn UploadForm(props: UploadFormProps) -> Element {
    let staging = props.staging;
    let pending = props.pending;
    let on_submit = props.on_submit;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let set = staging.read();
        if pending || !set.validation().is_valid() {
            return;
        }
        on_submit.call(set.files().cloned().collect());
    };

    rsx! {
        form { class: "space-y-6", onsubmit: handle_submit,
            Dropzone { staging }
            FileList { staging }
            ValidationBanner { staging }
            SubmitButton { staging, pending }
        }
    }
}

/// Props for the [`Dropzone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropzoneProps {
    staging: Signal<UploadStaging>,
}

/// Click-to-browse and drag-and-drop target.
#[component]
pub fn Dropzone(props: DropzoneProps) -> Element {
    let staging = props.staging;
    let mut dragging = use_signal(|| false);
    let mut picker = use_signal(PickerGeneration::default);

    let handle_files = move |evt: FormEvent| async move {
        let picked = evt.files();
        picker.set(picker().next());
        stage_files(staging, picked).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        stage_files(staging, evt.files()).await;
    };

    let border_class = if dragging() {
        "border-(--border-accent) bg-(--surface-active)"
    } else {
        "border-(--border-muted) bg-(--surface)"
    };

    rsx! {
        label {
            class: "flex min-h-[180px] w-full cursor-pointer flex-col items-center justify-center rounded-xl border-2 border-dashed p-8 transition-colors {border_class}",
            aria_label: "Upload product images. Drop files or click to browse. {MIN_FILES} to {MAX_FILES} JPG or PNG images required.",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            for generation in std::iter::once(picker()) {
                input {
                    key: "{generation.key()}",
                    r#type: "file",
                    accept: ACCEPT,
                    multiple: true,
                    class: "sr-only",
                    onchange: handle_files,
                }
            }
            p { class: "text-center text-sm font-medium",
                "Drop images here or click to browse"
            }
            p { class: "mt-1 text-center text-xs text-(--muted)",
                "{MIN_FILES}–{MAX_FILES} JPG or PNG images from different angles"
            }
        }
    }
}

/// Props for the [`FileList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileListProps {
    staging: Signal<UploadStaging>,
}

/// Staged photos in submission order. Renders nothing when empty.
#[component]
pub fn FileList(props: FileListProps) -> Element {
    let staging = props.staging;
    let set = staging.read();
    if set.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul {
            class: "grid gap-3 sm:grid-cols-2 lg:grid-cols-3",
            aria_label: "Selected product images",
            for entry in set.entries() {
                FileItem {
                    key: "{entry.id()}",
                    staging,
                    id: entry.id().clone(),
                    name: entry.file().name().to_owned(),
                    preview: entry.preview().src().map(str::to_owned),
                }
            }
        }
    }
}

/// Props for the [`FileItem`] component.
#[derive(Props, Clone, PartialEq)]
struct FileItemProps {
    staging: Signal<UploadStaging>,
    id: EntryId,
    name: String,
    preview: Option<String>,
}

/// One staged photo with reorder and remove controls.
#[component]
fn FileItem(props: FileItemProps) -> Element {
    let mut staging = props.staging;
    let (can_move_up, can_move_down) = {
        let set = staging.read();
        (
            set.can_move(&props.id, Direction::Up),
            set.can_move(&props.id, Direction::Down),
        )
    };

    let move_up = {
        let id = props.id.clone();
        move |_| {
            staging.write().move_entry(&id, Direction::Up);
        }
    };
    let move_down = {
        let id = props.id.clone();
        move |_| {
            staging.write().move_entry(&id, Direction::Down);
        }
    };
    let remove = {
        let id = props.id.clone();
        move |_| {
            staging.write().remove(&id);
        }
    };

    let icon_button = "inline-flex size-7 items-center justify-center rounded-md hover:bg-(--surface-active) disabled:opacity-40 disabled:cursor-not-allowed";

    rsx! {
        li {
            class: "flex items-center gap-2 rounded-lg border border-(--border) bg-(--surface) p-2",
            "data-state": "selected",

            if let Some(ref src) = props.preview {
                img {
                    class: "size-14 shrink-0 rounded-md object-cover",
                    src: "{src}",
                    alt: "",
                    width: "56",
                    height: "56",
                }
            } else {
                div { class: "size-14 shrink-0 rounded-md bg-(--preview-bg)" }
            }

            div { class: "min-w-0 flex-1 truncate text-xs text-(--muted)", "{props.name}" }

            div { class: "flex shrink-0 items-center gap-0.5",
                button {
                    r#type: "button",
                    class: icon_button,
                    aria_label: "Move image up",
                    disabled: !can_move_up,
                    onclick: move_up,
                    Icon { width: 16, height: 16, icon: LdChevronUp }
                }
                button {
                    r#type: "button",
                    class: icon_button,
                    aria_label: "Move image down",
                    disabled: !can_move_down,
                    onclick: move_down,
                    Icon { width: 16, height: 16, icon: LdChevronDown }
                }
                button {
                    r#type: "button",
                    class: "{icon_button} text-(--text-error)",
                    aria_label: "Remove image",
                    onclick: remove,
                    Icon { width: 16, height: 16, icon: LdTrash2 }
                }
            }
        }
    }
}

/// Props for the [`ValidationBanner`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ValidationBannerProps {
    staging: Signal<UploadStaging>,
}

/// Inline reason the set cannot be submitted. Renders nothing when valid.
#[component]
pub fn ValidationBanner(props: ValidationBannerProps) -> Element {
    let Some(message) = props.staging.read().validation().message() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "rounded-md border border-(--error-border) bg-(--error-bg) px-3 py-2 text-sm text-(--text-error)",
            role: "alert",
            aria_live: "polite",
            "{message}"
        }
    }
}

/// Props for the [`SubmitButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    staging: Signal<UploadStaging>,
    pending: bool,
}

/// Submit control, disabled while the set is invalid or a submission is
/// in flight.
#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let valid = props.staging.read().validation().is_valid();
    let disabled = !valid || props.pending;
    let label = if props.pending { "Processing…" } else { "Create 3D model" };

    let class = if disabled {
        "px-4 py-2 bg-(--btn-disabled) rounded text-(--text-disabled) cursor-not-allowed"
    } else {
        "px-4 py-2 bg-(--btn-primary) hover:bg-(--btn-primary-hover) rounded text-white font-medium transition-colors cursor-pointer"
    };

    rsx! {
        button { r#type: "submit", class, disabled, "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_change_gets_a_fresh_picker() {
        let first = PickerGeneration::default();
        let second = first.next();
        assert_ne!(first.key(), second.key());
        assert_ne!(second.key(), second.next().key());
    }

    #[test]
    fn picker_generation_wraps_instead_of_overflowing() {
        let last = PickerGeneration(u32::MAX);
        assert_eq!(last.next(), PickerGeneration(0));
        assert_ne!(last.key(), last.next().key());
    }
}
