//! In-memory page the widget renders into, drawn as text on the terminal.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use dropzone_core::{FileCandidate, Msg};

use super::ui::constants::*;

pub type ElementId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Heading,
    DropTarget,
    FileInput,
    StatusRegion,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    CreateElement {
        id: ElementId,
        role: ElementRole,
        text: String,
    },
    /// Replaces the element's content with plain text.
    SetText {
        id: ElementId,
        text: String,
    },
    SetClass {
        id: ElementId,
        class: &'static str,
        enabled: bool,
    },
    /// Replaces the element's content with one item per entry.
    ReplaceListItems {
        id: ElementId,
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub role: ElementRole,
    pub text: String,
    pub classes: BTreeSet<&'static str>,
    pub items: Vec<String>,
}

/// Input events as the platform reports them, addressed to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Load,
    DragEnter { target: ElementId },
    DragOver { target: ElementId },
    DragLeave { target: ElementId },
    Drop {
        target: ElementId,
        files: Vec<FileCandidate>,
    },
    Click { target: ElementId },
    Change {
        target: ElementId,
        files: Vec<FileCandidate>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub msg: Msg,
    pub default_prevented: bool,
}

#[derive(Debug, Default)]
pub struct Page {
    elements: Vec<Element>,
    picker_open: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    pub fn apply(&mut self, commands: Vec<PageCommand>) {
        for command in commands {
            match command {
                PageCommand::CreateElement { id, role, text } => {
                    if self.element(id).is_none() {
                        self.elements.push(Element {
                            id,
                            role,
                            text,
                            classes: BTreeSet::new(),
                            items: Vec::new(),
                        });
                    }
                }
                PageCommand::SetText { id, text } => {
                    if let Some(element) = self.element_mut(id) {
                        element.text = text;
                        element.items.clear();
                    }
                }
                PageCommand::SetClass { id, class, enabled } => {
                    if let Some(element) = self.element_mut(id) {
                        if enabled {
                            element.classes.insert(class);
                        } else {
                            element.classes.remove(class);
                        }
                    }
                }
                PageCommand::ReplaceListItems { id, items } => {
                    if let Some(element) = self.element_mut(id) {
                        element.text.clear();
                        element.items = items;
                    }
                }
            }
        }
    }

    /// Opens the picker bound to the file input, if the page has one.
    pub fn open_file_picker(&mut self) -> bool {
        self.picker_open = self
            .elements
            .iter()
            .any(|element| element.role == ElementRole::FileInput);
        self.picker_open
    }

    /// Closes the picker and returns whether it was open.
    pub fn close_file_picker(&mut self) -> bool {
        std::mem::take(&mut self.picker_open)
    }

    /// Routes a platform event to the widget message it stands for.
    ///
    /// Events on elements the widget does not listen to yield `None`.
    pub fn dispatch(&self, event: PageEvent) -> Option<Dispatch> {
        let msg = match event {
            PageEvent::Load => Msg::PageLoaded,
            PageEvent::DragEnter { target } if target == DROPZONE => Msg::DragEnter,
            PageEvent::DragOver { target } if target == DROPZONE => Msg::DragOver,
            PageEvent::DragLeave { target } if target == DROPZONE => Msg::DragLeave,
            PageEvent::Drop { target, files } if target == DROPZONE => Msg::Dropped(files),
            PageEvent::Click { target } if target == DROPZONE => Msg::DropZoneClicked,
            PageEvent::Change { target, files } if target == FILE_INPUT => Msg::FilesChosen(files),
            _ => return None,
        };
        let default_prevented = msg.suppresses_default();
        Some(Dispatch {
            msg,
            default_prevented,
        })
    }

    /// Text rendering of the page, one element per block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            match element.role {
                ElementRole::Heading => {
                    let _ = writeln!(out, "== {} ==", element.text);
                }
                ElementRole::DropTarget => {
                    let marker = if element.classes.contains(ACTIVE_CLASS) {
                        "[>> "
                    } else {
                        "[   "
                    };
                    let _ = writeln!(out, "{marker}{} ]", element.text);
                }
                ElementRole::FileInput => {
                    if self.picker_open {
                        let _ = writeln!(out, "file-input> (paths, empty line to cancel)");
                    }
                }
                ElementRole::StatusRegion => {
                    if !element.text.is_empty() {
                        let _ = writeln!(out, "{}", element.text);
                    }
                }
                ElementRole::List => {
                    if element.items.is_empty() {
                        let _ = writeln!(out, "  {}", element.text);
                    }
                    for item in &element.items {
                        let _ = writeln!(out, "  - {item}");
                    }
                }
            }
        }
        out
    }
}

/// Describes a local file the way a browser file list would.
///
/// Unknown extensions get an empty MIME type.
pub fn file_from_path(path: &Path) -> FileCandidate {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default();
    FileCandidate::new(name, mime_type, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::layout;
    use dropzone_core::Translator;

    fn page() -> Page {
        let mut page = Page::new();
        page.apply(layout::initial_commands(&Translator::default()));
        page
    }

    #[test]
    fn drag_events_on_dropzone_prevent_default() {
        let page = page();
        let enter = page.dispatch(PageEvent::DragEnter { target: DROPZONE }).unwrap();
        assert_eq!(enter.msg, Msg::DragEnter);
        assert!(enter.default_prevented);

        let leave = page.dispatch(PageEvent::DragLeave { target: DROPZONE }).unwrap();
        assert_eq!(leave.msg, Msg::DragLeave);
        assert!(!leave.default_prevented);
    }

    #[test]
    fn events_on_other_elements_are_ignored() {
        let page = page();
        assert_eq!(page.dispatch(PageEvent::Click { target: JOBS_LIST }), None);
        assert_eq!(
            page.dispatch(PageEvent::Change {
                target: DROPZONE,
                files: Vec::new(),
            }),
            None
        );
    }

    #[test]
    fn change_on_file_input_is_independent_of_drag_state() {
        let page = page();
        let files = vec![file_from_path(Path::new("/tmp/a.pdf"))];
        let dispatch = page
            .dispatch(PageEvent::Change {
                target: FILE_INPUT,
                files: files.clone(),
            })
            .unwrap();
        assert_eq!(dispatch.msg, Msg::FilesChosen(files));
        assert!(!dispatch.default_prevented);
    }

    #[test]
    fn set_text_replaces_list_items() {
        let mut page = page();
        page.apply(vec![PageCommand::ReplaceListItems {
            id: JOBS_LIST,
            items: vec!["#1 a.pdf – printed".to_string()],
        }]);
        page.apply(vec![PageCommand::SetText {
            id: JOBS_LIST,
            text: "Loading...".to_string(),
        }]);

        let list = page.element(JOBS_LIST).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.text, "Loading...");
    }

    #[test]
    fn picker_needs_a_file_input() {
        let mut empty = Page::new();
        assert!(!empty.open_file_picker());

        let mut page = page();
        assert!(page.open_file_picker());
        assert!(page.render_text().contains("file-input>"));
        assert!(page.close_file_picker());
        assert!(!page.close_file_picker());
    }

    #[test]
    fn mime_type_comes_from_extension() {
        assert_eq!(file_from_path(Path::new("/x/report.pdf")).mime_type, "application/pdf");
        assert_eq!(file_from_path(Path::new("/x/photo.png")).mime_type, "image/png");
        assert_eq!(file_from_path(Path::new("/x/README")).mime_type, "");
        assert_eq!(file_from_path(Path::new("/x/report.pdf")).name, "report.pdf");
    }
}
