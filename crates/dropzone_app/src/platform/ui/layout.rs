use dropzone_core::Translator;

use super::constants::*;
use crate::platform::page::{ElementRole, PageCommand};

/// Builds the page skeleton: headings, drop zone, picker, status and list.
pub fn initial_commands(translator: &Translator) -> Vec<PageCommand> {
    vec![
        PageCommand::CreateElement {
            id: HEADING_TITLE,
            role: ElementRole::Heading,
            text: translator.lookup_or("drop_title", "Drop PDF files here"),
        },
        PageCommand::CreateElement {
            id: DROPZONE,
            role: ElementRole::DropTarget,
            text: translator.lookup_or("drop_hint", "Drop PDF files here or click to choose."),
        },
        PageCommand::CreateElement {
            id: FILE_INPUT,
            role: ElementRole::FileInput,
            text: String::new(),
        },
        PageCommand::CreateElement {
            id: UPLOAD_STATUS,
            role: ElementRole::StatusRegion,
            text: String::new(),
        },
        PageCommand::CreateElement {
            id: HEADING_JOBS,
            role: ElementRole::Heading,
            text: translator.lookup_or("recent_jobs", "Recent jobs"),
        },
        PageCommand::CreateElement {
            id: JOBS_LIST,
            role: ElementRole::List,
            text: String::new(),
        },
    ]
}
