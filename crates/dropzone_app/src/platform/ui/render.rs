use dropzone_core::{JobListContent, WidgetViewModel};

use super::constants::*;
use crate::platform::page::PageCommand;

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &WidgetViewModel) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    cmds.push(PageCommand::SetClass {
        id: DROPZONE,
        class: ACTIVE_CLASS,
        enabled: view.drop_zone_active,
    });

    cmds.push(PageCommand::SetText {
        id: UPLOAD_STATUS,
        text: view.status_text.clone(),
    });

    cmds.push(match &view.job_list {
        JobListContent::Blank => PageCommand::SetText {
            id: JOBS_LIST,
            text: String::new(),
        },
        JobListContent::Loading(text)
        | JobListContent::Empty(text)
        | JobListContent::Failed(text) => PageCommand::SetText {
            id: JOBS_LIST,
            text: text.clone(),
        },
        JobListContent::Entries(items) => PageCommand::ReplaceListItems {
            id: JOBS_LIST,
            items: items.clone(),
        },
    });

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_become_list_items() {
        let view = WidgetViewModel {
            job_list: JobListContent::Entries(vec!["#7 a.pdf – queued".to_string()]),
            status_text: "Job #7 (a.pdf) status: queued".to_string(),
            ..WidgetViewModel::default()
        };

        assert_eq!(
            render(&view),
            vec![
                PageCommand::SetClass {
                    id: DROPZONE,
                    class: ACTIVE_CLASS,
                    enabled: false,
                },
                PageCommand::SetText {
                    id: UPLOAD_STATUS,
                    text: "Job #7 (a.pdf) status: queued".to_string(),
                },
                PageCommand::ReplaceListItems {
                    id: JOBS_LIST,
                    items: vec!["#7 a.pdf – queued".to_string()],
                },
            ]
        );
    }

    #[test]
    fn failure_text_replaces_list() {
        let view = WidgetViewModel {
            job_list: JobListContent::Failed("Could not fetch jobs".to_string()),
            ..WidgetViewModel::default()
        };

        assert_eq!(
            render(&view)[2],
            PageCommand::SetText {
                id: JOBS_LIST,
                text: "Could not fetch jobs".to_string(),
            }
        );
    }
}
