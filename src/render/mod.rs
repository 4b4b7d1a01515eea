pub mod booklist;
pub mod html;
pub mod participants;

use clap::ValueEnum;

use crate::pipeline::neighborhoods::Neighborhood;

/// Pages that can be generated from the grouped registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    Booklist,
    ParticipantList,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Booklist, Page::ParticipantList];

    pub fn name(self) -> &'static str {
        match self {
            Page::Booklist => "booklist",
            Page::ParticipantList => "participant-list",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Page::Booklist => "Page of recommended books.",
            Page::ParticipantList => "Page of participants by Neighborhood and Booth.",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Page::Booklist => "Recommended Books",
            Page::ParticipantList => "Participants",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub page: Page,
    /// Emit a complete HTML document instead of an embeddable snippet.
    pub webpage: bool,
}

pub fn render(neighborhoods: &[Neighborhood], options: &RenderOptions) -> String {
    let body = match options.page {
        Page::Booklist => booklist::render(neighborhoods),
        Page::ParticipantList => participants::render(neighborhoods),
    };

    if options.webpage {
        html::document(options.page.title(), options.page.name(), &body)
    } else {
        body
    }
}
