//! Record table component for one section of the review screen.
//!
//! This component renders a titled table of records with cursor
//! highlighting, a status badge, and the key hints for each row's actions.
//! The record being edited shows its scratch buffers instead of its stored
//! name and email.

use crate::review::Record;
use crate::tui::state::{EditField, EditSession, ScreenVariant, Section, available_actions};

use super::text_truncate::{fit_to_width, truncate_to_display_width_with_ellipsis};

const NAME_WIDTH: usize = 18;
const EMAIL_WIDTH: usize = 22;
const PHONE_WIDTH: usize = 10;
const MESSAGE_WIDTH: usize = 30;
const STATUS_WIDTH: usize = 10;

/// Context for rendering one section table.
#[derive(Debug, Clone)]
pub struct RecordTableViewContext<'a> {
    /// Section being rendered; selects the title and row actions.
    pub section: Section,
    /// Records to show, in display order.
    pub records: &'a [&'a Record],
    /// Active screen variant; selects columns and action labels.
    pub variant: ScreenVariant,
    /// Index into `records` of the row under the cursor, if it is in this
    /// section.
    pub selected: Option<usize>,
    /// Open edit session, if any.
    pub editing: Option<&'a EditSession>,
    /// Message shown instead of rows when `records` is empty. Sections
    /// without a message render nothing when empty.
    pub empty_message: Option<&'a str>,
    /// Whether an enrich-all run is outstanding.
    pub enriching: bool,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component for displaying one section of records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordTableComponent;

impl RecordTableComponent {
    /// Lines rendered above the first row: the title and the column header.
    pub const HEADER_LINES: usize = 2;

    /// Renders the section as a string, one line per row.
    #[must_use]
    pub fn view(ctx: &RecordTableViewContext<'_>) -> String {
        if ctx.records.is_empty() {
            return ctx.empty_message.map_or_else(String::new, |message| {
                format!("{}\n  {message}\n", Self::title_line(ctx))
            });
        }

        let mut output = String::new();
        Self::push_line(&mut output, &Self::title_line(ctx), ctx.max_width);
        Self::push_line(&mut output, &Self::column_header(ctx.variant), ctx.max_width);

        for (index, record) in ctx.records.iter().enumerate() {
            let is_selected = ctx.selected == Some(index);
            let line = Self::format_row(ctx, record, is_selected);
            Self::push_line(&mut output, &line, ctx.max_width);
        }

        output
    }

    /// Line within [`Self::view`]'s output that shows the selected row.
    #[must_use]
    pub fn selected_line(ctx: &RecordTableViewContext<'_>) -> Option<usize> {
        ctx.selected
            .filter(|index| *index < ctx.records.len())
            .map(|index| index.saturating_add(Self::HEADER_LINES))
    }

    fn push_line(output: &mut String, line: &str, max_width: usize) {
        output.push_str(&truncate_to_display_width_with_ellipsis(line, max_width));
        output.push('\n');
    }

    fn title_line(ctx: &RecordTableViewContext<'_>) -> String {
        let count = ctx.records.len();
        let title = ctx.section.title();
        match ctx.section {
            Section::Accepted if ctx.enriching => format!("{title} ({count})  [Enriching...]"),
            Section::Accepted => format!("{title} ({count})  [E: Enrich all]"),
            _ => format!("{title} ({count})"),
        }
    }

    fn column_header(variant: ScreenVariant) -> String {
        let mut header = format!(
            "  {} {} ",
            fit_to_width("Name", NAME_WIDTH),
            fit_to_width("Email", EMAIL_WIDTH)
        );
        if variant.shows_contact_details() {
            header.push_str(&fit_to_width("Phone", PHONE_WIDTH));
            header.push(' ');
            header.push_str(&fit_to_width("Message", MESSAGE_WIDTH));
            header.push(' ');
        }
        header.push_str(&fit_to_width("Status", STATUS_WIDTH));
        header.push_str(" Actions");
        header
    }

    fn format_row(ctx: &RecordTableViewContext<'_>, record: &Record, is_selected: bool) -> String {
        let prefix = if is_selected { ">" } else { " " };
        let session = ctx
            .editing
            .filter(|session| session.record_id() == record.id);

        let (name, email) = session.map_or_else(
            || (record.name.clone(), record.email.clone()),
            |active| {
                (
                    edit_cell(active.name(), active.focus() == EditField::Name),
                    edit_cell(active.email(), active.focus() == EditField::Email),
                )
            },
        );

        let mut line = format!(
            "{prefix} {} {} ",
            fit_to_width(&name, NAME_WIDTH),
            fit_to_width(&email, EMAIL_WIDTH)
        );
        if ctx.variant.shows_contact_details() {
            line.push_str(&fit_to_width(
                record.phone.as_deref().unwrap_or_default(),
                PHONE_WIDTH,
            ));
            line.push(' ');
            line.push_str(&fit_to_width(
                record.message.as_deref().unwrap_or_default(),
                MESSAGE_WIDTH,
            ));
            line.push(' ');
        }
        line.push_str(&fit_to_width(
            &format!("[{}]", record.status.label()),
            STATUS_WIDTH,
        ));
        line.push(' ');

        if session.is_some() {
            line.push_str("Enter:save  Esc:cancel");
        } else {
            line.push_str(&action_hints(ctx.section, record, ctx.variant));
        }
        line.trim_end().to_owned()
    }
}

/// Scratch buffer cell; the focused buffer carries a trailing cursor.
fn edit_cell(text: &str, focused: bool) -> String {
    if focused {
        format!("{text}_")
    } else {
        text.to_owned()
    }
}

fn action_hints(section: Section, record: &Record, variant: ScreenVariant) -> String {
    available_actions(section, record.status, variant)
        .iter()
        .map(|action| format!("{}:{}", action.key(), action.label(variant)))
        .collect::<Vec<_>>()
        .join(" ")
}
