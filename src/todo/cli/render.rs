use colored::Colorize;
use todo::api::{CmdMessage, MessageLevel};
use todo::model::Record;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// One "N. text" line per record, nothing when empty.
pub(super) fn print_records(records: &[Record]) {
    print!("{}", render_records(records));
}

pub(super) fn render_records(records: &[Record]) -> String {
    records.iter().map(|r| format!("{}\n", r)).collect()
}

pub(super) fn print_location(location: Option<&str>) {
    if let Some(location) = location {
        println!("{}", location);
    }
}
