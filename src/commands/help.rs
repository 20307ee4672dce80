use crate::libs::messages::Message;
use crate::libs::task::Status;
use crate::msg_print;

/// Gap between the usage table columns.
const COLUMN_GAP: &str = "      ";
const INDENT: &str = "  ";

struct Usage {
    name: &'static str,
    params: &'static str,
    description: String,
}

fn commands() -> Vec<Usage> {
    let usage = |name, params, description: &str| Usage {
        name,
        params,
        description: description.to_string(),
    };

    vec![
        usage("help", "", "Lists the available commands"),
        usage("list", "", "Lists all tasks"),
        Usage {
            name: "list",
            params: "?<status>",
            description: format!(
                "Lists only the tasks in that status. Possible status values are {}",
                Status::possible_values()
            ),
        },
        usage("add", "<task-description>", "Adds a task"),
        usage("update", "<task-id> <task-description>", "Updates a task description"),
        usage("delete", "<task-id>", "Deletes a task"),
        usage("mark-todo", "<task-id>", "Marks a task as todo"),
        usage("mark-in-progress", "<task-id>", "Marks a task as in-progress"),
        usage("mark-done", "<task-id>", "Marks a task as done"),
    ]
}

/// Full usage text: a header followed by one aligned row per command form.
pub fn usage() -> String {
    let commands = commands();
    let name_width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let params_width = commands.iter().map(|c| c.params.len()).max().unwrap_or(0);

    let mut text = Message::HelpHeader.to_string();
    for command in &commands {
        text.push('\n');
        text.push_str(&format!(
            "{INDENT}{:<name_width$}{COLUMN_GAP}{:<params_width$}{COLUMN_GAP}{}",
            command.name, command.params, command.description
        ));
    }
    text
}

pub fn cmd() {
    msg_print!(usage());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_starts_with_header() {
        assert!(usage().starts_with("ToDo CLI.\n\nUsage:\n"));
    }

    #[test]
    fn usage_lists_every_command() {
        let text = usage();
        for name in ["help", "list", "add", "update", "delete", "mark-todo", "mark-in-progress", "mark-done"] {
            assert!(
                text.lines().any(|line| line.trim_start().starts_with(name)),
                "missing {name}"
            );
        }
    }

    #[test]
    fn descriptions_are_aligned() {
        let text = usage();
        let rows: Vec<&str> = text.lines().skip(3).collect();
        let column = |row: &str, needle: &str| row.find(needle).unwrap();

        assert_eq!(rows.len(), 9);
        assert_eq!(column(rows[3], "Adds a task"), column(rows[5], "Deletes a task"));
        assert_eq!(column(rows[0], "Lists the"), column(rows[8], "Marks a task as done"));
    }
}
