use super::formatter::{format_task, EMPTY_PLACEHOLDER};
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints each task as a two-line entry followed by a blank line.
    pub fn tasks(tasks: &[&Task]) {
        for task in tasks {
            println!("{}\n", format_task(task));
        }
    }

    pub fn tasks_table(tasks: &[&Task]) {
        Self::table(tasks).printstd();
    }

    pub fn table(tasks: &[&Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESCRIPTION", "STATUS", "CREATED", "UPDATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.description,
                task.status,
                task.created_at,
                task.updated_at.as_deref().unwrap_or(EMPTY_PLACEHOLDER)
            ]);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_header_and_one_row_per_task() {
        let first = Task::new(1, "buy milk", "1/2/2024, 3:04:05 PM");
        let second = Task::new(2, "walk dog", "1/2/2024, 3:05:00 PM");

        let table = View::table(&[&first, &second]);
        assert_eq!(table.len(), 3);

        let rendered = table.to_string();
        assert!(rendered.contains("DESCRIPTION"));
        assert!(rendered.contains("buy milk"));
        assert!(rendered.contains("walk dog"));
    }
}
