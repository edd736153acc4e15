//! Task Manager Entry Point

fn main() {
    records_ui::mount_todo_app();
}
