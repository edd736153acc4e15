//! People List Entry Point

fn main() {
    records_ui::mount_people_app();
}
