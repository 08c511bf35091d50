use miette::Result;

/// Main entry point for the course-schedule CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    course_schedule::run()
}
