fn main() {
    habitat_tasks::app::cli::run();
}
