fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the graph editor application
    fastgraph::run_app()
}
