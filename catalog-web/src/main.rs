fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    dioxus::logger::init(level).expect("logger is initialised once");

    dioxus::launch(catalog_web::App);
}
