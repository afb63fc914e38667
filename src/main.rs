mod api;
mod app;
mod controller;
mod render;
mod ui;
mod utils;

use adw::Application;
use adw::prelude::*;

static GLIB_LOGGER: glib::GlibLogger = glib::GlibLogger::new(
    glib::GlibLoggerFormat::Plain,
    glib::GlibLoggerDomain::CrateTarget,
);

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("panic: {info}");
        default_hook(info);
    }));
}

fn main() -> glib::ExitCode {
    if let Err(e) = log::set_logger(&GLIB_LOGGER) {
        eprintln!("logger already installed: {e}");
    }
    log::set_max_level(log::LevelFilter::Info);
    install_panic_hook();

    let settings = crate::app::Settings::load();
    log::set_max_level(settings.log_filter());

    let app = Application::builder()
        .application_id("com.example.ContactsGtk")
        .build();
    app.connect_activate(move |app| {
        crate::app::build_ui(app, &settings);
    });
    app.run()
}
