use log::info;

mod config;
mod contact;
mod dom;
mod notifier;
mod scheduler;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site scripts");
    contact::mount::mount();
}
